//! Infix and postfix rendering.
//!
//! Infix output is fully parenthesised, so it never depends on precedence:
//!
//! ```text
//! (((2.0 * y) + 1.0) ^ 3.0)
//! ((x + 3.0) ? (2.0 * y) : 7.0)
//! sqrt((x * x))
//! ```
//!
//! Postfix output is space-separated RPN that the parser reads back into an
//! equal tree.

use std::fmt;

use rpn_ir::{format_number, CALL_SUFFIX, COND_OP};

use crate::{ensure_sufficient_stack, Expr};

impl Expr {
    /// Fully parenthesised infix notation.
    pub fn infix(&self) -> String {
        let mut out = String::new();
        self.write_infix(&mut out);
        out
    }

    /// Space-separated postfix (RPN) notation.
    pub fn postfix(&self) -> String {
        let mut out = String::new();
        self.write_postfix(&mut out);
        out
    }

    fn write_infix(&self, out: &mut String) {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(value) => out.push_str(&format_number(*value)),
            Expr::Variable(name) => out.push_str(name.as_str()),
            Expr::Operation { op, left, right } => {
                out.push('(');
                left.write_infix(out);
                out.push(' ');
                out.push_str(op.symbol());
                out.push(' ');
                right.write_infix(out);
                out.push(')');
            }
            Expr::Conditional {
                condition,
                if_true,
                if_false,
            } => {
                out.push('(');
                condition.write_infix(out);
                out.push_str(" ? ");
                if_true.write_infix(out);
                out.push_str(" : ");
                if_false.write_infix(out);
                out.push(')');
            }
            Expr::Application { function, argument } => {
                out.push_str(function.name());
                out.push('(');
                argument.write_infix(out);
                out.push(')');
            }
        });
    }

    fn write_postfix(&self, out: &mut String) {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(_) | Expr::Variable(_) => self.write_infix(out),
            Expr::Operation { op, left, right } => {
                left.write_postfix(out);
                out.push(' ');
                right.write_postfix(out);
                out.push(' ');
                out.push_str(op.symbol());
            }
            Expr::Conditional {
                condition,
                if_true,
                if_false,
            } => {
                condition.write_postfix(out);
                out.push(' ');
                if_true.write_postfix(out);
                out.push(' ');
                if_false.write_postfix(out);
                out.push(' ');
                out.push_str(COND_OP);
            }
            Expr::Application { function, argument } => {
                argument.write_postfix(out);
                out.push(' ');
                out.push_str(function.name());
                out.push_str(CALL_SUFFIX);
            }
        });
    }
}

/// Displays the infix form.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.infix())
    }
}
