//! RPN parser.
//!
//! Builds an [`Expr`] from a whitespace-separated postfix string. Each token
//! pushes one subexpression onto a local stack, first popping whatever
//! operands it needs:
//!
//! | Token | Pops | Pushes |
//! |---|---|---|
//! | number | 0 | `Constant` |
//! | variable | 0 | `Variable` (not checked against any bindings) |
//! | `+ - * / ^` | 2 (right, then left) | `Operation` |
//! | `?:` | 3 (false, true, condition) | `Conditional` |
//! | `name()` | 1 | `Application` of `name` from the function table |
//!
//! Input is well formed when exactly one expression is left at the end.
//! Arity is checked before anything is popped.

mod error;

use rpn_expr::Expr;
use rpn_ir::{FunctionTable, Operator, Token, TokenKind};
use rpn_lexer::tokenize;
use tracing::{debug, trace};

pub use error::ParseError;

/// Parse the RPN expression in `source`.
///
/// Function tokens (`name()`) are resolved in `functions` by name, without
/// the `()` suffix.
///
/// # Errors
///
/// - [`ParseError::IncompleteRpn`] if an operator, `?:` or function finds too
///   few operands, or if the input does not reduce to exactly one expression.
/// - [`ParseError::UndefinedFunction`] if a function is missing from
///   `functions`.
pub fn parse(source: &str, functions: &FunctionTable) -> Result<Expr, ParseError> {
    let mut parser = RpnParser::new(source, functions);
    for token in tokenize(source) {
        parser.push_token(token)?;
    }
    let expr = parser.finish()?;
    debug!(
        source,
        op_count = expr.op_count(),
        "parsed RPN expression"
    );
    Ok(expr)
}

/// Parser state for a single call to [`parse`].
struct RpnParser<'a> {
    source: &'a str,
    functions: &'a FunctionTable,
    stack: Vec<Expr>,
}

impl<'a> RpnParser<'a> {
    fn new(source: &'a str, functions: &'a FunctionTable) -> Self {
        RpnParser {
            source,
            functions,
            stack: Vec::new(),
        }
    }

    fn push_token(&mut self, token: Token<'_>) -> Result<(), ParseError> {
        trace!(token = token.text, depth = self.stack.len(), "rpn token");
        let expr = match token.kind {
            TokenKind::Number(value) => Expr::constant(value),
            TokenKind::Variable(name) => Expr::variable(name)?,
            TokenKind::Operator(op) => self.operation(op)?,
            TokenKind::CondOp => {
                let [condition, if_true, if_false] = self.pop::<3>()?;
                Expr::conditional(condition, if_true, if_false)
            }
            TokenKind::Function(name) => self.application(name)?,
        };
        self.stack.push(expr);
        Ok(())
    }

    fn operation(&mut self, op: Operator) -> Result<Expr, ParseError> {
        let [left, right] = self.pop::<2>()?;
        Ok(Expr::operation(op, left, right))
    }

    fn application(&mut self, name: &str) -> Result<Expr, ParseError> {
        let [argument] = self.pop::<1>()?;
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| ParseError::undefined_function(name))?;
        Ok(Expr::application(function.clone(), argument))
    }

    /// Pop the top `N` expressions, returned in the order they were pushed.
    ///
    /// Fails without touching the stack if it holds fewer than `N`.
    fn pop<const N: usize>(&mut self) -> Result<[Expr; N], ParseError> {
        let Some(split) = self.stack.len().checked_sub(N) else {
            return Err(self.incomplete());
        };
        let operands = self.stack.split_off(split);
        operands.try_into().map_err(|_| self.incomplete())
    }

    fn finish(mut self) -> Result<Expr, ParseError> {
        if self.stack.len() != 1 {
            return Err(self.incomplete());
        }
        let [expr] = self.pop::<1>()?;
        Ok(expr)
    }

    fn incomplete(&self) -> ParseError {
        ParseError::incomplete(self.source, self.stack.len())
    }
}
