//! Evaluation against a binding table.

use rpn_ir::{UnboundVariable, VarTable};

use crate::{ensure_sufficient_stack, Expr};

/// Result of evaluating an expression.
pub type EvalResult = Result<f64, UnboundVariable>;

/// Conditional semantics: zero (either sign) is false, every other value,
/// NaN included, is true.
#[inline]
pub fn is_truthy(value: f64) -> bool {
    value != 0.0
}

impl Expr {
    /// Evaluate the tree, looking variables up in `vars`.
    ///
    /// Children are evaluated before their parent, except that a conditional
    /// evaluates only the branch its condition selects.
    pub fn eval(&self, vars: &VarTable) -> EvalResult {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(value) => Ok(*value),
            Expr::Variable(name) => vars.get(name.as_str()),
            Expr::Operation { op, left, right } => {
                let left = left.eval(vars)?;
                let right = right.eval(vars)?;
                Ok(op.operate(left, right))
            }
            Expr::Conditional {
                condition,
                if_true,
                if_false,
            } => {
                if is_truthy(condition.eval(vars)?) {
                    if_true.eval(vars)
                } else {
                    if_false.eval(vars)
                }
            }
            Expr::Application { function, argument } => Ok(function.apply(argument.eval(vars)?)),
        })
    }
}
