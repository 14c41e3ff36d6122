//! Parse errors.

use rpn_ir::InvalidArgument;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Operands and operators do not balance. `stack_size` is the number of
    /// expressions on the stack where the imbalance was detected.
    #[error("incomplete RPN expression '{expression}' (stack size {stack_size})")]
    IncompleteRpn {
        expression: String,
        stack_size: usize,
    },

    /// A `name()` token named a function missing from the function table.
    #[error("undefined function '{name}'")]
    UndefinedFunction { name: String },

    /// A token produced a node that violates a constructor contract.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

impl ParseError {
    pub fn incomplete(expression: &str, stack_size: usize) -> Self {
        ParseError::IncompleteRpn {
            expression: expression.to_owned(),
            stack_size,
        }
    }

    pub fn undefined_function(name: &str) -> Self {
        ParseError::UndefinedFunction {
            name: name.to_owned(),
        }
    }
}
