//! Error types shared across the workspace.

use thiserror::Error;

/// A variable was looked up in a [`VarTable`](crate::VarTable) that has no
/// binding for it.
///
/// Recoverable: callers can bind the variable and retry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("variable '{name}' is not defined")]
pub struct UnboundVariable {
    pub name: String,
}

impl UnboundVariable {
    pub fn new(name: impl Into<String>) -> Self {
        UnboundVariable { name: name.into() }
    }
}

/// A constructor received a value that violates its contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("variable name must not be empty")]
    EmptyVariableName,
    #[error("variable name must be a single word that is not a number, operator, '?:' or call")]
    MalformedVariableName,
    #[error("function name must not be empty")]
    EmptyFunctionName,
}
