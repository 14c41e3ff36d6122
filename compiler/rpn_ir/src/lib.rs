//! RPN IR - Shared Vocabulary Types
//!
//! This crate holds the small value types every other crate in the
//! workspace agrees on:
//! - `Operator` for the binary arithmetic operators
//! - `UnaryFunction` and `FunctionTable` for named single-argument functions
//! - `VarName` and `VarTable` for variable bindings
//! - `Token` and `TokenKind` for lexer output, plus the number spellings
//!   and word rules the renderers and the lexer share
//! - Error types for binding lookup and constructor contract violations
//!
//! Nothing here knows about expression trees; `rpn_expr` builds on top.

mod errors;
mod function;
mod lexeme;
mod operator;
mod token;
mod var_table;

pub use errors::{InvalidArgument, UnboundVariable};
pub use function::{FunctionTable, UnaryFunction};
pub use lexeme::{
    format_number, is_separator, is_variable_word, parse_number, CALL_SUFFIX, COND_OP,
};
pub use operator::Operator;
pub use token::{Token, TokenKind};
pub use var_table::{VarName, VarTable};

#[cfg(test)]
mod tests;
