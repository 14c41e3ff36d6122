//! RPN Expr - Arithmetic Expression Trees
//!
//! An [`Expr`] is an immutable tree over five node kinds: constants,
//! variables, binary operations, conditionals (`c ? t : f`) and unary
//! function applications. Every capability is a method with an exhaustive
//! `match` over the node kinds:
//!
//! - [`Expr::eval`] against a [`VarTable`](rpn_ir::VarTable)
//! - [`Expr::op_count`] and [`Expr::free_variables`]
//! - [`Expr::infix`] and [`Expr::postfix`]
//! - [`Expr::optimize`] for constant folding and dead-branch elimination
//! - structural equality through `PartialEq`
//!
//! Nothing mutates a tree after construction. "Changing" an expression
//! always builds a new one.
//!
//! # Deep Trees
//!
//! RPN input like `1 1 + 1 + 1 + ...` produces trees as deep as the input is
//! long. Traversals run under [`ensure_sufficient_stack`] and dropping a
//! tree is iterative, so depth is bounded by memory rather than by the
//! native stack.

mod eval;
mod expr;
mod inspect;
mod optimize;
mod render;
mod stack;

pub use eval::{is_truthy, EvalResult};
pub use expr::Expr;
pub use inspect::APPLICATION_COST;
pub use stack::ensure_sufficient_stack;
