//! Constant folding, variable inlining and dead-branch elimination.
//!
//! Optimization is partial evaluation: variables bound at optimize time are
//! baked in as constants, unbound ones stay symbolic. Folding runs bottom-up,
//! one rule per node kind:
//!
//! - **Constant**: unchanged.
//! - **Variable**: constant if bound, unchanged otherwise.
//! - **Operation**: fold when both optimized operands are constants.
//! - **Conditional**: a constant condition selects its optimized branch and
//!   discards the other without evaluating it.
//! - **Application**: fold when the optimized argument is a constant.
//!
//! Optimization is total. A single pass reaches a fixed point, so optimizing
//! an optimized tree with the same table returns an equal tree.

use rpn_ir::{Operator, UnaryFunction, VarName, VarTable};
use tracing::debug;

use crate::{ensure_sufficient_stack, is_truthy, Expr};

impl Expr {
    /// Return an optimized copy of this tree; `self` is left untouched.
    pub fn optimize(&self, vars: &VarTable) -> Expr {
        let optimized = self.fold(vars);
        debug!(
            before = self.op_count(),
            after = optimized.op_count(),
            "optimized expression"
        );
        optimized
    }

    fn fold(&self, vars: &VarTable) -> Expr {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(value) => Expr::Constant(*value),
            Expr::Variable(name) => fold_variable(name, vars),
            Expr::Operation { op, left, right } => fold_operation(*op, left, right, vars),
            Expr::Conditional {
                condition,
                if_true,
                if_false,
            } => fold_conditional(condition, if_true, if_false, vars),
            Expr::Application { function, argument } => fold_application(function, argument, vars),
        })
    }
}

fn fold_variable(name: &VarName, vars: &VarTable) -> Expr {
    match vars.get(name.as_str()) {
        Ok(value) => Expr::Constant(value),
        Err(_) => Expr::Variable(name.clone()),
    }
}

fn fold_operation(op: Operator, left: &Expr, right: &Expr, vars: &VarTable) -> Expr {
    let left = left.fold(vars);
    let right = right.fold(vars);
    match (left.as_constant(), right.as_constant()) {
        (Some(l), Some(r)) => Expr::Constant(op.operate(l, r)),
        _ => Expr::operation(op, left, right),
    }
}

fn fold_conditional(condition: &Expr, if_true: &Expr, if_false: &Expr, vars: &VarTable) -> Expr {
    let condition = condition.fold(vars);
    let if_true = if_true.fold(vars);
    let if_false = if_false.fold(vars);
    match condition.as_constant() {
        Some(c) if is_truthy(c) => if_true,
        Some(_) => if_false,
        None => Expr::conditional(condition, if_true, if_false),
    }
}

fn fold_application(function: &UnaryFunction, argument: &Expr, vars: &VarTable) -> Expr {
    let argument = argument.fold(vars);
    match argument.as_constant() {
        Some(x) => Expr::Constant(function.apply(x)),
        None => Expr::application(function.clone(), argument),
    }
}
