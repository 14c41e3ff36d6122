//! Structural queries: operation count and free variables.

use rustc_hash::FxHashSet;

use crate::{ensure_sufficient_stack, Expr};

/// Operations charged for a function call, on top of its argument.
pub const APPLICATION_COST: usize = 1;

impl Expr {
    /// Worst-case number of primitive operations needed to evaluate the tree.
    ///
    /// A conditional pays for its condition, one selection, and the more
    /// expensive branch only, since just one branch ever runs.
    pub fn op_count(&self) -> usize {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(_) | Expr::Variable(_) => 0,
            Expr::Operation { left, right, .. } => 1 + left.op_count() + right.op_count(),
            Expr::Conditional {
                condition,
                if_true,
                if_false,
            } => condition.op_count() + if_true.op_count().max(if_false.op_count()) + 1,
            Expr::Application { argument, .. } => APPLICATION_COST + argument.op_count(),
        })
    }

    /// Names of every variable referenced in the tree.
    pub fn free_variables(&self) -> FxHashSet<&str> {
        let mut names = FxHashSet::default();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut FxHashSet<&'a str>) {
        ensure_sufficient_stack(move || match self {
            Expr::Constant(_) => {}
            Expr::Variable(name) => {
                names.insert(name.as_str());
            }
            Expr::Operation { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
            Expr::Conditional {
                condition,
                if_true,
                if_false,
            } => {
                condition.collect_variables(names);
                if_true.collect_variables(names);
                if_false.collect_variables(names);
            }
            Expr::Application { argument, .. } => argument.collect_variables(names),
        });
    }
}
