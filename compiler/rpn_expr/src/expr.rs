//! The expression sum type and its constructors.

use std::{fmt, mem};

use rpn_ir::{InvalidArgument, Operator, UnaryFunction, VarName};

use crate::ensure_sufficient_stack;

/// An arithmetic expression tree.
///
/// Each interior node exclusively owns its children, so trees never share
/// nodes and cannot contain cycles. Equality is structural: same node kinds,
/// same payloads, equal children. Values produced by evaluation play no part.
/// Constants compare by bit pattern, except that all NaNs are one value.
/// This keeps equality reflexive: a NaN constant equals itself (and any
/// other NaN constant), while `0.0` and `-0.0` are different constants.
pub enum Expr {
    /// A numeric literal.
    Constant(f64),
    /// A named value looked up at evaluation time.
    Variable(VarName),
    /// `left op right`.
    Operation {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `condition ? if_true : if_false`; zero is false, anything else true.
    Conditional {
        condition: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },
    /// `function(argument)`.
    Application {
        function: UnaryFunction,
        argument: Box<Expr>,
    },
}

impl Expr {
    #[inline]
    pub fn constant(value: f64) -> Expr {
        Expr::Constant(value)
    }

    /// A variable reference. Fails if `name` is empty.
    pub fn variable(name: &str) -> Result<Expr, InvalidArgument> {
        VarName::new(name).map(Expr::Variable)
    }

    pub fn operation(op: Operator, left: Expr, right: Expr) -> Expr {
        Expr::Operation {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn conditional(condition: Expr, if_true: Expr, if_false: Expr) -> Expr {
        Expr::Conditional {
            condition: Box::new(condition),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    pub fn application(function: UnaryFunction, argument: Expr) -> Expr {
        Expr::Application {
            function,
            argument: Box::new(argument),
        }
    }

    /// The value of a `Constant` node, `None` for every other kind.
    #[inline]
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expr::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether this node is a `Constant` or `Variable`.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Constant(_) | Expr::Variable(_))
    }

    /// Move every non-leaf child of `self` into `pending`, leaving a leaf in
    /// its place.
    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        let mut detach = |child: &mut Box<Expr>| {
            if !child.is_leaf() {
                pending.push(mem::replace(&mut **child, Expr::Constant(0.0)));
            }
        };
        match self {
            Expr::Constant(_) | Expr::Variable(_) => {}
            Expr::Operation { left, right, .. } => {
                detach(left);
                detach(right);
            }
            Expr::Conditional {
                condition,
                if_true,
                if_false,
            } => {
                detach(condition);
                detach(if_true);
                detach(if_false);
            }
            Expr::Application { argument, .. } => detach(argument),
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(value) => Expr::Constant(*value),
            Expr::Variable(name) => Expr::Variable(name.clone()),
            Expr::Operation { op, left, right } => Expr::Operation {
                op: *op,
                left: left.clone(),
                right: right.clone(),
            },
            Expr::Conditional {
                condition,
                if_true,
                if_false,
            } => Expr::Conditional {
                condition: condition.clone(),
                if_true: if_true.clone(),
                if_false: if_false.clone(),
            },
            Expr::Application { function, argument } => Expr::Application {
                function: function.clone(),
                argument: argument.clone(),
            },
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Expr::Constant(a), Expr::Constant(b)) => {
                a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
            }
            (Expr::Variable(a), Expr::Variable(b)) => a == b,
            (
                Expr::Operation { op, left, right },
                Expr::Operation {
                    op: other_op,
                    left: other_left,
                    right: other_right,
                },
            ) => op == other_op && left == other_left && right == other_right,
            (
                Expr::Conditional {
                    condition,
                    if_true,
                    if_false,
                },
                Expr::Conditional {
                    condition: other_condition,
                    if_true: other_true,
                    if_false: other_false,
                },
            ) => condition == other_condition && if_true == other_true && if_false == other_false,
            (
                Expr::Application { function, argument },
                Expr::Application {
                    function: other_function,
                    argument: other_argument,
                },
            ) => function == other_function && argument == other_argument,
            _ => false,
        })
    }
}

impl Eq for Expr {}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Expr::Variable(name) => f.debug_tuple("Variable").field(name).finish(),
            Expr::Operation { op, left, right } => f
                .debug_struct("Operation")
                .field("op", op)
                .field("left", left)
                .field("right", right)
                .finish(),
            Expr::Conditional {
                condition,
                if_true,
                if_false,
            } => f
                .debug_struct("Conditional")
                .field("condition", condition)
                .field("if_true", if_true)
                .field("if_false", if_false)
                .finish(),
            Expr::Application { function, argument } => f
                .debug_struct("Application")
                .field("function", function)
                .field("argument", argument)
                .finish(),
        })
    }
}

// Dropping is iterative: the default recursive drop would overflow on the
// deep left-leaning trees long RPN chains produce.
impl Drop for Expr {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}
