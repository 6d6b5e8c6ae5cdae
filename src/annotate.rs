//! Value-annotated parse trees.
//!
//! An [`Annotated`] tree mirrors an [`Expr`] node for node and exposes only
//! what a tree renderer needs: a display label, an optional truth value, and
//! the ordered children. Annotation builds a new tree; the parsed [`Expr`]
//! is never modified.

use crate::ast::{Expr, ExprF};
use crate::types::Assignment;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Annotated {
    label: char,
    value: Option<bool>,
    children: Vec<Annotated>,
}

impl Annotated {
    /// Copies the shape of `expr` without any values.
    pub fn from_expr(expr: &Expr) -> Self {
        expr.fold(&mut |layer: ExprF<Annotated>| {
            let label = layer.label();
            let mut children = Vec::new();
            layer.fmap(|child| children.push(child));
            Annotated {
                label,
                value: None,
                children,
            }
        })
    }

    /// Variable name or connective symbol.
    pub fn label(&self) -> char {
        self.label
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }

    /// Operands in order: one for `¬`, two for binary connectives, none for variables.
    pub fn children(&self) -> &[Annotated] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(|c| c.size()).sum::<usize>()
    }

    /// Nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &Annotated> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// Assigns `true` to every variable occurring in `expr`.
pub fn default_assignment(expr: &Expr) -> Assignment {
    Assignment::all_true(expr.vars())
}

/// Evaluates every node of `expr` under `assignment`.
pub fn annotate(expr: &Expr, assignment: &Assignment) -> Annotated {
    let (_, tree) = expr.fold(&mut |layer: ExprF<(bool, Annotated)>| {
        let label = layer.label();
        let mut children = Vec::new();
        let values = layer.fmap(|(value, child)| {
            children.push(child);
            value
        });
        let value = values.eval(assignment);
        let node = Annotated {
            label,
            value: Some(value),
            children,
        };
        (value, node)
    });
    tree
}

/// Evaluates every node of `expr` with all of its variables set to `true`.
pub fn annotate_default(expr: &Expr) -> Annotated {
    annotate(expr, &default_assignment(expr))
}
