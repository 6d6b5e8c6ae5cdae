//! Abstract syntax trees of propositional formulas.
//!
//! [`Expr`] is the owned tree produced by the parser. [`ExprF`] is a single
//! layer of it with the children abstracted away, which lets every recursive
//! computation (evaluation, annotation, size, variables) be written as one
//! [`Expr::fold`] over a per-layer function.

use std::collections::BTreeSet;
use std::fmt;

use crate::types::{Assignment, BinOp, Var};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Var(Var),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Implies(Box<Expr>, Box<Expr>),
    Iff(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(var: Var) -> Self {
        Expr::Var(var)
    }

    pub fn not(operand: Self) -> Self {
        Expr::Not(Box::new(operand))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Expr::Iff(Box::new(lhs), Box::new(rhs))
    }

    pub fn binary(op: BinOp, lhs: Self, rhs: Self) -> Self {
        match op {
            BinOp::And => Expr::and(lhs, rhs),
            BinOp::Or => Expr::or(lhs, rhs),
            BinOp::Implies => Expr::implies(lhs, rhs),
            BinOp::Iff => Expr::iff(lhs, rhs),
        }
    }

    /// Views the root of this tree as one layer whose children are subtrees.
    pub fn project(&self) -> ExprF<&Expr> {
        match self {
            Expr::Var(v) => ExprF::Var(*v),
            Expr::Not(a) => ExprF::Not(a.as_ref()),
            Expr::And(a, b) => ExprF::Binary(BinOp::And, a.as_ref(), b.as_ref()),
            Expr::Or(a, b) => ExprF::Binary(BinOp::Or, a.as_ref(), b.as_ref()),
            Expr::Implies(a, b) => ExprF::Binary(BinOp::Implies, a.as_ref(), b.as_ref()),
            Expr::Iff(a, b) => ExprF::Binary(BinOp::Iff, a.as_ref(), b.as_ref()),
        }
    }

    /// Collapses the tree bottom-up, children left to right before their parent.
    pub fn fold<R, F>(&self, collapse: &mut F) -> R
    where
        F: FnMut(ExprF<R>) -> R,
    {
        let layer = self.project().fmap(|child| child.fold(collapse));
        collapse(layer)
    }

    /// Evaluates the formula. Unassigned variables read as `false`.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        self.fold(&mut |layer: ExprF<bool>| layer.eval(assignment))
    }

    /// Distinct variables of the formula, in canonical order.
    pub fn vars(&self) -> Vec<Var> {
        let mut vars = BTreeSet::new();
        self.fold(&mut |layer: ExprF<()>| {
            if let ExprF::Var(v) = layer {
                vars.insert(v);
            }
        });
        vars.into_iter().collect()
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.fold(&mut |layer: ExprF<usize>| match layer {
            ExprF::Var(_) => 1,
            ExprF::Not(a) => 1 + a,
            ExprF::Binary(_, a, b) => 1 + a + b,
        })
    }

    /// Depth of the tree (0 for a variable).
    pub fn depth(&self) -> usize {
        self.fold(&mut |layer: ExprF<usize>| match layer {
            ExprF::Var(_) => 0,
            ExprF::Not(a) => 1 + a,
            ExprF::Binary(_, a, b) => 1 + a.max(b),
        })
    }

    /// Display label of the root: the variable name or the connective symbol.
    pub fn label(&self) -> char {
        self.project().label()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.project() {
            ExprF::Var(v) => write!(f, "{}", v),
            ExprF::Not(a) => write!(f, "¬{}", a),
            ExprF::Binary(op, a, b) => write!(f, "({} {} {})", a, op, b),
        }
    }
}

/// One layer of an expression, generic over what stands in for the children.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ExprF<A> {
    Var(Var),
    Not(A),
    Binary(BinOp, A, A),
}

impl<A> ExprF<A> {
    #[inline(always)]
    pub fn fmap<B, F>(self, mut f: F) -> ExprF<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            ExprF::Var(v) => ExprF::Var(v),
            ExprF::Not(a) => ExprF::Not(f(a)),
            ExprF::Binary(op, a, b) => {
                let a = f(a);
                let b = f(b);
                ExprF::Binary(op, a, b)
            }
        }
    }

    pub fn label(&self) -> char {
        match self {
            ExprF::Var(v) => v.symbol(),
            ExprF::Not(_) => '¬',
            ExprF::Binary(op, _, _) => op.symbol(),
        }
    }
}

impl ExprF<bool> {
    /// Semantics of one layer, given the values of its children.
    ///
    /// Both evaluation paths of the crate go through this function.
    pub fn eval(self, assignment: &Assignment) -> bool {
        match self {
            ExprF::Var(v) => assignment.value(v),
            ExprF::Not(a) => !a,
            ExprF::Binary(op, a, b) => op.apply(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(ch: char) -> Expr {
        Expr::var(Var::from_char(ch).unwrap())
    }

    #[test]
    fn test_eval() {
        // p → (q ∧ ¬r)
        let e = Expr::implies(v('p'), Expr::and(v('q'), Expr::not(v('r'))));
        let vars = e.vars();
        let mut a = Assignment::all_true(vars.iter().copied());
        assert!(!e.eval(&a));
        a.set(Var::from_char('r').unwrap(), false);
        assert!(e.eval(&a));
        a.set(Var::from_char('p').unwrap(), false);
        a.set(Var::from_char('q').unwrap(), false);
        assert!(e.eval(&a));
    }

    #[test]
    fn test_eval_iff() {
        let e = Expr::iff(v('p'), v('q'));
        let a: Assignment = e.vars().into_iter().map(|x| (x, false)).collect();
        assert!(e.eval(&a));
    }

    #[test]
    fn test_vars_sorted_dedup() {
        let e = Expr::or(Expr::and(v('s'), v('p')), v('s'));
        let vars: String = e.vars().iter().map(|x| x.symbol()).collect();
        assert_eq!(vars, "ps");
    }

    #[test]
    fn test_size_depth() {
        assert_eq!(v('p').size(), 1);
        assert_eq!(v('p').depth(), 0);
        let e = Expr::and(Expr::not(v('p')), v('q'));
        assert_eq!(e.size(), 4);
        assert_eq!(e.depth(), 2);
    }

    #[test]
    fn test_display() {
        let e = Expr::iff(Expr::not(Expr::or(v('p'), v('q'))), v('r'));
        assert_eq!(e.to_string(), "(¬(p ∨ q) ↔ r)");
        assert_eq!(e.label(), '↔');
        assert_eq!(v('t').to_string(), "t");
    }

    #[test]
    fn test_fold_visits_left_to_right() {
        let e = Expr::and(v('q'), Expr::or(v('p'), v('r')));
        let mut seen = String::new();
        e.fold(&mut |layer: ExprF<()>| seen.push(layer.label()));
        assert_eq!(seen, "qpr∨∧");
    }
}
