//! Type-safe building blocks of propositional formulas.
//!
//! This module provides the variable alphabet, the connective table shared by
//! every evaluator in the crate, and variable assignments.
use std::collections::BTreeMap;
use std::fmt;

/// A propositional variable drawn from the fixed alphabet `p`, `q`, `r`, `s`, `t`.
///
/// # Invariants
///
/// - The inner index is always a valid position in [`Var::ALPHABET`]
/// - Variables are ordered by their position in the alphabet (the canonical order)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u8);

impl Var {
    /// Symbols of the variable alphabet, in canonical order.
    pub const ALPHABET: [char; 5] = ['p', 'q', 'r', 's', 't'];

    /// All variables, in canonical order.
    pub const ALL: [Var; 5] = [Var(0), Var(1), Var(2), Var(3), Var(4)];

    /// Returns the variable written as `ch`, if `ch` belongs to the alphabet.
    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALPHABET.iter().position(|&c| c == ch).map(|i| Var(i as u8))
    }

    /// Returns the symbol of the variable.
    pub fn symbol(self) -> char {
        Self::ALPHABET[self.0 as usize]
    }

    /// Returns the position of the variable in the canonical order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl From<Var> for char {
    fn from(var: Var) -> Self {
        var.symbol()
    }
}

/// Binary connectives.
///
/// This is the single operator table used by both the tree evaluator and the
/// token-stream evaluator: precedence, associativity and semantics live here.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinOp {
    And,
    Or,
    Implies,
    Iff,
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            BinOp::And => '∧',
            BinOp::Or => '∨',
            BinOp::Implies => '→',
            BinOp::Iff => '↔',
        }
    }

    /// Binding strength, higher binds tighter. Negation binds at [`Op::NOT_PRECEDENCE`].
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::And => 4,
            BinOp::Or => 3,
            BinOp::Implies => 2,
            BinOp::Iff => 1,
        }
    }

    /// Implication is the only right-associative binary connective.
    pub fn is_left_associative(self) -> bool {
        !matches!(self, BinOp::Implies)
    }

    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinOp::And => lhs && rhs,
            BinOp::Or => lhs || rhs,
            BinOp::Implies => !lhs || rhs,
            BinOp::Iff => lhs == rhs,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operator tokens: the five connectives plus the two grouping symbols.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Op {
    Not,
    Binary(BinOp),
    LParen,
    RParen,
}

impl Op {
    pub const NOT_PRECEDENCE: u8 = 5;

    /// Every operator, in the order `¬ ∧ ∨ → ↔ ( )`.
    pub const ALL: [Op; 7] = [
        Op::Not,
        Op::Binary(BinOp::And),
        Op::Binary(BinOp::Or),
        Op::Binary(BinOp::Implies),
        Op::Binary(BinOp::Iff),
        Op::LParen,
        Op::RParen,
    ];

    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == ch)
    }

    pub fn symbol(self) -> char {
        match self {
            Op::Not => '¬',
            Op::Binary(op) => op.symbol(),
            Op::LParen => '(',
            Op::RParen => ')',
        }
    }

    /// Parentheses have precedence 0.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Not => Self::NOT_PRECEDENCE,
            Op::Binary(op) => op.precedence(),
            Op::LParen | Op::RParen => 0,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A total mapping from variables to truth values.
///
/// Iteration follows the canonical variable order.
/// Unassigned variables read as `false` through [`Assignment::value`].
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Assignment(BTreeMap<Var, bool>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `true` to every given variable.
    pub fn all_true(vars: impl IntoIterator<Item = Var>) -> Self {
        vars.into_iter().map(|v| (v, true)).collect()
    }

    /// Builds the assignment for row `row` of the enumeration over `vars`.
    ///
    /// The row index is read as a binary counter whose most significant bit
    /// sets `vars[0]`, so row 0 is all-false and the last row is all-true.
    pub fn from_row_index(vars: &[Var], row: usize) -> Self {
        let k = vars.len();
        vars.iter()
            .enumerate()
            .map(|(j, &v)| (v, ((row >> (k - 1 - j)) & 1) == 1))
            .collect()
    }

    pub fn get(&self, var: Var) -> Option<bool> {
        self.0.get(&var).copied()
    }

    /// Returns the value of `var`, or `false` if it is unassigned.
    pub fn value(&self, var: Var) -> bool {
        self.get(var).unwrap_or(false)
    }

    pub fn set(&mut self, var: Var, value: bool) {
        self.0.insert(var, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.0.iter().map(|(&v, &b)| (v, b))
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        Assignment(iter.into_iter().collect())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", var, value as u8)?;
        }
        write!(f, "}}")
    }
}
