//! Tokenizer for infix propositional formulas.
//!
//! Whitespace and any character outside the variable alphabet and the seven
//! operator symbols are skipped silently; tokenization never fails.

use std::fmt;

use crate::types::{Op, Var};

/// A lexical token. Its position in the token sequence is its index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Var(Var),
    Op(Op),
}

impl Token {
    pub fn from_char(ch: char) -> Option<Self> {
        Var::from_char(ch)
            .map(Token::Var)
            .or_else(|| Op::from_char(ch).map(Token::Op))
    }

    pub fn symbol(self) -> char {
        match self {
            Token::Var(v) => v.symbol(),
            Token::Op(op) => op.symbol(),
        }
    }

    pub fn as_var(self) -> Option<Var> {
        match self {
            Token::Var(v) => Some(v),
            Token::Op(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Splits `input` into tokens, in input order.
pub fn tokenize(input: &str) -> Vec<Token> {
    input
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .filter_map(Token::from_char)
        .collect()
}

/// Returns the distinct variables of `tokens`, in canonical order.
pub fn vars_of(tokens: &[Token]) -> Vec<Var> {
    let mut vars: Vec<Var> = tokens.iter().filter_map(|t| t.as_var()).collect();
    vars.sort();
    vars.dedup();
    vars
}

/// Renders tokens back to text, one symbol per token, without spaces.
pub fn to_source(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.symbol()).collect()
}
