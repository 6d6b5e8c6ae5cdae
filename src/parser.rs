//! Recursive descent parser for infix propositional formulas.
//!
//! # Grammar
//!
//! From the loosest binding rule to the tightest:
//!
//! ```text
//! iff     ::= implies ("↔" implies)*      left-associative
//! implies ::= or ("→" implies)?           right-associative
//! or      ::= and ("∨" and)*              left-associative
//! and     ::= not ("∧" not)*              left-associative
//! not     ::= "¬" not | primary
//! primary ::= VAR | "(" iff ")"
//! ```
//!
//! The whole token sequence must be consumed; parsing either returns the
//! complete tree or a [`SyntaxError`], never a partial tree.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::ast::Expr;
use crate::lexer::{tokenize, Token};
use crate::types::{BinOp, Op};

/// Maximum depth of a parsed tree, and maximum nesting of parenthesized groups.
///
/// Depth is counted as in [`Expr::depth`]: a lone variable has depth 0.
pub const MAX_DEPTH: usize = 256;

/// Error returned when a token sequence is not a well-formed formula.
///
/// Positions are token indices.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SyntaxError {
    /// Input ended where a variable or `(` was expected.
    Incomplete,
    /// A token that cannot start a primary expression.
    UnexpectedToken { token: Token, position: usize },
    /// A parenthesized group is not closed; `found` is the token seen instead.
    MissingCloseParen { position: usize, found: Option<Token> },
    /// The formula is complete but tokens remain.
    LeftoverTokens { token: Token, position: usize },
    /// Nesting exceeds [`MAX_DEPTH`].
    TooDeep { position: usize },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Incomplete => write!(f, "Incomplete expression"),
            SyntaxError::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{}' at position {}", token, position)
            }
            SyntaxError::MissingCloseParen { position, found: Some(token) } => {
                write!(f, "Expected ')' at position {}, found '{}'", position, token)
            }
            SyntaxError::MissingCloseParen { position, found: None } => {
                write!(f, "Expected ')' at position {}, found end of input", position)
            }
            SyntaxError::LeftoverTokens { token, position } => {
                write!(f, "Leftover tokens in expression, starting with '{}' at position {}", token, position)
            }
            SyntaxError::TooDeep { position } => {
                write!(f, "Expression nested deeper than {} at position {}", MAX_DEPTH, position)
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// A subtree together with its depth.
type Parsed = (Expr, usize);

struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    /// Number of `¬`, `(` and `→` operands currently being parsed.
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            nesting: 0,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn eat(&mut self, op: Op) -> bool {
        if self.peek() == Some(Token::Op(op)) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn enter(&mut self, position: usize) -> Result<(), SyntaxError> {
        if self.nesting >= MAX_DEPTH {
            return Err(SyntaxError::TooDeep { position });
        }
        self.nesting += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn node(&self, expr: Expr, depth: usize) -> Result<Parsed, SyntaxError> {
        if depth > MAX_DEPTH {
            return Err(SyntaxError::TooDeep { position: self.position });
        }
        Ok((expr, depth))
    }

    fn parse(mut self) -> Result<Expr, SyntaxError> {
        let (expr, _) = self.parse_iff()?;
        match self.peek() {
            None => Ok(expr),
            Some(token) => Err(SyntaxError::LeftoverTokens {
                token,
                position: self.position,
            }),
        }
    }

    fn parse_iff(&mut self) -> Result<Parsed, SyntaxError> {
        let (mut node, mut depth) = self.parse_implies()?;
        while self.eat(Op::Binary(BinOp::Iff)) {
            let (rhs, rhs_depth) = self.parse_implies()?;
            (node, depth) = self.node(Expr::iff(node, rhs), 1 + depth.max(rhs_depth))?;
        }
        Ok((node, depth))
    }

    fn parse_implies(&mut self) -> Result<Parsed, SyntaxError> {
        let (node, depth) = self.parse_or()?;
        let position = self.position;
        if self.eat(Op::Binary(BinOp::Implies)) {
            self.enter(position)?;
            let (rhs, rhs_depth) = self.parse_implies()?;
            self.leave();
            return self.node(Expr::implies(node, rhs), 1 + depth.max(rhs_depth));
        }
        Ok((node, depth))
    }

    fn parse_or(&mut self) -> Result<Parsed, SyntaxError> {
        let (mut node, mut depth) = self.parse_and()?;
        while self.eat(Op::Binary(BinOp::Or)) {
            let (rhs, rhs_depth) = self.parse_and()?;
            (node, depth) = self.node(Expr::or(node, rhs), 1 + depth.max(rhs_depth))?;
        }
        Ok((node, depth))
    }

    fn parse_and(&mut self) -> Result<Parsed, SyntaxError> {
        let (mut node, mut depth) = self.parse_not()?;
        while self.eat(Op::Binary(BinOp::And)) {
            let (rhs, rhs_depth) = self.parse_not()?;
            (node, depth) = self.node(Expr::and(node, rhs), 1 + depth.max(rhs_depth))?;
        }
        Ok((node, depth))
    }

    fn parse_not(&mut self) -> Result<Parsed, SyntaxError> {
        let position = self.position;
        if self.eat(Op::Not) {
            self.enter(position)?;
            let (operand, depth) = self.parse_not()?;
            self.leave();
            return self.node(Expr::not(operand), 1 + depth);
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Parsed, SyntaxError> {
        let position = self.position;
        match self.peek() {
            None => Err(SyntaxError::Incomplete),
            Some(Token::Var(v)) => {
                self.advance();
                Ok((Expr::var(v), 0))
            }
            Some(Token::Op(Op::LParen)) => {
                self.advance();
                self.enter(position)?;
                let node = self.parse_iff()?;
                self.leave();
                if !self.eat(Op::RParen) {
                    return Err(SyntaxError::MissingCloseParen {
                        position: self.position,
                        found: self.peek(),
                    });
                }
                Ok(node)
            }
            Some(token) => Err(SyntaxError::UnexpectedToken { token, position }),
        }
    }
}

/// Parses a token sequence into a tree.
pub fn parse_tokens(tokens: &[Token]) -> Result<Expr, SyntaxError> {
    debug!("Parsing {} tokens", tokens.len());
    let expr = Parser::new(tokens).parse()?;
    debug!("Parsed: {}", expr);
    Ok(expr)
}

/// Tokenizes and parses `input`.
pub fn parse(input: &str) -> Result<Expr, SyntaxError> {
    parse_tokens(&tokenize(input))
}

impl FromStr for Expr {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
