//! One evaluation request, from raw text to everything a front end shows.
//!
//! [`analyze`] tokenizes the input once and runs both evaluation paths on
//! it: the truth table over the token stream, and the parse tree annotated
//! under the default assignment. The two results are independent. A
//! malformed input still gets a table while its tree reports the syntax
//! error; an empty input gets neither and is never handed to the parser.
//!
//! Nothing is kept between calls.

use log::debug;

use crate::annotate::{annotate_default, Annotated};
use crate::ast::Expr;
use crate::lexer::{tokenize, Token};
use crate::parser::{parse_tokens, SyntaxError};
use crate::table::{EmptyInputError, TruthTable};

/// A parsed expression together with its default-assignment annotation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tree {
    pub expr: Expr,
    pub annotated: Annotated,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub table: Result<TruthTable, EmptyInputError>,
    /// `None` when the input has no tokens.
    pub tree: Option<Result<Tree, SyntaxError>>,
}

impl Analysis {
    /// Whether the input contained no recognized symbol.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the input parsed as a well-formed formula.
    pub fn is_well_formed(&self) -> bool {
        matches!(self.tree, Some(Ok(_)))
    }
}

/// Runs one complete request on `input`.
pub fn analyze(input: &str) -> Analysis {
    let tokens = tokenize(input);
    debug!("Analyzing {} tokens", tokens.len());

    let table = TruthTable::generate(&tokens);
    let tree = if tokens.is_empty() {
        None
    } else {
        Some(parse_tokens(&tokens).map(|expr| {
            let annotated = annotate_default(&expr);
            Tree { expr, annotated }
        }))
    };

    Analysis { tokens, table, tree }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    use crate::table::Verdict;

    #[test]
    fn test_analyze_well_formed() {
        let analysis = analyze("p ∨ ¬p");
        assert!(analysis.is_well_formed());
        assert_eq!(analysis.table.as_ref().unwrap().verdict(), Verdict::Tautology);
        let tree = analysis.tree.unwrap().unwrap();
        assert_eq!(tree.annotated.value(), Some(true));
        assert_eq!(tree.expr.to_string(), "(p ∨ ¬p)");
    }

    #[test]
    fn test_analyze_malformed() {
        let analysis = analyze("(p∧q");
        assert!(!analysis.is_well_formed());
        assert!(matches!(analysis.tree, Some(Err(SyntaxError::MissingCloseParen { .. }))));
        assert_eq!(analysis.table.unwrap().num_rows(), 4);
    }

    #[test]
    fn test_analyze_empty() {
        let analysis = analyze("  ");
        assert!(analysis.is_empty());
        assert_eq!(analysis.table, Err(EmptyInputError));
        assert_eq!(analysis.tree, None);
    }

    #[test]
    fn test_analyze_is_fresh_per_call() {
        let first = analyze("p∧q");
        let second = analyze("p∧q");
        assert_eq!(first, second);
        let other = analyze("q");
        assert_ne!(first, other);
    }
}
