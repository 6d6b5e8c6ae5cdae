//! # truth-table-rs: Propositional formulas and truth tables in Rust
//!
//! **`truth-table-rs`** reads infix propositional formulas over the variables
//! `p`, `q`, `r`, `s`, `t` and the connectives `¬ ∧ ∨ → ↔`, and produces two
//! things from them: a truth table with one column per token and a final
//! verdict, and a parse tree annotated with truth values.
//!
//! ## Precedence
//!
//! From tightest to loosest: `¬` (prefix), `∧` (left), `∨` (left),
//! `→` (right, so `p→q→r` is `p→(q→r)`), `↔` (left). Parentheses group.
//!
//! ## Two evaluation paths
//!
//! - The **parser** ([`parser`]) builds an [`Expr`][crate::ast::Expr] and rejects
//!   malformed input with a [`SyntaxError`][crate::parser::SyntaxError].
//!   The tree is then evaluated node by node ([`annotate`]).
//! - The **infix evaluator** ([`infix`]) works directly on the token stream,
//!   recording the value produced at each token, and drives the truth table
//!   ([`table`]). It is lenient: malformed input yields empty cells, not errors.
//!
//! Both paths share the per-node semantics of [`ExprF::eval`][crate::ast::ExprF::eval]
//! and agree on every well-formed formula.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table_rs::parser::parse;
//! use truth_table_rs::table::{TruthTable, Verdict};
//!
//! let table = TruthTable::from_input("p ∨ ¬p").unwrap();
//! assert_eq!(table.verdict(), Verdict::Tautology);
//! assert_eq!(table.num_rows(), 2);
//!
//! let expr = parse("p ∨ q ∧ r").unwrap();
//! assert_eq!(expr.to_string(), "(p ∨ (q ∧ r))");
//! ```
//!
//! For a whole request (table and tree at once) use [`analysis::analyze`].

pub mod analysis;
pub mod annotate;
pub mod ast;
pub mod dot;
pub mod infix;
pub mod lexer;
pub mod parser;
pub mod table;
pub mod types;
