//! Truth tables and formula classification.
//!
//! A [`TruthTable`] evaluates a token sequence under every assignment of its
//! variables, in the order of a binary counter over the sorted variables
//! (most significant bit first), so the first row is all-false and the last
//! row is all-true. Every row keeps the partial result of each token, which
//! gives one column per token plus a final column.
//!
//! Generation works on tokens and does not validate syntax: a malformed but
//! non-empty input still yields a table, possibly with empty cells and empty
//! final values. Only an empty token sequence is rejected.

use std::fmt;

use log::debug;

use crate::infix::{eval_infix, RowResult};
use crate::lexer::{tokenize, vars_of, Token};
use crate::types::{Assignment, Var};

/// Classification of a formula by its final values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Verdict {
    /// True under every assignment.
    Tautology,
    /// False under every assignment.
    Contradiction,
    /// Anything else, including tables with rows that have no final value.
    Contingency,
}

impl Verdict {
    pub fn classify<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<bool>>,
    {
        let mut all_true = true;
        let mut all_false = true;
        for value in values {
            match value {
                Some(true) => all_false = false,
                Some(false) => all_true = false,
                None => return Verdict::Contingency,
            }
        }
        match (all_true, all_false) {
            (true, _) => Verdict::Tautology,
            (false, true) => Verdict::Contradiction,
            (false, false) => Verdict::Contingency,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Verdict::Tautology => "Tautology",
            Verdict::Contradiction => "Contradiction",
            Verdict::Contingency => "Contingency",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when there is nothing to evaluate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EmptyInputError;

impl fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid or empty expression")
    }
}

impl std::error::Error for EmptyInputError {}

/// One assignment and everything computed under it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub assignment: Assignment,
    /// One entry per token; `None` for parentheses and unresolved operators.
    pub partials: Vec<Option<bool>>,
    pub value: Option<bool>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    tokens: Vec<Token>,
    vars: Vec<Var>,
    rows: Vec<Row>,
    verdict: Verdict,
}

impl TruthTable {
    /// Label of the synthetic column holding each row's final value.
    pub const FINAL_LABEL: &'static str = "Final";

    /// Builds the table for a token sequence.
    pub fn generate(tokens: &[Token]) -> Result<Self, EmptyInputError> {
        if tokens.is_empty() {
            return Err(EmptyInputError);
        }

        let vars = vars_of(tokens);
        let num_rows = 1usize << vars.len();
        debug!(
            "Generating truth table over {} variables ({} rows)",
            vars.len(),
            num_rows
        );

        let rows: Vec<Row> = (0..num_rows)
            .map(|i| {
                let assignment = Assignment::from_row_index(&vars, i);
                let RowResult { partials, value } = eval_infix(tokens, &assignment);
                Row {
                    assignment,
                    partials,
                    value,
                }
            })
            .collect();

        let verdict = Verdict::classify(rows.iter().map(|row| row.value));
        debug!("Verdict: {}", verdict);

        Ok(Self {
            tokens: tokens.to_vec(),
            vars,
            rows,
            verdict,
        })
    }

    /// Tokenizes `input` and builds its table.
    pub fn from_input(input: &str) -> Result<Self, EmptyInputError> {
        Self::generate(&tokenize(input))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Free variables, in canonical order.
    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Column labels: one per token, then [`TruthTable::FINAL_LABEL`].
    pub fn header(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(|t| t.to_string())
            .chain(std::iter::once(Self::FINAL_LABEL.to_string()))
            .collect()
    }

    /// Assignments under which the expression is true.
    pub fn models(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.rows
            .iter()
            .filter(|row| row.value == Some(true))
            .map(|row| &row.assignment)
    }
}

fn cell(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "1",
        Some(false) => "0",
        None => "",
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[&str], widths: &[usize]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{:<w$}", c, w = w))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header();
        let widths: Vec<usize> = header.iter().map(|h| h.chars().count().max(1)).collect();

        let labels: Vec<&str> = header.iter().map(|h| h.as_str()).collect();
        write_cells(f, &labels, &widths)?;
        for row in &self.rows {
            let cells: Vec<&str> = row
                .partials
                .iter()
                .copied()
                .chain(std::iter::once(row.value))
                .map(cell)
                .collect();
            write_cells(f, &cells, &widths)?;
        }
        write!(f, "Result: {}", self.verdict)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn var_names(table: &TruthTable) -> String {
        table.vars().iter().map(|v| v.symbol()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(TruthTable::from_input(""), Err(EmptyInputError));
        assert_eq!(TruthTable::from_input("   "), Err(EmptyInputError));
        assert_eq!(TruthTable::from_input("xyz 123"), Err(EmptyInputError));
    }

    #[test]
    fn test_verdicts() {
        let table = TruthTable::from_input("p∧¬p").unwrap();
        assert_eq!(table.verdict(), Verdict::Contradiction);
        let table = TruthTable::from_input("p∨¬p").unwrap();
        assert_eq!(table.verdict(), Verdict::Tautology);
        let table = TruthTable::from_input("p∧q").unwrap();
        assert_eq!(table.verdict(), Verdict::Contingency);
    }

    #[test]
    fn test_row_order() {
        let table = TruthTable::from_input("p∧q").unwrap();
        assert_eq!(table.num_rows(), 4);
        let values: Vec<Option<bool>> = table.rows().iter().map(|r| r.value).collect();
        assert_eq!(values, vec![Some(false), Some(false), Some(false), Some(true)]);
        let p = table.vars()[0];
        let q = table.vars()[1];
        let rows: Vec<(bool, bool)> = table
            .rows()
            .iter()
            .map(|r| (r.assignment.value(p), r.assignment.value(q)))
            .collect();
        assert_eq!(rows, vec![(false, false), (false, true), (true, false), (true, true)]);
    }

    #[test]
    fn test_vars_canonical_order() {
        let table = TruthTable::from_input("s∧p").unwrap();
        assert_eq!(var_names(&table), "ps");
    }

    #[test]
    fn test_header() {
        let table = TruthTable::from_input("¬(p ∨ q)").unwrap();
        assert_eq!(table.header(), vec!["¬", "(", "p", "∨", "q", ")", "Final"]);
        for row in table.rows() {
            assert_eq!(row.partials.len(), table.tokens().len());
        }
    }

    #[test]
    fn test_malformed_does_not_fail() {
        let table = TruthTable::from_input("(p∧q").unwrap();
        assert_eq!(table.num_rows(), 4);
        assert_eq!(table.verdict(), Verdict::Contingency);

        let table = TruthTable::from_input("∧").unwrap();
        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.rows()[0].value, None);
        assert_eq!(table.verdict(), Verdict::Contingency);
    }

    #[test]
    fn test_classify() {
        assert_eq!(Verdict::classify([Some(true), Some(true)]), Verdict::Tautology);
        assert_eq!(Verdict::classify([Some(false)]), Verdict::Contradiction);
        assert_eq!(Verdict::classify([Some(true), Some(false)]), Verdict::Contingency);
        assert_eq!(Verdict::classify([Some(true), None]), Verdict::Contingency);
    }

    #[test]
    fn test_models() {
        let table = TruthTable::from_input("p→q").unwrap();
        assert_eq!(table.models().count(), 3);
    }

    #[test]
    fn test_display() {
        let table = TruthTable::from_input("p ∧ (q)").unwrap();
        let expected = "\
p | ∧ | ( | q | ) | Final
0 | 0 |   | 0 |   | 0
0 | 0 |   | 1 |   | 0
1 | 0 |   | 0 |   | 0
1 | 1 |   | 1 |   | 1
Result: Contingency";
        assert_eq!(table.to_string(), expected);
    }
}
