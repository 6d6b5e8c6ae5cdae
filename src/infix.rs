//! Operator-precedence evaluation straight from the token stream.
//!
//! This evaluator never builds a tree. It keeps two stacks, one of operand
//! values and one of pending operators (each remembered with its token
//! index), and reduces by the precedence and associativity table in
//! [`crate::types`]. An operator on the stack is reduced before an incoming
//! binary operator when it binds strictly tighter, or equally tight and
//! left-associatively.
//!
//! Whenever a value is produced (a variable is read, or an operator is
//! applied) it is reported to an observer together with the index of the
//! token that produced it. Truth tables use this to fill one column per
//! token.
//!
//! Malformed input does not fail: unmatched parentheses are ignored, and an
//! operator that lacks operands produces no value.

use log::debug;

use crate::ast::ExprF;
use crate::lexer::Token;
use crate::types::{Assignment, Op};

/// Result of evaluating a token sequence under one assignment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RowResult {
    /// Value produced at each token index; `None` for parentheses and
    /// operators that could not be applied.
    pub partials: Vec<Option<bool>>,
    /// Value of the whole expression, `None` if nothing could be computed.
    pub value: Option<bool>,
}

/// Evaluates `tokens` under `assignment`, recording a partial result per token.
pub fn eval_infix(tokens: &[Token], assignment: &Assignment) -> RowResult {
    let mut partials = vec![None; tokens.len()];
    let value = eval_infix_with(tokens, assignment, |index, v| partials[index] = Some(v));
    RowResult { partials, value }
}

/// Evaluates `tokens` under `assignment`, reporting every produced value to `observe`.
///
/// Returns the bottom-most value left on the operand stack, which for a
/// well-formed expression is the only one.
pub fn eval_infix_with<F>(tokens: &[Token], assignment: &Assignment, observe: F) -> Option<bool>
where
    F: FnMut(usize, bool),
{
    let mut evaluator = InfixEvaluator {
        assignment,
        values: Vec::new(),
        ops: Vec::new(),
        observe,
    };
    for (index, &token) in tokens.iter().enumerate() {
        evaluator.step(index, token);
    }
    evaluator.finish()
}

fn is_left_associative(op: Op) -> bool {
    match op {
        Op::Binary(op) => op.is_left_associative(),
        Op::Not | Op::LParen | Op::RParen => false,
    }
}

struct InfixEvaluator<'a, F> {
    assignment: &'a Assignment,
    values: Vec<bool>,
    /// Pending operators with their token indices.
    ops: Vec<(Op, usize)>,
    observe: F,
}

impl<F> InfixEvaluator<'_, F>
where
    F: FnMut(usize, bool),
{
    fn step(&mut self, index: usize, token: Token) {
        match token {
            Token::Var(v) => {
                let value = ExprF::<bool>::Var(v).eval(self.assignment);
                self.produce(index, value);
            }
            Token::Op(op @ (Op::Not | Op::LParen)) => {
                self.ops.push((op, index));
            }
            Token::Op(Op::RParen) => {
                while let Some(&(top, top_index)) = self.ops.last() {
                    if top == Op::LParen {
                        break;
                    }
                    self.ops.pop();
                    self.reduce(top, top_index);
                }
                // A stray ')' finds no marker and is ignored.
                if let Some(&(Op::LParen, _)) = self.ops.last() {
                    self.ops.pop();
                }
            }
            Token::Op(op @ Op::Binary(bin)) => {
                let precedence = bin.precedence();
                while let Some(&(top, top_index)) = self.ops.last() {
                    if top == Op::LParen {
                        break;
                    }
                    let top_precedence = top.precedence();
                    if top_precedence > precedence || (top_precedence == precedence && is_left_associative(top)) {
                        self.ops.pop();
                        self.reduce(top, top_index);
                    } else {
                        break;
                    }
                }
                self.ops.push((op, index));
            }
        }
    }

    fn finish(mut self) -> Option<bool> {
        while let Some((op, index)) = self.ops.pop() {
            if matches!(op, Op::LParen | Op::RParen) {
                continue;
            }
            self.reduce(op, index);
        }
        self.values.first().copied()
    }

    fn produce(&mut self, index: usize, value: bool) {
        self.values.push(value);
        (self.observe)(index, value);
    }

    fn reduce(&mut self, op: Op, index: usize) {
        let layer = match op {
            Op::Not => self.values.pop().map(ExprF::Not),
            Op::Binary(bin) => {
                let rhs = self.values.pop();
                let lhs = self.values.pop();
                lhs.zip(rhs).map(|(lhs, rhs)| ExprF::Binary(bin, lhs, rhs))
            }
            Op::LParen | Op::RParen => return,
        };
        match layer {
            Some(layer) => {
                let value = layer.eval(self.assignment);
                self.produce(index, value);
            }
            None => debug!("Operator '{}' at position {} is missing operands", op, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lexer::tokenize;
    use crate::types::Var;

    fn assign(pairs: &[(char, bool)]) -> Assignment {
        pairs
            .iter()
            .map(|&(ch, b)| (Var::from_char(ch).unwrap(), b))
            .collect()
    }

    fn bits(partials: &[Option<bool>]) -> String {
        partials
            .iter()
            .map(|p| match p {
                Some(true) => '1',
                Some(false) => '0',
                None => '.',
            })
            .collect()
    }

    #[test]
    fn test_single_var() {
        let tokens = tokenize("p");
        let res = eval_infix(&tokens, &assign(&[('p', true)]));
        assert_eq!(res.value, Some(true));
        assert_eq!(res.partials, vec![Some(true)]);
    }

    #[test]
    fn test_partials_at_operator_positions() {
        // p ∧ ¬ q
        let tokens = tokenize("p∧¬q");
        let res = eval_infix(&tokens, &assign(&[('p', true), ('q', false)]));
        assert_eq!(bits(&res.partials), "1110");
        assert_eq!(res.value, Some(true));
    }

    #[test]
    fn test_parentheses_record_nothing() {
        // ( p ∨ q ) ∧ r
        let tokens = tokenize("(p∨q)∧r");
        let res = eval_infix(&tokens, &assign(&[('p', false), ('q', true), ('r', false)]));
        assert_eq!(bits(&res.partials), ".011.00");
        assert_eq!(res.value, Some(false));
    }

    #[test]
    fn test_precedence() {
        // p ∨ q ∧ r with p=1, q=0, r=0: ∨ must see (q ∧ r) = 0
        let tokens = tokenize("p∨q∧r");
        let res = eval_infix(&tokens, &assign(&[('p', true), ('q', false), ('r', false)]));
        assert_eq!(bits(&res.partials), "11000");
        assert_eq!(res.value, Some(true));
    }

    #[test]
    fn test_implies_right_associative() {
        // p → q → r with all false: p → (q → r) = 1, (p → q) → r = 0
        let tokens = tokenize("p→q→r");
        let res = eval_infix(&tokens, &assign(&[('p', false), ('q', false), ('r', false)]));
        assert_eq!(res.value, Some(true));
        assert_eq!(bits(&res.partials), "01010");
    }

    #[test]
    fn test_iff_left_associative() {
        // p ↔ q ↔ r with p=0, q=0, r=0: (p ↔ q) ↔ r = 0
        let tokens = tokenize("p↔q↔r");
        let res = eval_infix(&tokens, &assign(&[('p', false), ('q', false), ('r', false)]));
        assert_eq!(res.value, Some(false));
        assert_eq!(bits(&res.partials), "01000");
    }

    #[test]
    fn test_double_negation() {
        let tokens = tokenize("¬¬p");
        let res = eval_infix(&tokens, &assign(&[('p', false)]));
        assert_eq!(bits(&res.partials), "010");
        assert_eq!(res.value, Some(false));
    }

    #[test]
    fn test_unbalanced_open_paren() {
        let tokens = tokenize("(p∧q");
        let res = eval_infix(&tokens, &assign(&[('p', true), ('q', true)]));
        assert_eq!(res.value, Some(true));
        assert_eq!(bits(&res.partials), ".111");
    }

    #[test]
    fn test_stray_close_paren() {
        let tokens = tokenize("p)∨q");
        let res = eval_infix(&tokens, &assign(&[('p', false), ('q', false)]));
        assert_eq!(res.value, Some(false));
        assert_eq!(bits(&res.partials), "0.00");
    }

    #[test]
    fn test_missing_operands() {
        let tokens = tokenize("p∧");
        let res = eval_infix(&tokens, &assign(&[('p', true)]));
        assert_eq!(res.value, None);
        assert_eq!(bits(&res.partials), "1.");

        let tokens = tokenize("¬");
        let res = eval_infix(&tokens, &Assignment::new());
        assert_eq!(res.value, None);
        assert_eq!(res.partials, vec![None]);
    }

    #[test]
    fn test_juxtaposed_operands_keep_bottom_value() {
        let tokens = tokenize("p q");
        let res = eval_infix(&tokens, &assign(&[('p', true), ('q', false)]));
        assert_eq!(res.value, Some(true));
    }

    #[test]
    fn test_observer_order() {
        let tokens = tokenize("¬p∨q");
        let mut seen = Vec::new();
        let value = eval_infix_with(&tokens, &assign(&[('p', true), ('q', false)]), |i, v| seen.push((i, v)));
        assert_eq!(value, Some(false));
        assert_eq!(seen, vec![(1, true), (0, false), (3, false), (2, false)]);
    }
}
