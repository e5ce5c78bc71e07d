//! Day 18: Operation Order
//!
//! `+` and `*` share one precedence level and evaluate left to right;
//! parentheses are evaluated first.

use std::iter::Peekable;

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};

#[derive(RegisterPuzzle)]
#[puzzle(day = 18, tags = ["parsing", "expression"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(u64),
    Add,
    Mul,
    Open,
    Close,
}

fn tokenize(line: &str) -> Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        let token = match c {
            ' ' => continue,
            '+' => Token::Add,
            '*' => Token::Mul,
            '(' => Token::Open,
            ')' => Token::Close,
            '0'..='9' => {
                let mut end = pos + 1;
                while let Some(&(next, d)) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    end = next + 1;
                    chars.next();
                }
                let number = line[pos..end]
                    .parse()
                    .map_err(|e| format!("number at column {}: {}", pos + 1, e))?;
                Token::Number(number)
            }
            other => return Err(format!("unexpected {:?} at column {}", other, pos + 1)),
        };
        tokens.push(token);
    }
    Ok(tokens)
}

/// A number or a parenthesised sub-expression
fn eval_operand<I>(tokens: &mut Peekable<I>) -> Result<u64, SolveError>
where
    I: Iterator<Item = Token>,
{
    match tokens.next() {
        Some(Token::Number(n)) => Ok(n),
        Some(Token::Open) => {
            let value = eval_sequence(tokens)?;
            match tokens.next() {
                Some(Token::Close) => Ok(value),
                _ => Err(SolveError::failed("unbalanced parentheses")),
            }
        }
        other => Err(SolveError::failed(format!("expected an operand, got {:?}", other))),
    }
}

/// Operands joined by operators, folded left to right until a `)` or the end
fn eval_sequence<I>(tokens: &mut Peekable<I>) -> Result<u64, SolveError>
where
    I: Iterator<Item = Token>,
{
    let mut value = eval_operand(tokens)?;
    loop {
        let op = match tokens.peek() {
            Some(Token::Close) | None => return Ok(value),
            Some(&op @ (Token::Add | Token::Mul)) => op,
            Some(other) => {
                return Err(SolveError::failed(format!("expected an operator, got {:?}", other)));
            }
        };
        tokens.next();

        let rhs = eval_operand(tokens)?;
        value = match op {
            Token::Add => value.checked_add(rhs),
            _ => value.checked_mul(rhs),
        }
        .ok_or_else(|| SolveError::failed("expression overflows"))?;
    }
}

fn evaluate(expression: &[Token]) -> Result<u64, SolveError> {
    let mut tokens = expression.iter().copied().peekable();
    let value = eval_sequence(&mut tokens)?;
    match tokens.next() {
        None => Ok(value),
        Some(_) => Err(SolveError::failed("unbalanced parentheses")),
    }
}

impl Puzzle for Solver {
    type Parsed<'a> = Vec<Vec<Token>>;
    const LAST_PART: Part = Part::One;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                tokenize(line.trim()).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }

    fn part_one(expressions: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let sum = expressions
            .iter()
            .map(|expression| evaluate(expression))
            .sum::<Result<u64, _>>()?;
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn eval_str(expression: &str) -> u64 {
        evaluate(&tokenize(expression).unwrap()).unwrap()
    }

    #[test]
    fn test_examples() {
        assert_eq!(eval_str("1 + 2 * 3 + 4 * 5 + 6"), 71);
        assert_eq!(eval_str("1 + (2 * 3) + (4 * (5 + 6))"), 51);
        assert_eq!(eval_str("2 * 3 + (4 * 5)"), 26);
        assert_eq!(eval_str("5 + (8 * 3 + 9 + 3 * 4 * 3)"), 437);
        assert_eq!(eval_str("5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))"), 12240);
        assert_eq!(eval_str("((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2"), 13632);
    }

    #[test]
    fn test_sum_of_lines() {
        let mut parsed = Solver::parse("2 * 3 + (4 * 5)\n5 + (8 * 3 + 9 + 3 * 4 * 3)\n").unwrap();
        assert_eq!(Solver::part_one(&mut parsed).unwrap(), "463");
    }

    #[test]
    fn test_multi_digit_numbers() {
        assert_eq!(
            tokenize("12*(3)").unwrap(),
            vec![Token::Number(12), Token::Mul, Token::Open, Token::Number(3), Token::Close]
        );
        assert_eq!(eval_str("12 + 30"), 42);
    }

    #[test]
    fn test_malformed_expressions() {
        assert!(tokenize("1 - 2").is_err());
        for bad in ["(1 + 2", "1 + 2)", "1 +", "1 2", "* 3", "()"] {
            let mut parsed = Solver::parse(bad).unwrap();
            assert!(Solver::part_one(&mut parsed).is_err(), "{}", bad);
        }
    }

    proptest! {
        #[test]
        fn prop_flat_expression_is_left_fold(
            first in 0u64..100,
            rest in prop::collection::vec((any::<bool>(), 0u64..100), 0..8),
        ) {
            let mut text = first.to_string();
            let mut expected = first;
            for &(add, n) in &rest {
                text.push_str(if add { " + " } else { " * " });
                text.push_str(&n.to_string());
                expected = if add { expected + n } else { expected * n };
            }
            prop_assert_eq!(eval_str(&text), expected);
        }
    }
}
