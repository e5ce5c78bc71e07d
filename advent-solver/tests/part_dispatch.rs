//! Property-based tests for part numbering and dispatch

use advent_solver::{ParseError, Part, Puzzle, SolveError};
use proptest::prelude::*;

/// Answers with the part it was asked for
struct Echo<const TWO: bool>;

impl<const TWO: bool> Puzzle for Echo<TWO> {
    type Parsed<'a> = Vec<Part>;
    const LAST_PART: Part = if TWO { Part::Two } else { Part::One };

    fn parse(_input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        Ok(Vec::new())
    }

    fn part_one(calls: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        calls.push(Part::One);
        Ok("one".to_string())
    }

    fn part_two(calls: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        calls.push(Part::Two);
        Ok("two".to_string())
    }
}

fn solve_number(two_parts: bool, number: u8) -> Result<String, SolveError> {
    let part = Part::try_from(number)?;
    if two_parts {
        Echo::<true>::solve(&mut Vec::new(), part)
    } else {
        Echo::<false>::solve(&mut Vec::new(), part)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_numbers_outside_one_two_rejected(two_parts in any::<bool>(), number in 3u8..) {
        match solve_number(two_parts, number) {
            Err(SolveError::PartOutOfRange(n)) => prop_assert_eq!(n, number),
            other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn prop_number_roundtrip(number in 1u8..=2) {
        prop_assert_eq!(Part::try_from(number).unwrap().number(), number);
    }
}

#[test]
fn test_part_zero_rejected() {
    assert!(matches!(solve_number(true, 0), Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn test_dispatch_calls_only_the_requested_part() {
    let mut calls = Vec::new();
    assert_eq!(Echo::<true>::solve(&mut calls, Part::Two).unwrap(), "two");
    assert_eq!(Echo::<true>::solve(&mut calls, Part::One).unwrap(), "one");
    assert_eq!(calls, vec![Part::Two, Part::One]);
}

#[test]
fn test_part_past_last_part_not_implemented() {
    let mut calls = Vec::new();
    assert!(matches!(
        Echo::<false>::solve(&mut calls, Part::Two),
        Err(SolveError::PartNotImplemented(Part::Two))
    ));
    assert!(calls.is_empty());
}
