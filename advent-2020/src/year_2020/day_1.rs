//! Day 1: Report Repair

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};
use itertools::Itertools;
use tracing::warn;

const TARGET: u32 = 2020;

#[derive(RegisterPuzzle)]
#[puzzle(day = 1, tags = ["search"])]
pub struct Solver;

impl Puzzle for Solver {
    type Parsed<'a> = Vec<u32>;
    const LAST_PART: Part = Part::Two;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim().parse::<u32>().map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }

    fn part_one(entries: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(product_or_zero(entries, 2).to_string())
    }

    fn part_two(entries: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(product_or_zero(entries, 3).to_string())
    }
}

/// Product of the first `count` distinct entries that add up to `target`
fn product_of_entries_summing_to(expenses: &[u32], count: usize, target: u32) -> Option<u64> {
    expenses
        .iter()
        .copied()
        .combinations(count)
        .find(|entries| entries.iter().sum::<u32>() == target)
        .map(|entries| entries.into_iter().map(u64::from).product())
}

fn product_or_zero(expenses: &[u32], count: usize) -> u64 {
    product_of_entries_summing_to(expenses, count, TARGET).unwrap_or_else(|| {
        warn!(count, "no entries sum to {}, answering 0", TARGET);
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

    #[test]
    fn test_two_entries() {
        let mut parsed = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::part_one(&mut parsed).unwrap(), "514579");
    }

    #[test]
    fn test_three_entries() {
        let mut parsed = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::part_two(&mut parsed).unwrap(), "241861950");
    }

    #[test]
    fn test_entry_is_not_paired_with_itself() {
        assert_eq!(product_of_entries_summing_to(&[1010, 3, 7], 2, TARGET), None);
        assert_eq!(
            product_of_entries_summing_to(&[1010, 3, 1010], 2, TARGET),
            Some(1010 * 1010)
        );
    }

    #[test]
    fn test_no_match_answers_zero() {
        let mut parsed = Solver::parse("1\n2\n3").unwrap();
        assert_eq!(Solver::part_one(&mut parsed).unwrap(), "0");
    }

    #[test]
    fn test_rejects_non_numeric_line() {
        let err = Solver::parse("12\nabc\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
