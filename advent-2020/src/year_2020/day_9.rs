//! Day 9: Encoding Error

use std::cmp::Ordering;

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};
use itertools::Itertools;

#[derive(RegisterPuzzle)]
#[puzzle(day = 9, tags = ["search"])]
pub struct Solver;

const PREAMBLE: usize = 25;

pub struct XmasData {
    numbers: Vec<u64>,
    preamble: usize,
    /// Filled in by part 1 and reused by part 2
    invalid: Option<u64>,
}

impl XmasData {
    fn new(numbers: Vec<u64>, preamble: usize) -> Self {
        Self {
            numbers,
            preamble,
            invalid: None,
        }
    }

    fn invalid_number(&mut self) -> Result<u64, SolveError> {
        if let Some(invalid) = self.invalid {
            return Ok(invalid);
        }
        let invalid = find_invalid(&self.numbers, self.preamble).ok_or_else(|| {
            SolveError::failed(format!(
                "every number is a sum of two of the previous {}",
                self.preamble
            ))
        })?;
        Ok(*self.invalid.insert(invalid))
    }
}

/// First number after the preamble that is not the sum of two entries at
/// different positions among the `preamble` numbers before it. Equal values
/// may pair up when they occur twice.
fn find_invalid(numbers: &[u64], preamble: usize) -> Option<u64> {
    numbers.windows(preamble + 1).find_map(|window| {
        let (&candidate, previous) = window.split_last()?;
        let is_sum = previous
            .iter()
            .tuple_combinations()
            .any(|(a, b)| a + b == candidate);
        (!is_sum).then_some(candidate)
    })
}

/// Contiguous run of at least two numbers adding up to `target`
fn find_range(numbers: &[u64], target: u64) -> Option<&[u64]> {
    let (mut start, mut end, mut sum) = (0, 0, 0);

    while start < numbers.len() {
        match sum.cmp(&target) {
            Ordering::Equal if end - start >= 2 => return Some(&numbers[start..end]),
            Ordering::Less | Ordering::Equal if end < numbers.len() => {
                sum += numbers[end];
                end += 1;
            }
            Ordering::Less | Ordering::Equal => return None,
            Ordering::Greater => {
                sum -= numbers[start];
                start += 1;
            }
        }
    }
    None
}

impl Puzzle for Solver {
    type Parsed<'a> = XmasData;
    const LAST_PART: Part = Part::Two;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let numbers = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim().parse::<u64>().map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(XmasData::new(numbers, PREAMBLE))
    }

    fn part_one(data: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(data.invalid_number()?.to_string())
    }

    fn part_two(data: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let target = data.invalid_number()?;
        let range = find_range(&data.numbers, target).ok_or_else(|| {
            SolveError::failed(format!("no contiguous range sums to {}", target))
        })?;

        match range.iter().minmax().into_option() {
            Some((min, max)) => Ok((min + max).to_string()),
            None => Err(SolveError::failed("empty range")),
        }
    }
}
