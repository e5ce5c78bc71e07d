//! Day 10: Adapter Array

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};
use itertools::Itertools;

#[derive(RegisterPuzzle)]
#[puzzle(day = 10, tags = ["dp"])]
pub struct Solver;

/// Largest joltage step an adapter accepts, also the device's offset above
/// the highest adapter
const MAX_STEP: u32 = 3;

/// Outlet (0), every adapter in ascending order, then the device
fn build_chain(mut adapters: Vec<u32>) -> Vec<u32> {
    adapters.sort_unstable();
    let device = adapters.last().map_or(MAX_STEP, |&highest| highest + MAX_STEP);
    std::iter::once(0)
        .chain(adapters)
        .chain(std::iter::once(device))
        .collect()
}

/// Returns the number of 1-jolt and 3-jolt differences, failing on a step the
/// chain cannot bridge
fn jolt_differences(chain: &[u32]) -> Result<(u64, u64), SolveError> {
    chain
        .iter()
        .tuple_windows()
        .try_fold((0, 0), |(ones, threes), (low, high)| match high - low {
            1 => Ok((ones + 1, threes)),
            3 => Ok((ones, threes + 1)),
            step if step <= MAX_STEP => Ok((ones, threes)),
            step => Err(SolveError::failed(format!(
                "no adapter bridges the {} jolt step from {} to {}",
                step, low, high
            ))),
        })
}

/// `ways[i]` is the number of arrangements reaching `chain[i]`
fn count_arrangements(chain: &[u32]) -> u64 {
    let mut ways = vec![0u64; chain.len()];
    if let Some(first) = ways.first_mut() {
        *first = 1;
    }
    for i in 1..chain.len() {
        ways[i] = (i.saturating_sub(MAX_STEP as usize)..i)
            .filter(|&j| chain[i] - chain[j] <= MAX_STEP)
            .map(|j| ways[j])
            .sum();
    }
    ways.last().copied().unwrap_or(0)
}

impl Puzzle for Solver {
    /// The full chain from outlet to device
    type Parsed<'a> = Vec<u32>;
    const LAST_PART: Part = Part::Two;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let adapters = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim().parse::<u32>().map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if adapters.is_empty() {
            return Err(ParseError::MissingData("no adapters".to_string()));
        }
        Ok(build_chain(adapters))
    }

    fn part_one(chain: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let (ones, threes) = jolt_differences(chain)?;
        Ok((ones * threes).to_string())
    }

    fn part_two(chain: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(count_arrangements(chain).to_string())
    }
}
