//! Day 15: Rambunctious Recitation

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};

#[derive(RegisterPuzzle)]
#[puzzle(day = 15, tags = ["simulation", "slow"])]
pub struct Solver;

const SHORT_GAME: usize = 2020;
const LONG_GAME: usize = 30_000_000;

/// Sentinel for "never spoken" in the last-seen table
const UNSEEN: u32 = 0;

/// The number spoken on `turn` (1-based)
///
/// `last_seen[n]` holds the turn on which `n` was last spoken, not counting
/// the most recent turn. Any number spoken is below `turn`, so the table
/// never needs to grow past it.
fn nth_spoken(starting: &[u32], turn: usize) -> Option<u32> {
    if turn == 0 || starting.is_empty() {
        return None;
    }
    if turn <= starting.len() {
        return Some(starting[turn - 1]);
    }

    let table_len = turn.max(starting.iter().copied().max()? as usize + 1);
    let mut last_seen = vec![UNSEEN; table_len];
    let (&first_spoken, earlier) = starting.split_last()?;
    for (idx, &n) in earlier.iter().enumerate() {
        last_seen[n as usize] = idx as u32 + 1;
    }

    let mut spoken = first_spoken;
    for current in starting.len() as u32..turn as u32 {
        let seen = std::mem::replace(&mut last_seen[spoken as usize], current);
        spoken = if seen == UNSEEN { 0 } else { current - seen };
    }
    Some(spoken)
}

fn play(starting: &[u32], turn: usize) -> Result<String, SolveError> {
    nth_spoken(starting, turn)
        .map(|n| n.to_string())
        .ok_or_else(|| SolveError::failed("no starting numbers"))
}

impl Puzzle for Solver {
    type Parsed<'a> = Vec<u32>;
    const LAST_PART: Part = Part::Two;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let starting = input
            .trim()
            .split(',')
            .filter(|n| !n.trim().is_empty())
            .map(|n| {
                n.trim()
                    .parse::<u32>()
                    .map_err(|e| ParseError::InvalidFormat(format!("{:?}: {}", n, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if starting.is_empty() {
            return Err(ParseError::MissingData("no starting numbers".to_string()));
        }
        Ok(starting)
    }

    fn part_one(starting: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        play(starting, SHORT_GAME)
    }

    fn part_two(starting: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        play(starting, LONG_GAME)
    }
}
