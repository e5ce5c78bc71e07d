//! Day 2: Password Philosophy

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};
use anyhow::{Context, anyhow};

#[derive(RegisterPuzzle)]
#[puzzle(day = 2, tags = ["parsing"])]
pub struct Solver;

/// One line of the database, e.g. `1-3 a: abcde`
#[derive(Debug, PartialEq, Eq)]
pub struct PasswordEntry<'a> {
    min: usize,
    max: usize,
    letter: char,
    password: &'a str,
}

impl PasswordEntry<'_> {
    fn is_valid(&self) -> bool {
        let occurrences = self.password.chars().filter(|&c| c == self.letter).count();
        (self.min..=self.max).contains(&occurrences)
    }
}

fn parse_entry(line: &str) -> Result<PasswordEntry<'_>, anyhow::Error> {
    let (policy, password) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' between policy and password"))?;
    let (range, letter) = policy
        .trim()
        .split_once(' ')
        .ok_or_else(|| anyhow!("policy must look like 'min-max letter'"))?;
    let (min, max) = range
        .split_once('-')
        .ok_or_else(|| anyhow!("range must look like 'min-max'"))?;

    let mut letters = letter.chars();
    let letter = match (letters.next(), letters.next()) {
        (Some(c), None) => c,
        _ => return Err(anyhow!("policy letter must be a single character")),
    };

    Ok(PasswordEntry {
        min: min.parse().context("invalid minimum")?,
        max: max.parse().context("invalid maximum")?,
        letter,
        password: password.trim(),
    })
}

impl Puzzle for Solver {
    type Parsed<'a> = Vec<PasswordEntry<'a>>;
    const LAST_PART: Part = Part::One;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_entry(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e))
                })
            })
            .collect()
    }

    fn part_one(entries: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(entries.iter().filter(|entry| entry.is_valid()).count().to_string())
    }
}
