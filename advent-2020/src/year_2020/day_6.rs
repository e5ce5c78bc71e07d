//! Day 6: Custom Customs

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};

#[derive(RegisterPuzzle)]
#[puzzle(day = 6, tags = ["parsing"])]
pub struct Solver;

/// Questions answered "yes" by anyone in a group, one bit per letter `a..=z`
pub type Answers = u32;

fn person_answers(line: &str) -> Result<Answers, String> {
    line.bytes().try_fold(0, |answers, b| match b {
        b'a'..=b'z' => Ok(answers | 1 << (b - b'a')),
        other => Err(format!("unexpected question {:?}", other as char)),
    })
}

impl Puzzle for Solver {
    type Parsed<'a> = Vec<Answers>;
    const LAST_PART: Part = Part::One;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let mut groups = Vec::new();
        let mut current: Option<Answers> = None;

        for (line_idx, line) in input.trim().lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                groups.extend(current.take());
                continue;
            }
            let answers = person_answers(line).map_err(|e| {
                ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
            })?;
            *current.get_or_insert(0) |= answers;
        }
        groups.extend(current);

        Ok(groups)
    }

    fn part_one(groups: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let total: u32 = groups.iter().map(|group| group.count_ones()).sum();
        Ok(total.to_string())
    }
}
