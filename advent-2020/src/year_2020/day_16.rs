//! Day 16: Ticket Translation
//!
//! Input has three blank-line separated sections: field rules, `your ticket:`
//! and `nearby tickets:`. Only the nearby tickets are scanned.

use std::ops::RangeInclusive;

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};
use anyhow::{Context, anyhow};
use regex::Regex;

#[derive(RegisterPuzzle)]
#[puzzle(day = 16, tags = ["parsing"])]
pub struct Solver;

/// The two inclusive ranges a field's values may fall in; the field name is
/// irrelevant to scanning and not kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    ranges: [RangeInclusive<u32>; 2],
}

impl FieldRule {
    fn accepts(&self, value: u32) -> bool {
        self.ranges.iter().any(|range| range.contains(&value))
    }
}

#[derive(Debug)]
pub struct Notes {
    rules: Vec<FieldRule>,
    nearby_tickets: Vec<Vec<u32>>,
}

impl Notes {
    /// Sum of nearby ticket values that no rule accepts
    fn scanning_error_rate(&self) -> u64 {
        self.nearby_tickets
            .iter()
            .flatten()
            .filter(|&&value| !self.rules.iter().any(|rule| rule.accepts(value)))
            .map(|&value| u64::from(value))
            .sum()
    }
}

fn parse_ticket(line: &str) -> Result<Vec<u32>, anyhow::Error> {
    line.split(',')
        .map(|value| {
            value
                .trim()
                .parse::<u32>()
                .with_context(|| format!("invalid ticket value {:?}", value))
        })
        .collect()
}

fn parse_notes(input: &str, rule_re: &Regex) -> Result<Notes, anyhow::Error> {
    let mut lines = input.trim().lines().map(str::trim).enumerate();

    let mut rules = Vec::new();
    for (line_idx, line) in lines.by_ref() {
        if line.is_empty() {
            break;
        }
        let caps = rule_re
            .captures(line)
            .ok_or_else(|| anyhow!("(line {}) unrecognised rule {:?}", line_idx + 1, line))?;
        let bound = |idx: usize| -> Result<u32, anyhow::Error> {
            caps[idx]
                .parse()
                .with_context(|| format!("(line {}) bound out of range", line_idx + 1))
        };
        rules.push(FieldRule {
            ranges: [bound(2)?..=bound(3)?, bound(4)?..=bound(5)?],
        });
    }

    let mut section = |header: &str| -> Result<Vec<Vec<u32>>, anyhow::Error> {
        match lines.next() {
            Some((_, line)) if line == header => {}
            Some((line_idx, line)) => {
                return Err(anyhow!(
                    "(line {}) expected {:?}, got {:?}",
                    line_idx + 1,
                    header,
                    line
                ));
            }
            None => return Err(anyhow!("missing {:?} section", header)),
        }
        lines
            .by_ref()
            .take_while(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                parse_ticket(line).with_context(|| format!("(line {})", line_idx + 1))
            })
            .collect()
    };

    if section("your ticket:")?.is_empty() {
        return Err(anyhow!("your ticket is missing"));
    }
    let nearby_tickets = section("nearby tickets:")?;

    Ok(Notes {
        rules,
        nearby_tickets,
    })
}

impl Puzzle for Solver {
    type Parsed<'a> = Notes;
    const LAST_PART: Part = Part::One;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let rule_re = Regex::new(r"^([^:]+): (\d+)-(\d+) or (\d+)-(\d+)$")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        parse_notes(input, &rule_re).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }

    fn part_one(notes: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(notes.scanning_error_rate().to_string())
    }
}
