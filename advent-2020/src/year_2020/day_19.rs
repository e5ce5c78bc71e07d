//! Day 19: Monster Messages
//!
//! Rule 0 is compiled into a single regular expression: every rule becomes a
//! non-capturing group of its alternatives, built bottom-up and memoised.

use std::collections::{HashMap, HashSet};

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};
use anyhow::{Context, anyhow, bail};
use regex::RegexBuilder;
use tracing::debug;

#[derive(RegisterPuzzle)]
#[puzzle(day = 19, tags = ["grammar", "regex"])]
pub struct Solver;

const ROOT_RULE: u32 = 0;

/// Compiled pattern size can grow well past the regex crate's default limit
const REGEX_SIZE_LIMIT: usize = 64 * (1 << 20);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule<'a> {
    /// Matches this text exactly, e.g. `"a"`
    Literal(&'a str),
    /// Any one of the sequences of sub-rules
    Alternatives(Vec<Vec<u32>>),
}

#[derive(Debug)]
pub struct Transmission<'a> {
    rules: HashMap<u32, Rule<'a>>,
    messages: Vec<&'a str>,
}

struct PatternBuilder<'r, 'a> {
    rules: &'r HashMap<u32, Rule<'a>>,
    patterns: HashMap<u32, String>,
    /// Rules whose pattern is being built further up the call stack
    in_progress: HashSet<u32>,
}

impl<'r, 'a> PatternBuilder<'r, 'a> {
    fn new(rules: &'r HashMap<u32, Rule<'a>>) -> Self {
        Self {
            rules,
            patterns: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    fn pattern(&mut self, id: u32) -> Result<String, SolveError> {
        if let Some(pattern) = self.patterns.get(&id) {
            return Ok(pattern.clone());
        }
        let rules = self.rules;
        let rule = rules
            .get(&id)
            .ok_or_else(|| SolveError::failed(format!("rule {} is not defined", id)))?;
        if !self.in_progress.insert(id) {
            return Err(SolveError::failed(format!(
                "rule {} refers back to itself",
                id
            )));
        }

        let pattern = match rule {
            Rule::Literal(text) => regex::escape(text),
            Rule::Alternatives(alternatives) => {
                let mut branches = Vec::with_capacity(alternatives.len());
                for sequence in alternatives {
                    let mut branch = String::new();
                    for &sub_rule in sequence {
                        branch.push_str(&self.pattern(sub_rule)?);
                    }
                    branches.push(branch);
                }
                format!("(?:{})", branches.join("|"))
            }
        };

        self.in_progress.remove(&id);
        self.patterns.insert(id, pattern.clone());
        Ok(pattern)
    }
}

fn count_matching(transmission: &Transmission<'_>, rule: u32) -> Result<usize, SolveError> {
    let pattern = PatternBuilder::new(&transmission.rules).pattern(rule)?;
    debug!(rule, pattern_len = pattern.len(), "compiled rule pattern");

    let regex = RegexBuilder::new(&format!("^{}$", pattern))
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(SolveError::failed)?;
    Ok(transmission
        .messages
        .iter()
        .filter(|message| regex.is_match(message))
        .count())
}

fn parse_rule(line: &str) -> Result<(u32, Rule<'_>), anyhow::Error> {
    let (id, body) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("expected '<id>: <rule>'"))?;
    let id = id
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid rule id {:?}", id))?;
    let body = body.trim();

    if let Some(literal) = body.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        if literal.is_empty() {
            bail!("rule {} has an empty literal", id);
        }
        return Ok((id, Rule::Literal(literal)));
    }

    let alternatives = body
        .split('|')
        .map(|sequence| -> Result<Vec<u32>, anyhow::Error> {
            let sub_rules = sequence
                .split_whitespace()
                .map(|sub_rule| {
                    sub_rule
                        .parse::<u32>()
                        .with_context(|| format!("invalid sub-rule {:?}", sub_rule))
                })
                .collect::<Result<Vec<_>, _>>()?;
            if sub_rules.is_empty() {
                bail!("rule {} has an empty alternative", id);
            }
            Ok(sub_rules)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((id, Rule::Alternatives(alternatives)))
}

impl Puzzle for Solver {
    type Parsed<'a> = Transmission<'a>;
    const LAST_PART: Part = Part::One;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let mut lines = input.trim().lines().map(str::trim).enumerate();

        let mut rules = HashMap::new();
        for (line_idx, line) in lines.by_ref() {
            if line.is_empty() {
                break;
            }
            let (id, rule) = parse_rule(line).map_err(|e| {
                ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e))
            })?;
            if rules.insert(id, rule).is_some() {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) rule {} is defined twice",
                    line_idx + 1,
                    id
                )));
            }
        }

        let messages = lines
            .map(|(_, line)| line)
            .filter(|line| !line.is_empty())
            .collect();

        if !rules.contains_key(&ROOT_RULE) {
            return Err(ParseError::MissingData(format!("rule {} is missing", ROOT_RULE)));
        }
        Ok(Transmission { rules, messages })
    }

    fn part_one(transmission: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(count_matching(transmission, ROOT_RULE)?.to_string())
    }
}
