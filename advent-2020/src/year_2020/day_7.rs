//! Day 7: Handy Haversacks

use std::collections::{HashMap, HashSet, VecDeque};

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};
use regex::Regex;

#[derive(RegisterPuzzle)]
#[puzzle(day = 7, tags = ["graph"])]
pub struct Solver;

const MY_BAG: &str = "shiny gold";

/// Colour to the colours (with counts) it must directly contain
pub type BagRules<'a> = HashMap<&'a str, Vec<(u32, &'a str)>>;

/// Colour to the colours that directly contain it
fn containers<'a>(rules: &BagRules<'a>) -> HashMap<&'a str, Vec<&'a str>> {
    let mut reverse: HashMap<&str, Vec<&str>> = HashMap::new();
    for (&outer, contents) in rules {
        for &(_, inner) in contents {
            reverse.entry(inner).or_default().push(outer);
        }
    }
    reverse
}

/// Number of distinct colours that can eventually hold `target`
fn count_ancestors(rules: &BagRules<'_>, target: &str) -> usize {
    let reverse = containers(rules);
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([target]);

    while let Some(colour) = queue.pop_front() {
        for &outer in reverse.get(colour).into_iter().flatten() {
            if seen.insert(outer) {
                queue.push_back(outer);
            }
        }
    }
    seen.len()
}

impl Puzzle for Solver {
    type Parsed<'a> = BagRules<'a>;
    const LAST_PART: Part = Part::One;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let rule_re = Regex::new(r"^(\w+ \w+) bags contain (.*)\.$")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        let content_re =
            Regex::new(r"^(\d+) (\w+ \w+) bags?$").map_err(|e| ParseError::Other(e.to_string()))?;

        let mut rules = BagRules::new();
        for (line_idx, line) in input.trim().lines().enumerate() {
            let invalid = |what: String| {
                ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, what))
            };

            let caps = rule_re
                .captures(line.trim())
                .ok_or_else(|| invalid(format!("unrecognised rule {:?}", line)))?;
            let (Some(outer), Some(contents)) = (caps.get(1), caps.get(2)) else {
                return Err(invalid("rule is missing a colour".to_string()));
            };

            let contents = match contents.as_str() {
                "no other bags" => Vec::new(),
                list => list
                    .split(", ")
                    .map(|item| -> Result<(u32, &'a str), ParseError> {
                        let caps = content_re
                            .captures(item)
                            .ok_or_else(|| invalid(format!("unrecognised contents {:?}", item)))?;
                        let count = caps[1]
                            .parse::<u32>()
                            .map_err(|e| invalid(format!("bad count: {}", e)))?;
                        let colour = caps.get(2).map_or("", |m| m.as_str());
                        Ok((count, colour))
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            };

            if rules.insert(outer.as_str(), contents).is_some() {
                return Err(invalid(format!("duplicate rule for {:?}", outer.as_str())));
            }
        }

        Ok(rules)
    }

    fn part_one(rules: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(count_ancestors(rules, MY_BAG).to_string())
    }
}
