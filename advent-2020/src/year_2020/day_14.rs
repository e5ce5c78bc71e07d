//! Day 14: Docking Data
//!
//! Values and addresses are 36-bit. The current mask affects every write
//! that follows it, until the next `mask` line.

use std::collections::HashMap;

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};
use anyhow::{Context, anyhow, bail};

#[derive(RegisterPuzzle)]
#[puzzle(day = 14, tags = ["bitmask", "vm"])]
pub struct Solver;

const WORD_BITS: usize = 36;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mask {
    /// Bits written as `1`
    ones: u64,
    /// Bits written as `0`
    zeros: u64,
    /// Bits written as `X`
    floating: u64,
}

impl Mask {
    /// Version 1: `1`/`0` overwrite the value, `X` keeps it
    fn apply_to_value(&self, value: u64) -> u64 {
        (value | self.ones) & !self.zeros
    }

    /// Version 2: `0` keeps the address bit, `1` sets it, `X` takes both values
    fn addresses(&self, address: u64) -> impl Iterator<Item = u64> + use<> {
        let base = (address | self.ones) & !self.floating;
        let floating = self.floating;
        // walk every subset of the floating bits, from all set down to none
        let mut subset = Some(floating);
        std::iter::from_fn(move || {
            let current = subset?;
            subset = (current != 0).then(|| (current - 1) & floating);
            Some(base | current)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    SetMask(Mask),
    Write { address: u64, value: u64 },
}

fn parse_mask(bits: &str) -> Result<Mask, anyhow::Error> {
    if bits.len() != WORD_BITS {
        bail!("mask must have {} bits, got {}", WORD_BITS, bits.len());
    }
    bits.bytes().try_fold(Mask::default(), |mask, b| {
        let shifted = Mask {
            ones: mask.ones << 1,
            zeros: mask.zeros << 1,
            floating: mask.floating << 1,
        };
        match b {
            b'1' => Ok(Mask { ones: shifted.ones | 1, ..shifted }),
            b'0' => Ok(Mask { zeros: shifted.zeros | 1, ..shifted }),
            b'X' => Ok(Mask { floating: shifted.floating | 1, ..shifted }),
            other => Err(anyhow!("unexpected mask bit {:?}", other as char)),
        }
    })
}

fn parse_word(text: &str, what: &str) -> Result<u64, anyhow::Error> {
    let word = text
        .trim()
        .parse::<u64>()
        .with_context(|| format!("invalid {} {:?}", what, text))?;
    if word >> WORD_BITS != 0 {
        bail!("{} {} does not fit in {} bits", what, word, WORD_BITS);
    }
    Ok(word)
}

fn parse_instruction(line: &str) -> Result<Instruction, anyhow::Error> {
    let (target, value) = line
        .split_once(" = ")
        .ok_or_else(|| anyhow!("expected '<target> = <value>'"))?;

    if target == "mask" {
        return Ok(Instruction::SetMask(parse_mask(value.trim())?));
    }
    let address = target
        .strip_prefix("mem[")
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| anyhow!("unknown target {:?}", target))?;

    Ok(Instruction::Write {
        address: parse_word(address, "address")?,
        value: parse_word(value, "value")?,
    })
}

/// Runs the program, letting `write` store each masked write into memory
fn run<F>(program: &[Instruction], mut write: F) -> u64
where
    F: FnMut(&mut HashMap<u64, u64>, &Mask, u64, u64),
{
    let mut memory = HashMap::new();
    let mut mask = Mask::default();
    for instruction in program {
        match *instruction {
            Instruction::SetMask(next) => mask = next,
            Instruction::Write { address, value } => write(&mut memory, &mask, address, value),
        }
    }
    memory.values().sum()
}

impl Puzzle for Solver {
    type Parsed<'a> = Vec<Instruction>;
    const LAST_PART: Part = Part::Two;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let program = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_instruction(line.trim()).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(idx) = program
            .iter()
            .position(|instruction| matches!(instruction, Instruction::Write { .. }))
            .filter(|&idx| {
                !program[..idx]
                    .iter()
                    .any(|instruction| matches!(instruction, Instruction::SetMask(_)))
            })
        {
            return Err(ParseError::MissingData(format!(
                "(line {}) memory write before any mask",
                idx + 1
            )));
        }
        Ok(program)
    }

    fn part_one(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let sum = run(program, |memory, mask, address, value| {
            memory.insert(address, mask.apply_to_value(value));
        });
        Ok(sum.to_string())
    }

    fn part_two(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let sum = run(program, |memory, mask, address, value| {
            memory.extend(mask.addresses(address).map(|address| (address, value)));
        });
        Ok(sum.to_string())
    }
}
