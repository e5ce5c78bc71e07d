//! Day 8: Handheld Halting
//!
//! A boot program of `acc`, `jmp` and `nop` instructions. Running stops as
//! soon as an instruction is about to execute for the second time, or when
//! the instruction pointer lands exactly one past the last instruction.

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};
use anyhow::{Context, anyhow};
use tracing::debug;

#[derive(RegisterPuzzle)]
#[puzzle(day = 8, tags = ["vm"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Acc(i32),
    Jmp(i32),
    Nop(i32),
}

impl Op {
    /// `jmp` and `nop` swapped, `acc` left alone
    fn flipped(self) -> Option<Op> {
        match self {
            Op::Acc(_) => None,
            Op::Jmp(arg) => Some(Op::Nop(arg)),
            Op::Nop(arg) => Some(Op::Jmp(arg)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// About to repeat an instruction; carries the accumulator at that point
    Loop(i64),
    /// Instruction pointer reached the end of the program
    Terminated(i64),
    /// Jumped somewhere other than into the program or just past its end
    OutOfBounds { ip: i64, acc: i64 },
}

fn run(program: &[Op]) -> Outcome {
    let mut visited = vec![false; program.len()];
    let mut ip: i64 = 0;
    let mut acc: i64 = 0;

    loop {
        if ip == program.len() as i64 {
            return Outcome::Terminated(acc);
        }
        let Some(idx) = usize::try_from(ip).ok().filter(|&idx| idx < program.len()) else {
            return Outcome::OutOfBounds { ip, acc };
        };
        if std::mem::replace(&mut visited[idx], true) {
            return Outcome::Loop(acc);
        }

        match program[idx] {
            Op::Acc(arg) => {
                acc += i64::from(arg);
                ip += 1;
            }
            Op::Jmp(arg) => ip += i64::from(arg),
            Op::Nop(_) => ip += 1,
        }
    }
}

fn parse_op(line: &str) -> Result<Op, anyhow::Error> {
    let (name, arg) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<op> <argument>'"))?;
    let arg = arg
        .trim()
        .parse::<i32>()
        .with_context(|| format!("invalid argument {:?}", arg))?;

    match name {
        "acc" => Ok(Op::Acc(arg)),
        "jmp" => Ok(Op::Jmp(arg)),
        "nop" => Ok(Op::Nop(arg)),
        other => Err(anyhow!("unknown operation {:?}", other)),
    }
}

impl Puzzle for Solver {
    type Parsed<'a> = Vec<Op>;
    const LAST_PART: Part = Part::Two;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_op(line.trim()).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e))
                })
            })
            .collect()
    }

    fn part_one(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        match run(program) {
            Outcome::Loop(acc) | Outcome::Terminated(acc) => Ok(acc.to_string()),
            Outcome::OutOfBounds { ip, acc } => Err(SolveError::failed(format!(
                "jumped out of the program to {} with accumulator {}",
                ip, acc
            ))),
        }
    }

    fn part_two(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        for idx in 0..program.len() {
            let Some(repaired) = program[idx].flipped() else {
                continue;
            };
            let original = std::mem::replace(&mut program[idx], repaired);
            let outcome = run(program);
            program[idx] = original;

            if let Outcome::Terminated(acc) = outcome {
                debug!(line = idx + 1, "program terminates after flipping instruction");
                return Ok(acc.to_string());
            }
        }
        Err(SolveError::failed(
            "no single jmp/nop swap makes the program terminate",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6
";

    #[test]
    fn test_accumulator_before_loop() {
        let mut parsed = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::part_one(&mut parsed).unwrap(), "5");
    }

    #[test]
    fn test_repaired_program() {
        let mut parsed = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::part_two(&mut parsed).unwrap(), "8");
        assert_eq!(parsed, Solver::parse(EXAMPLE).unwrap());
    }

    #[test]
    fn test_terminating_program_answers_final_accumulator() {
        let mut parsed = Solver::parse("acc +2\nnop +0\nacc -5\n").unwrap();
        assert_eq!(Solver::part_one(&mut parsed).unwrap(), "-3");
    }

    #[test]
    fn test_out_of_bounds_jump() {
        assert_eq!(
            run(&[Op::Acc(1), Op::Jmp(-2)]),
            Outcome::OutOfBounds { ip: -1, acc: 1 }
        );
        let mut parsed = Solver::parse("jmp +5\n").unwrap();
        assert!(Solver::part_one(&mut parsed).is_err());
    }

    #[test]
    fn test_unrepairable_program() {
        let mut parsed = Solver::parse("jmp +0\nacc +1\njmp -2\n").unwrap();
        assert!(Solver::part_two(&mut parsed).is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("mul +3").is_err());
        assert!(Solver::parse("acc three").is_err());
        assert!(Solver::parse("acc").is_err());
    }
}
