//! Day 12: Rain Risk
//!
//! Coordinates are `(east, north)`.

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};
use anyhow::{Context, anyhow, bail};

#[derive(RegisterPuzzle)]
#[puzzle(day = 12, tags = ["navigation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    North(i64),
    South(i64),
    East(i64),
    West(i64),
    /// Counter-clockwise, in quarter turns
    Left(u8),
    /// Clockwise, in quarter turns
    Right(u8),
    Forward(i64),
}

type Vector = (i64, i64);

fn rotate((x, y): Vector, quarter_turns_ccw: u8) -> Vector {
    (0..quarter_turns_ccw % 4).fold((x, y), |(x, y), _| (-y, x))
}

fn quarter_turns(degrees: i64) -> Result<u8, anyhow::Error> {
    if degrees % 90 != 0 {
        bail!("rotation of {} degrees is not a multiple of 90", degrees);
    }
    Ok((degrees.rem_euclid(360) / 90) as u8)
}

fn parse_instruction(line: &str) -> Result<Instruction, anyhow::Error> {
    let mut chars = line.chars();
    let action = chars.next().ok_or_else(|| anyhow!("empty instruction"))?;
    let value = chars
        .as_str()
        .parse::<i64>()
        .with_context(|| format!("invalid value {:?}", chars.as_str()))?;

    Ok(match action {
        'N' => Instruction::North(value),
        'S' => Instruction::South(value),
        'E' => Instruction::East(value),
        'W' => Instruction::West(value),
        'L' => Instruction::Left(quarter_turns(value)?),
        'R' => Instruction::Right(quarter_turns(value)?),
        'F' => Instruction::Forward(value),
        other => bail!("unknown action {:?}", other),
    })
}

/// `(east, north)` unit offset of a compass move, with its distance
fn compass_move(instruction: Instruction) -> Option<(Vector, i64)> {
    match instruction {
        Instruction::North(n) => Some(((0, 1), n)),
        Instruction::South(n) => Some(((0, -1), n)),
        Instruction::East(n) => Some(((1, 0), n)),
        Instruction::West(n) => Some(((-1, 0), n)),
        _ => None,
    }
}

fn turn(vector: Vector, instruction: Instruction) -> Vector {
    match instruction {
        Instruction::Left(turns) => rotate(vector, turns),
        Instruction::Right(turns) => rotate(vector, 4 - turns % 4),
        _ => vector,
    }
}

fn advance(position: Vector, (dx, dy): Vector, times: i64) -> Vector {
    (position.0 + dx * times, position.1 + dy * times)
}

/// Compass moves shift the ship; `F` moves it along its heading
fn navigate_ship(instructions: &[Instruction]) -> Vector {
    let mut ship = (0, 0);
    let mut heading = (1, 0);
    for &instruction in instructions {
        match (instruction, compass_move(instruction)) {
            (_, Some((direction, n))) => ship = advance(ship, direction, n),
            (Instruction::Forward(n), None) => ship = advance(ship, heading, n),
            (_, None) => heading = turn(heading, instruction),
        }
    }
    ship
}

/// Compass moves and rotations act on the waypoint; `F` moves the ship towards it
fn navigate_waypoint(instructions: &[Instruction]) -> Vector {
    let mut ship = (0, 0);
    let mut waypoint = (10, 1);
    for &instruction in instructions {
        match (instruction, compass_move(instruction)) {
            (_, Some((direction, n))) => waypoint = advance(waypoint, direction, n),
            (Instruction::Forward(n), None) => ship = advance(ship, waypoint, n),
            (_, None) => waypoint = turn(waypoint, instruction),
        }
    }
    ship
}

fn manhattan((x, y): Vector) -> i64 {
    x.abs() + y.abs()
}

impl Puzzle for Solver {
    type Parsed<'a> = Vec<Instruction>;
    const LAST_PART: Part = Part::Two;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_instruction(line.trim()).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e))
                })
            })
            .collect()
    }

    fn part_one(instructions: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(manhattan(navigate_ship(instructions)).to_string())
    }

    fn part_two(instructions: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(manhattan(navigate_waypoint(instructions)).to_string())
    }
}
