//! Day 13: Shuttle Search

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};

#[derive(RegisterPuzzle)]
#[puzzle(day = 13, tags = ["math"])]
pub struct Solver;

#[derive(Debug, PartialEq, Eq)]
pub struct Schedule {
    earliest: u64,
    /// Ids of buses in service; `x` entries are dropped
    buses: Vec<u64>,
}

/// Minutes from `timestamp` until `bus` next departs; zero when it leaves right then
fn wait_time(timestamp: u64, bus: u64) -> u64 {
    (bus - timestamp % bus) % bus
}

impl Puzzle for Solver {
    type Parsed<'a> = Schedule;
    const LAST_PART: Part = Part::One;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let mut lines = input.trim().lines().map(str::trim);
        let (Some(earliest), Some(buses)) = (lines.next(), lines.next()) else {
            return Err(ParseError::MissingData(
                "expected a timestamp line and a bus line".to_string(),
            ));
        };

        let earliest = earliest
            .parse::<u64>()
            .map_err(|e| ParseError::InvalidFormat(format!("(line 1) {}", e)))?;
        let buses = buses
            .split(',')
            .filter(|&id| id != "x")
            .map(|id| match id.parse::<u64>() {
                Ok(0) => Err(ParseError::InvalidFormat(
                    "(line 2) bus id 0 is not a valid bus".to_string(),
                )),
                Ok(id) => Ok(id),
                Err(e) => Err(ParseError::InvalidFormat(format!("(line 2) {:?}: {}", id, e))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Schedule { earliest, buses })
    }

    fn part_one(schedule: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        schedule
            .buses
            .iter()
            .map(|&bus| (wait_time(schedule.earliest, bus), bus))
            .min_by_key(|&(wait, _)| wait)
            .map(|(wait, bus)| (wait * bus).to_string())
            .ok_or_else(|| SolveError::failed("no bus is in service"))
    }
}
