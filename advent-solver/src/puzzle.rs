//! The trait every puzzle day implements

use crate::error::{ParseError, SolveError};
use std::fmt;

/// One half of a day's puzzle
///
/// Ordered, so `part <= P::LAST_PART` tells whether a day has that part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// Every part a day can have, in order
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    pub const fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    /// Parts `One..=last`
    pub fn up_to(last: Part) -> impl Iterator<Item = Part> {
        Self::ALL.into_iter().filter(move |&part| part <= last)
    }
}

impl TryFrom<u8> for Part {
    type Error = SolveError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(SolveError::PartOutOfRange(other)),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A puzzle day: parse the input once, then answer one or two parts from it
///
/// Parts take the parsed data mutably so part two can reuse what part one
/// worked out (day 9 keeps the invalid number around, for instance).
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, Part, Puzzle, SolveError};
///
/// struct Sum;
///
/// impl Puzzle for Sum {
///     type Parsed<'a> = Vec<i32>;
///     const LAST_PART: Part = Part::Two;
///
///     fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
///
///     fn part_one(numbers: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
///         Ok(numbers.iter().sum::<i32>().to_string())
///     }
///
///     fn part_two(numbers: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
///         Ok(numbers.iter().product::<i32>().to_string())
///     }
/// }
///
/// let mut numbers = Sum::parse("2\n3").unwrap();
/// assert_eq!(Sum::solve(&mut numbers, Part::Two).unwrap(), "6");
/// ```
pub trait Puzzle {
    /// Parsed input. May borrow from the input text.
    type Parsed<'a>;

    /// Highest part this day answers
    const LAST_PART: Part;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError>;

    fn part_one(parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError>;

    /// Only called when `LAST_PART` is [`Part::Two`]
    fn part_two(_parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Err(SolveError::PartNotImplemented(Part::Two))
    }

    /// Answer `part`, or fail with `PartNotImplemented` past `LAST_PART`
    fn solve(parsed: &mut Self::Parsed<'_>, part: Part) -> Result<String, SolveError> {
        if part > Self::LAST_PART {
            return Err(SolveError::PartNotImplemented(part));
        }
        match part {
            Part::One => Self::part_one(parsed),
            Part::Two => Self::part_two(parsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_numbers() {
        assert_eq!(Part::try_from(1).unwrap(), Part::One);
        assert_eq!(Part::try_from(2).unwrap(), Part::Two);
        assert!(matches!(Part::try_from(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(Part::try_from(3), Err(SolveError::PartOutOfRange(3))));
        assert_eq!(Part::Two.to_string(), "2");
    }

    #[test]
    fn test_up_to() {
        assert_eq!(Part::up_to(Part::One).collect::<Vec<_>>(), vec![Part::One]);
        assert_eq!(Part::up_to(Part::Two).collect::<Vec<_>>(), vec![Part::One, Part::Two]);
    }
}
