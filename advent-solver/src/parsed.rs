//! Timed parsing and solving behind a type-erased handle

use crate::error::{ParseError, SolveError};
use crate::puzzle::{Part, Puzzle};
use chrono::{DateTime, TimeDelta, Utc};

/// A value together with the wall-clock span that produced it
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
}

impl<T> Timed<T> {
    /// Run `f` and record when it started and finished
    pub fn measure(f: impl FnOnce() -> T) -> Self {
        let started = Utc::now();
        let value = f();
        let finished = Utc::now();
        Self {
            value,
            started,
            finished,
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.finished - self.started
    }
}

impl<T, E> Timed<Result<T, E>> {
    /// Keep the timing on success, drop it on error
    pub fn transpose(self) -> Result<Timed<T>, E> {
        let Timed {
            value,
            started,
            finished,
        } = self;
        value.map(|value| Timed {
            value,
            started,
            finished,
        })
    }
}

/// Input parsed by puzzle `P`, ready for its parts
pub struct ParsedPuzzle<'a, P: Puzzle> {
    parsed: Timed<P::Parsed<'a>>,
}

impl<'a, P: Puzzle> ParsedPuzzle<'a, P> {
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let parsed = Timed::measure(|| P::parse(input)).transpose()?;
        Ok(Self { parsed })
    }
}

/// Object-safe view of a [`ParsedPuzzle`], so days with different parsed
/// types can be driven the same way
///
/// ```no_run
/// use advent_solver::{DynPuzzle, Part};
///
/// fn report(mut puzzle: Box<dyn DynPuzzle>) -> Result<(), Box<dyn std::error::Error>> {
///     let answer = puzzle.solve(Part::One)?;
///     println!("{} after {} (parsed in {})", answer.value, answer.duration(), puzzle.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynPuzzle {
    fn solve(&mut self, part: Part) -> Result<Timed<String>, SolveError>;

    fn parse_duration(&self) -> TimeDelta;
}

impl<P: Puzzle> DynPuzzle for ParsedPuzzle<'_, P> {
    fn solve(&mut self, part: Part) -> Result<Timed<String>, SolveError> {
        let parsed = &mut self.parsed.value;
        Timed::measure(|| P::solve(parsed, part)).transpose()
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parsed.duration()
    }
}
