//! Parse-once, solve-per-part framework for the Advent of Code 2020 days
//!
//! - [`Puzzle`] is implemented once per day: a parser plus one or two parts
//! - [`DynPuzzle`] drives any parsed day through dynamic dispatch and times
//!   each step with [`Timed`]
//! - [`PuzzleRegistry`] holds one puzzle per day, filled from `inventory`
//!   plugins that `#[derive(RegisterPuzzle)]` submits
//!
//! ```
//! use advent_solver::{ParseError, Part, Puzzle, PuzzleRegistryBuilder, SolveError};
//!
//! struct LineCount;
//!
//! impl Puzzle for LineCount {
//!     type Parsed<'a> = &'a str;
//!     const LAST_PART: Part = Part::One;
//!
//!     fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
//!         Ok(input)
//!     }
//!
//!     fn part_one(text: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
//!         Ok(text.lines().count().to_string())
//!     }
//! }
//!
//! let registry = PuzzleRegistryBuilder::new().register::<LineCount>(1).unwrap().build();
//! let mut puzzle = registry.parse(1, "a\nb\nc").unwrap();
//! assert_eq!(puzzle.solve(Part::One).unwrap().value, "3");
//! ```
//!
//! Days register themselves with:
//!
//! ```ignore
//! #[derive(RegisterPuzzle)]
//! #[puzzle(day = 1, tags = ["search"])]
//! pub struct Solver;
//! ```

mod error;
mod parsed;
mod puzzle;
mod registry;

pub use error::{ParseError, PuzzleError, RegistrationError, SolveError};
pub use parsed::{DynPuzzle, ParsedPuzzle, Timed};
pub use puzzle::{Part, Puzzle};
pub use registry::{DAYS, DayInfo, PuzzleFactory, PuzzlePlugin, PuzzleRegistry, PuzzleRegistryBuilder};

// The derive expands to `::advent_solver::inventory::submit!`
pub use inventory;

pub use advent_solver_macros::RegisterPuzzle;
