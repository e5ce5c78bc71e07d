//! Error types for the solver library

use crate::puzzle::Part;
use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for answering one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The day has no such part
    #[error("Part {0} is not implemented")]
    PartNotImplemented(Part),
    /// Not a part number at all
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error (or a plain message) as a failed solve
    pub fn failed(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::SolveFailed(err.into())
    }
}

/// Error from looking up, parsing or solving a registered day
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("No puzzle registered for day {0}")]
    NotFound(u8),
    /// Day outside of 1..=25
    #[error("Invalid day {0}")]
    InvalidDay(u8),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A second puzzle for a day that already has one
    #[error("Duplicate puzzle registration for day {0}")]
    Duplicate(u8),
    /// Day outside of 1..=25
    #[error("Cannot register puzzle for invalid day {0}")]
    InvalidDay(u8),
}
