//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),
}

/// Errors reading puzzle inputs
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file for the day
    #[error("no input file at {}", .0.display())]
    NotFound(PathBuf),

    /// IO error
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors carried in a [`PartResult`](crate::executor::PartResult)
///
/// Failures that happen once per day (unreadable input, unparsable input) are
/// repeated for each part, so they carry the rendered message rather than
/// the original error.
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// The day's input could not be read, so no part was attempted
    #[error("Input unavailable for day {day:02}: {message}")]
    InputUnavailable { day: u8, message: String },

    /// The day's input was read but could not be parsed
    #[error("Could not prepare day {day:02}: {message}")]
    Setup { day: u8, message: String },

    #[error("Solver execution failed: {0}")]
    Puzzle(#[from] advent_solver::PuzzleError),
}
