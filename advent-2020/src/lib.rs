//! Advent of Code 2020 puzzle solutions with automatic registration
//!
//! Each day lives in its own module under [`year_2020`] and registers itself
//! through the `RegisterPuzzle` derive. Days share no code with each other.

pub mod year_2020;
