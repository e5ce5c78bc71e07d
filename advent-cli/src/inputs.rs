//! Puzzle inputs read from a local directory

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read-only store of puzzle inputs
///
/// Directory structure: `{input_dir}/day{day:02}.txt`. A single day's input
/// may be overridden with an explicit file.
pub struct InputStore {
    input_dir: PathBuf,
    /// `(day, file)` read instead of the directory entry for that day
    override_file: Option<(u8, PathBuf)>,
}

impl InputStore {
    /// Create a store over `input_dir`
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            override_file: None,
        }
    }

    /// Read `day`'s input from `file` instead of the input directory
    pub fn with_override(mut self, day: u8, file: PathBuf) -> Self {
        self.override_file = Some((day, file));
        self
    }

    /// Path the input for `day` is read from
    pub fn input_path(&self, day: u8) -> PathBuf {
        match &self.override_file {
            Some((override_day, file)) if *override_day == day => file.clone(),
            _ => self.input_dir.join(format!("day{:02}.txt", day)),
        }
    }

    /// Check if an input file exists for `day`
    pub fn contains(&self, day: u8) -> bool {
        self.input_path(day).is_file()
    }

    /// Read the input for `day`
    pub fn get(&self, day: u8) -> Result<String, InputError> {
        let path = self.input_path(day);
        read_input(&path)
    }
}

fn read_input(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
