//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use crate::inputs::InputStore;
use advent_solver::Part;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<Part>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input directory path
    pub input_dir: PathBuf,
    /// Explicit input file for the filtered day
    pub input_file: Option<PathBuf>,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, expanding `~` in paths
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.input.is_some() && args.day.is_none() {
            return Err(CliError::Config(
                "--input needs --day to know which solver to run".to_string(),
            ));
        }

        let part_filter = args
            .part
            .map(Part::try_from)
            .transpose()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(Config {
            day_filter: args.day,
            part_filter,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_file: args.input.as_deref().map(expand_tilde),
            quiet: args.quiet,
        })
    }

    /// Input store honouring the input directory and any explicit input file
    pub fn input_store(&self) -> InputStore {
        let store = InputStore::new(self.input_dir.clone());
        match (self.day_filter, &self.input_file) {
            (Some(day), Some(file)) => store.with_override(day, file.clone()),
            _ => store,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        let args = Args::try_parse_from(std::iter::once("advent").chain(argv.iter().copied()))
            .unwrap();
        Config::from_args(args)
    }

    #[test]
    fn test_filters_pass_through() {
        let config = config(&["-d", "7", "-p", "1", "-t", "graph", "-q", "-v"]).unwrap();
        assert_eq!(config.day_filter, Some(7));
        assert_eq!(config.part_filter, Some(Part::One));
        assert_eq!(config.tags, vec!["graph"]);
        assert!(config.quiet);
    }

    #[test]
    fn test_input_file_overrides_filtered_day() {
        let config = config(&["--input-dir", "puzzles", "-d", "3", "-i", "trees.txt"]).unwrap();
        let store = config.input_store();
        assert_eq!(store.input_path(3), PathBuf::from("trees.txt"));
        assert_eq!(store.input_path(4), PathBuf::from("puzzles").join("day04.txt"));
    }

    #[test]
    fn test_input_file_without_day_is_rejected() {
        let args = Args {
            day: None,
            part: None,
            tags: Vec::new(),
            input_dir: PathBuf::from("inputs"),
            input: Some(PathBuf::from("trees.txt")),
            quiet: false,
            verbose: 0,
        };
        assert!(matches!(Config::from_args(args), Err(CliError::Config(_))));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("/tmp/in")), PathBuf::from("/tmp/in"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
