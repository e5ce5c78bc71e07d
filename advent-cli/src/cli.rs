//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code 2020 solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run Advent of Code 2020 solvers", version)]
pub struct Args {
    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle inputs named `dayNN.txt`
    #[arg(long, env = "ADVENT_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Read the input for `--day` from this file instead of the input directory
    #[arg(short, long, requires = "day")]
    pub input: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["advent"]).unwrap();
        assert_eq!(args.day, None);
        assert_eq!(args.part, None);
        assert!(args.tags.is_empty());
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_tags_are_comma_separated() {
        let args = Args::try_parse_from(["advent", "-t", "grid,simulation"]).unwrap();
        assert_eq!(args.tags, vec!["grid", "simulation"]);
    }

    #[test]
    fn test_day_and_part_ranges() {
        assert!(Args::try_parse_from(["advent", "-d", "0"]).is_err());
        assert!(Args::try_parse_from(["advent", "-d", "26"]).is_err());
        assert!(Args::try_parse_from(["advent", "-p", "3"]).is_err());
        let args = Args::try_parse_from(["advent", "-d", "19", "-p", "1"]).unwrap();
        assert_eq!((args.day, args.part), (Some(19), Some(1)));
    }

    #[test]
    fn test_input_file_requires_day() {
        assert!(Args::try_parse_from(["advent", "-i", "puzzle.txt"]).is_err());
        let args = Args::try_parse_from(["advent", "-d", "3", "-i", "puzzle.txt"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("puzzle.txt")));
    }

    #[test]
    fn test_verbosity_counts() {
        let args = Args::try_parse_from(["advent", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }
}
