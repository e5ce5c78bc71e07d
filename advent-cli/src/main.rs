//! Advent CLI - Command-line interface for running the Advent of Code 2020 solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import advent-2020 to link the solver plugins
use advent_2020 as _;

use advent_solver::{PuzzleRegistry, PuzzleRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so answers on stdout stay machine-readable; `RUST_LOG`
/// takes precedence over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;
    tracing::info!(solvers = registry.len(), "registry built");

    let executor = Executor::new(registry, &config);
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Report missing inputs up front; those days still show up as failures
    let missing_inputs: Vec<u8> = work_items
        .iter()
        .map(|w| w.day)
        .filter(|&day| !executor.inputs().contains(day))
        .collect();
    if !missing_inputs.is_empty() && !config.quiet {
        println!("Missing {} input file(s):", missing_inputs.len());
        for day in &missing_inputs {
            println!("  - {}", executor.inputs().input_path(*day).display());
        }
        println!();
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<PuzzleRegistry, error::CliError> {
    let builder = PuzzleRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
