//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputStore;
use advent_solver::{DynPuzzle, Part, PuzzleRegistry};
use chrono::TimeDelta;
use tracing::{debug, warn};

/// Outcome of one part of one day
#[derive(Debug)]
pub struct PartResult {
    pub day: u8,
    pub part: Part,
    pub answer: Result<String, ExecutorError>,
    /// Time spent parsing the day's input; only set on the first part run for the day
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A day and the parts of it selected to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub day: u8,
    pub parts: Vec<Part>,
}

/// Runs each selected day in order, one part after the other
pub struct Executor {
    registry: PuzzleRegistry,
    inputs: InputStore,
    day_filter: Option<u8>,
    part_filter: Option<Part>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: PuzzleRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: config.input_store(),
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Registered days passing the day filter, each with the parts passing
    /// the part filter. Days left with no parts are dropped.
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .days()
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                day: info.day,
                parts: info
                    .parts()
                    .filter(|&part| self.part_filter.is_none_or(|p| p == part))
                    .collect(),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items, handing each result to `on_result` as soon as
    /// it is ready
    pub fn execute<F>(&self, mut on_result: F)
    where
        F: FnMut(PartResult),
    {
        for work in self.collect_work_items() {
            self.run_day(&work, &mut on_result);
        }
    }

    /// Read and parse the day's input once, then solve each selected part
    fn run_day<F>(&self, work: &WorkItem, on_result: &mut F)
    where
        F: FnMut(PartResult),
    {
        let day = work.day;
        let input = match self.inputs.get(day) {
            Ok(input) => input,
            Err(e) => {
                warn!(day, error = %e, "skipping day without input");
                let message = e.to_string();
                for &part in &work.parts {
                    let error = ExecutorError::InputUnavailable {
                        day,
                        message: message.clone(),
                    };
                    on_result(make_error_result(day, part, error));
                }
                return;
            }
        };

        let mut puzzle = match self.registry.parse(day, &input) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                let message = e.to_string();
                for &part in &work.parts {
                    let error = ExecutorError::Setup {
                        day,
                        message: message.clone(),
                    };
                    on_result(make_error_result(day, part, error));
                }
                return;
            }
        };

        debug!(
            day,
            parse_us = puzzle.parse_duration().num_microseconds(),
            "parsed input"
        );
        let mut parse_duration = Some(puzzle.parse_duration());
        for &part in &work.parts {
            on_result(solve_part(day, part, &mut *puzzle, parse_duration.take()));
        }
    }
}

/// Create an error result for a part that was never attempted
fn make_error_result(day: u8, part: Part, error: ExecutorError) -> PartResult {
    PartResult {
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

fn solve_part(
    day: u8,
    part: Part,
    puzzle: &mut dyn DynPuzzle,
    parse_duration: Option<TimeDelta>,
) -> PartResult {
    match puzzle.solve(part) {
        Ok(answer) => PartResult {
            day,
            part,
            solve_duration: answer.duration(),
            answer: Ok(answer.value),
            parse_duration,
        },
        Err(e) => PartResult {
            day,
            part,
            answer: Err(ExecutorError::Puzzle(e.into())),
            parse_duration,
            solve_duration: TimeDelta::zero(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_2020::year_2020::{day_1, day_13, day_15};
    use advent_solver::{PuzzleError, PuzzleRegistryBuilder};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn registry() -> PuzzleRegistry {
        PuzzleRegistryBuilder::new()
            .register::<day_1::Solver>(1)
            .and_then(|b| b.register::<day_13::Solver>(13))
            .and_then(|b| b.register::<day_15::Solver>(15))
            .unwrap()
            .build()
    }

    fn config(input_dir: &Path, day: Option<u8>, part: Option<Part>) -> Config {
        Config {
            day_filter: day,
            part_filter: part,
            tags: Vec::new(),
            input_dir: input_dir.to_path_buf(),
            input_file: None,
            quiet: false,
        }
    }

    fn run(executor: &Executor) -> Vec<PartResult> {
        let mut results = Vec::new();
        executor.execute(|result| results.push(result));
        results
    }

    #[test]
    fn test_work_items_follow_filters() {
        let temp = TempDir::new().unwrap();

        let all = Executor::new(registry(), &config(temp.path(), None, None));
        assert_eq!(
            all.collect_work_items(),
            vec![
                WorkItem { day: 1, parts: vec![Part::One, Part::Two] },
                WorkItem { day: 13, parts: vec![Part::One] },
                WorkItem { day: 15, parts: vec![Part::One, Part::Two] },
            ]
        );

        let part_two = Executor::new(registry(), &config(temp.path(), None, Some(Part::Two)));
        let days: Vec<u8> = part_two.collect_work_items().iter().map(|w| w.day).collect();
        assert_eq!(days, vec![1, 15]);

        let one_day = Executor::new(registry(), &config(temp.path(), Some(13), None));
        assert_eq!(one_day.collect_work_items().len(), 1);
    }

    #[test]
    fn test_results_arrive_in_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("day01.txt"), "1721\n979\n366\n299\n675\n1456\n").unwrap();
        fs::write(temp.path().join("day13.txt"), "939\n7,13,x,x,59,x,31,19\n").unwrap();

        let executor = Executor::new(registry(), &config(temp.path(), None, Some(Part::One)));
        let results = run(&executor);

        let summary: Vec<(u8, Part, Option<&str>)> = results
            .iter()
            .map(|r| (r.day, r.part, r.answer.as_deref().ok()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, Part::One, Some("514579")),
                (13, Part::One, Some("295")),
                (15, Part::One, None),
            ]
        );
    }

    #[test]
    fn test_parse_time_reported_once_per_day() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("day01.txt"), "1721\n299\n").unwrap();

        let executor = Executor::new(registry(), &config(temp.path(), Some(1), None));
        let results = run(&executor);

        assert_eq!(results.len(), 2);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_fails_every_part() {
        let temp = TempDir::new().unwrap();
        let executor = Executor::new(registry(), &config(temp.path(), Some(15), None));
        let results = run(&executor);

        assert_eq!(results.len(), 2);
        for result in results {
            assert!(matches!(
                result.answer,
                Err(ExecutorError::InputUnavailable { day: 15, .. })
            ));
        }
    }

    #[test]
    fn test_unparsable_input_fails_every_part() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("day01.txt"), "12\nnot a number\n").unwrap();

        let executor = Executor::new(registry(), &config(temp.path(), Some(1), None));
        let results = run(&executor);

        assert_eq!(results.len(), 2);
        for result in results {
            match result.answer {
                Err(ExecutorError::Setup { day, message }) => {
                    assert_eq!(day, 1);
                    assert!(message.contains("line 2"));
                }
                other => panic!("expected setup error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_solve_failure_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("day13.txt"), "939\nx,x\n").unwrap();

        let executor = Executor::new(registry(), &config(temp.path(), Some(13), None));
        let results = run(&executor);

        assert_eq!(results.len(), 1);
        assert!(matches!(
            results[0].answer,
            Err(ExecutorError::Puzzle(PuzzleError::Solve(_)))
        ));
    }
}
