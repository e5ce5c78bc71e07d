//! Output formatting for solver results

use crate::executor::PartResult;
use chrono::TimeDelta;
use std::time::Instant;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &PartResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(_), false) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[PartResult]) {
        if self.quiet {
            return;
        }
        println!();
        for line in summary_lines(results, self.start_time.elapsed()) {
            println!("{}", line);
        }
    }
}

/// One line per result, e.g. `Day 05 Part 1: 913 (parse: 41µs, solve: 3µs)`
fn format_result(result: &PartResult) -> String {
    let prefix = format!("Day {:02} Part {}", result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

fn summary_lines(results: &[PartResult], elapsed: std::time::Duration) -> Vec<String> {
    let total = results.len();
    let successes = results.iter().filter(|r| r.answer.is_ok()).count();
    let failures = total - successes;

    let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
    let total_solve_time: TimeDelta = results
        .iter()
        .filter(|r| r.answer.is_ok())
        .map(|r| r.solve_duration)
        .sum();

    vec![
        "--- Summary ---".to_string(),
        format!("Parts: {} solved, {} failed", successes, failures),
        format!("Total parse time: {}", format_duration(total_parse_time)),
        format!("Total solve time: {}", format_duration(total_solve_time)),
        format!("Elapsed wall-clock time: {}", format_std_duration(elapsed)),
    ]
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    TimeDelta::from_std(d)
        .map(format_duration)
        .unwrap_or_else(|_| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutorError;
    use advent_solver::Part;
    use std::time::Duration;

    fn solved(day: u8, part: Part, answer: &str, parse_us: Option<i64>, solve_us: i64) -> PartResult {
        PartResult {
            day,
            part,
            answer: Ok(answer.to_string()),
            parse_duration: parse_us.map(TimeDelta::microseconds),
            solve_duration: TimeDelta::microseconds(solve_us),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_std_duration(Duration::from_micros(42)), "42µs");
    }

    #[test]
    fn test_format_result_lines() {
        assert_eq!(
            format_result(&solved(5, Part::One, "913", Some(41), 3)),
            "Day 05 Part 1: 913 (parse: 41µs, solve: 3µs)"
        );
        assert_eq!(
            format_result(&solved(5, Part::Two, "717", None, 1200)),
            "Day 05 Part 2: 717 (solve: 1.20ms)"
        );

        let failed = PartResult {
            day: 9,
            part: Part::One,
            answer: Err(ExecutorError::InputUnavailable {
                day: 9,
                message: "no input file".to_string(),
            }),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        };
        assert_eq!(
            format_result(&failed),
            "Day 09 Part 1: Error - Input unavailable for day 09: no input file"
        );
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            solved(1, Part::One, "514579", Some(100), 200),
            solved(1, Part::Two, "241861950", None, 300),
            PartResult {
                day: 2,
                part: Part::One,
                answer: Err(ExecutorError::Setup {
                    day: 2,
                    message: "bad".to_string(),
                }),
                parse_duration: None,
                solve_duration: TimeDelta::zero(),
            },
        ];
        let lines = summary_lines(&results, Duration::from_millis(3));
        assert_eq!(lines[1], "Parts: 2 solved, 1 failed");
        assert_eq!(lines[2], "Total parse time: 100µs");
        assert_eq!(lines[3], "Total solve time: 500µs");
        assert_eq!(lines[4], "Elapsed wall-clock time: 3.00ms");
    }
}
