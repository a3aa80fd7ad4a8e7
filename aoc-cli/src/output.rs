//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

/// Totals printed after the last result
#[derive(Debug, PartialEq)]
pub struct Summary {
    pub solved: usize,
    pub failed: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Summary {
    /// Tally results
    ///
    /// A parse is timed once but may be attached to a part that failed, so
    /// parse time counts every result while solve time counts answers only.
    pub fn from_results(results: &[SolverResult]) -> Self {
        let solved = results.iter().filter(|r| r.answer.is_ok()).count();

        Self {
            solved,
            failed: results.len() - solved,
            parse_time: results.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: results
                .iter()
                .filter(|r| r.answer.is_ok())
                .map(|r| r.solve_duration)
                .sum(),
        }
    }

    /// Ratio of summed compute time to wall-clock time
    pub fn speedup(&self, elapsed: Duration) -> Option<f64> {
        if elapsed.is_zero() {
            return None;
        }
        let compute = self.parse_time + self.solve_time;
        let compute_secs = compute.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
        Some(compute_secs / elapsed.as_secs_f64())
    }
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Progress or status text; quiet mode prints answers only
    pub fn status_line<'a>(&self, text: &'a str) -> Option<&'a str> {
        (!self.quiet).then_some(text)
    }

    /// Print a status line unless quiet
    pub fn print_status(&self, text: &str) {
        if let Some(line) = self.status_line(text) {
            println!("{}", line);
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_answer_line(result)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(e), false) => eprintln!("{}: Error - {}", result_prefix(result), e),
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, summary: &Summary) {
        if self.quiet {
            return;
        }

        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Solvers: {} solved, {} failed",
            summary.solved, summary.failed
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if let Some(speedup) = summary.speedup(elapsed_time) {
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

fn result_prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// `YYYY/DD Part P: answer (parse: …, solve: …)`
fn format_answer_line(result: &SolverResult) -> String {
    let answer = result.answer.as_deref().unwrap_or_default();
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();

    format!(
        "{}: {} ({}solve: {})",
        result_prefix(result),
        answer,
        parse_timing,
        format_duration(result.solve_duration)
    )
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
fn format_std_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
