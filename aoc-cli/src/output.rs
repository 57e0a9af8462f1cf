//! Console output for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use itertools::Itertools;
use std::time::{Duration, Instant};

/// Prints results as they are emitted and a summary at the end
pub struct OutputFormatter {
    quiet: bool,
    started: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            started: Instant::now(),
        }
    }

    /// Answers to stdout, errors to stderr. Quiet mode prints bare answers.
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(answer), false) => println!("{}", format_answer_line(result, answer)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(e), false) => eprintln!("{}: Error - {}", result_prefix(result), e),
        }
    }

    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        let summary = Summary::of(results);
        let elapsed = self.started.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Solvers: {} solved, {} failed", summary.solved, summary.failed);
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!("Elapsed wall-clock time: {}", format_std_duration(elapsed));
        if let Some(speedup) = summary.speedup(elapsed) {
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// Totals over the successful results of a run
#[derive(Debug, PartialEq)]
struct Summary {
    solved: usize,
    failed: usize,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    fn of(results: &[SolverResult]) -> Self {
        let (ok, failed): (Vec<_>, Vec<_>) = results.iter().partition(|r| r.answer.is_ok());
        Self {
            solved: ok.len(),
            failed: failed.len(),
            // Parts of one day share a single parse
            parse_time: ok
                .iter()
                .unique_by(|r| (r.year, r.day))
                .filter_map(|r| r.parse_duration)
                .sum(),
            solve_time: ok.iter().map(|r| r.solve_duration).sum(),
        }
    }

    /// Compute time over wall-clock time, `None` when nothing was measured
    fn speedup(&self, elapsed: Duration) -> Option<f64> {
        let compute = (self.parse_time + self.solve_time).num_microseconds()?;
        let elapsed = elapsed.as_secs_f64();
        (elapsed > 0.0).then(|| compute as f64 / 1_000_000.0 / elapsed)
    }
}

/// `2021/09 Part 1`
fn result_prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// Answer with timings; multi-line answers start on their own line
fn format_answer_line(result: &SolverResult, answer: &str) -> String {
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    let timing = format!("({}solve: {})", parse_timing, format_duration(result.solve_duration));

    if answer.contains('\n') {
        format!("{} {}:\n{}", result_prefix(result), timing, answer)
    } else {
        format!("{}: {} {}", result_prefix(result), answer, timing)
    }
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

fn format_duration(d: TimeDelta) -> String {
    match d.num_microseconds() {
        None => "N/A".to_string(),
        Some(micros) if micros < 0 => format!("-{}", format_micros(micros.unsigned_abs().into())),
        Some(micros) => format_micros(micros.unsigned_abs().into()),
    }
}

fn format_std_duration(d: Duration) -> String {
    format_micros(d.as_micros())
}
