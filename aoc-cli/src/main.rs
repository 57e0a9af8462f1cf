//! `aoc`: run the registered Advent of Code solvers on local puzzle inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Links the solution crate so its `inventory` submissions are collected
use aoc_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, SolverResult, WorkItem};
use output::OutputFormatter;
use std::sync::mpsc;

fn main() {
    if let Err(e) = Config::from_args(Args::parse()).and_then(|config| run(&config)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), CliError> {
    let registry = build_registry(&config.tags)?;
    let executor =
        Executor::new(registry, config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    warn_missing_inputs(&executor, &work_items);

    let formatter = OutputFormatter::new(config.quiet);
    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }
    let results = execute_in_order(executor, &work_items, |result| formatter.print_result(result))?;
    formatter.print_summary(&results);
    Ok(())
}

/// Only solvers carrying every requested tag are registered
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new().register_solver_plugins(|plugin| {
        tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
    })?;
    Ok(builder.build())
}

/// Missing inputs still run; each of their parts reports an error result
fn warn_missing_inputs(executor: &Executor, work_items: &[WorkItem]) {
    let inputs = executor.inputs();
    let missing: Vec<_> = work_items
        .iter()
        .filter(|w| !inputs.contains(w.year, w.day))
        .map(|w| inputs.path(w.year, w.day))
        .collect();
    if missing.is_empty() {
        return;
    }

    eprintln!(
        "Warning: {} input file(s) missing from {}:",
        missing.len(),
        inputs.dir().display()
    );
    for path in &missing {
        eprintln!("  - {}", path.display());
    }
}

/// Run the executor on a background thread and hand each result to `emit`
/// in (year, day, part) order as soon as every earlier one has arrived.
fn execute_in_order(
    executor: Executor,
    work_items: &[WorkItem],
    mut emit: impl FnMut(&SolverResult),
) -> Result<Vec<SolverResult>, CliError> {
    let expected: Vec<ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(|part| ResultKey {
                year: w.year,
                day: w.day,
                part,
            })
        })
        .collect();
    let mut aggregator = ResultAggregator::new(expected);

    let (tx, rx) = mpsc::channel();
    let handle = std::thread::spawn(move || executor.execute(tx));

    let mut results = Vec::new();
    for result in rx {
        for ready in aggregator.add(result) {
            emit(&ready);
            results.push(ready);
        }
    }
    let leftover = aggregator.drain();
    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }
    leftover.iter().for_each(&mut emit);
    results.extend(leftover);

    handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;
    Ok(results)
}
