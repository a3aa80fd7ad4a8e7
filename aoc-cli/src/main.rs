//! AOC CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::{OutputFormatter, Summary};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_tracing(&config)?;

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;

    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        OutputFormatter::new(config.quiet)
            .print_status("No solvers found matching the specified filters.");
        return Ok(());
    }

    if let Some(file) = &config.input_file
        && work_items.len() != 1
    {
        return Err(CliError::Config(format!(
            "--input {} needs exactly one selected day, but {} match",
            file.display(),
            work_items.len()
        )));
    }

    run_executor(executor, &work_items, config.quiet)
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(config: &Config) -> Result<(), CliError> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level()))
        .map_err(|e| CliError::Logging(e.to_string()))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

/// Run the executor and collect results
fn run_executor(
    executor: Executor,
    work_items: &[executor::WorkItem],
    quiet: bool,
) -> Result<(), CliError> {
    // Build expected keys for result aggregation
    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |p| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part: p,
            })
        })
        .collect();

    // Set up result channel
    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    // Collect and display results in order using aggregator
    let formatter = OutputFormatter::new(quiet);
    formatter.print_status(&format!("Running {} solver(s)...", work_items.len()));
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        tracing::warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    let summary = Summary::from_results(&results);
    formatter.print_summary(&summary);

    match summary.failed {
        0 => Ok(()),
        failed => Err(CliError::PartsFailed(failed)),
    }
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    let registry = builder.build();
    tracing::debug!(solvers = registry.storage().len(), ?tags, "registry built");
    Ok(registry)
}
