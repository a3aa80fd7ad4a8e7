//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    pub solve_duration: TimeDelta,
    /// Set on the first part solved from each parse
    pub parse_duration: Option<TimeDelta>,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone(), config.input_file.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        tracing::info!(
            solvers = work_items.len(),
            mode = ?self.sync_executor_config.parallelize_by,
            threads = self.thread_pool.current_num_threads(),
            "starting execution"
        );

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_solver(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                // Group by year, parallelize years using configured thread pool
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Day and Part both parallelize across all work items (Part differs in run_solver behavior)
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_solver(&work, tx, sync_executor_config).err())
                .reduce_with(merge_errors)
                .flatten()
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_solver(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(merge_errors)
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

fn merge_errors(
    first: Option<ArcExecutorError>,
    second: Option<ArcExecutorError>,
) -> Option<ArcExecutorError> {
    match (first, second) {
        (Some(first), Some(second)) => Some(ArcExecutorError::combine(first, second)),
        (first, second) => first.or(second),
    }
}

/// Create an error result that carries no timing
fn error_result(year: u16, day: u8, part: u8, error: ArcExecutorError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        solve_duration: TimeDelta::zero(),
        parse_duration: None,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Load input and run the selected parts of one year/day
fn run_solver(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match sync_executor_config.inputs.read(year, day) {
        Ok(input) => input,
        Err(source) => {
            tracing::warn!(year, day, error = %source, "skipping day without input");
            let error = ArcExecutorError::from(ExecutorError::Input { year, day, source });
            for part in work.parts.clone() {
                send(tx, error_result(year, day, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, tx, &sync_executor_config.registry)
    } else {
        run_solver_sequential(work, &input, tx, &sync_executor_config.registry)
    }
}

/// Parse once per part and solve the parts in parallel
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    work.parts
        .clone()
        .into_par_iter()
        .try_for_each_with(tx.clone(), |tx, part| {
            let result = match registry.create_solver(year, day, input) {
                Ok(mut solver) => solve_part(part, &mut *solver, true),
                Err(e) => error_result(year, day, part, parse_failure(year, day, e)),
            };
            send(tx, result)
        })
}

/// Parse once and solve the parts in order
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut solver = match registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            let error = parse_failure(year, day, e);
            for part in work.parts.clone() {
                send(tx, error_result(year, day, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    for (idx, part) in work.parts.clone().enumerate() {
        send(tx, solve_part(part, &mut *solver, idx == 0))?;
    }
    Ok(())
}

fn parse_failure(year: u16, day: u8, error: SolverError) -> ArcExecutorError {
    tracing::warn!(year, day, %error, "solver could not be created");
    ExecutorError::Solver(error).into()
}

/// Solve a single part
fn solve_part(part: u8, solver: &mut dyn DynSolver, with_parse: bool) -> SolverResult {
    let (year, day) = (solver.year(), solver.day());
    let parse_duration = with_parse.then(|| solver.parse_duration());

    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => {
            tracing::debug!(year, day, part, error = %e, "part failed");
            SolverResult {
                parse_duration,
                ..error_result(year, day, part, ExecutorError::Solver(e.into()).into())
            }
        }
    }
}
