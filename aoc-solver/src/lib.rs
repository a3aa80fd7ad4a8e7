//! Advent of Code Solver Library
//!
//! Framework for puzzle solvers keyed by year and day. Each day parses its
//! input once and answers one or more parts from the parsed data.
//!
//! # Overview
//!
//! - [`AocParser`] turns the input into a day's shared data
//! - [`PartSolver`] answers a single part; [`Solver`] dispatches by part number
//! - [`SolverInstance`] / [`DynSolver`] wrap a parsed day behind dynamic dispatch
//!   and record parse/solve timing
//! - [`SolverRegistryBuilder`] / [`SolverRegistry`] map `(year, day)` to factories,
//!   either registered by hand or collected from [`SolverPlugin`]s
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Trebuchet;
//!
//! impl AocParser for Trebuchet {
//!     type SharedData<'a> = Vec<&'a str>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         Ok(input.lines().collect())
//!     }
//! }
//!
//! impl PartSolver<1> for Trebuchet {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         let total: u32 = shared
//!             .iter()
//!             .map(|line| {
//!                 let mut digits = line.chars().filter_map(|c| c.to_digit(10));
//!                 let first = digits.next().unwrap_or(0);
//!                 let last = digits.last().unwrap_or(first);
//!                 first * 10 + last
//!             })
//!             .sum();
//!         Ok(total.to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Trebuchet {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.len().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Trebuchet>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1abc2\npqr3stu8vwx").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "50");
//! assert_eq!(solver.solve(2).unwrap().answer, "2");
//! ```
//!
//! # Plugins
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] through
//! [`inventory`], and [`SolverRegistryBuilder::register_all_plugins`] picks
//! up every plugin linked into the final binary:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2023, day = 7, tags = ["2023", "sorting"])]
//! pub struct Solver;
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
