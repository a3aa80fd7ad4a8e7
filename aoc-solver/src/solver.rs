//! Core solver traits
//!
//! A day is split in two steps: [`AocParser::parse`] turns the raw input lines
//! into shared data once, then each part is answered from that data through
//! [`PartSolver`] (one impl per part) or [`Solver::solve_part`] (dispatch by
//! part number, usually generated by `#[derive(AocSolver)]`).

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data shared by all parts of a day.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .enumerate()
///             .map(|(idx, line)| {
///                 line.trim().parse::<u32>().map_err(|_| {
///                     ParseError::InvalidFormat(format!("line {}: not a depth", idx + 1))
///                 })
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("3\n1\n2").unwrap(), vec![3, 1, 2]);
/// assert!(Depths::parse("3\nx").is_err());
/// ```
pub trait AocParser {
    /// Parsed representation of the input.
    ///
    /// The lifetime allows borrowing straight from the input (`&'a str`
    /// slices) when no owned transformation is needed.
    type SharedData<'a>;

    /// Parse the full input text.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answers part `N` of a puzzle from the shared data.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse::<u32>().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Depths {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let increases = shared.windows(2).filter(|w| w[1] > w[0]).count();
///         Ok(increases.to_string())
///     }
/// }
///
/// let mut shared = Depths::parse("1\n3\n2\n5").unwrap();
/// assert_eq!(<Depths as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete day: parsing plus dispatch over its parts.
///
/// Most days derive this with `#[derive(AocSolver)]` and
/// `#[aoc_solver(max_parts = N)]`, which routes part `k` to
/// `PartSolver<k>`. A manual impl looks like this:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Calories;
///
/// impl AocParser for Calories {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split("\n\n")
///             .map(|elf| {
///                 elf.lines()
///                     .map(|l| l.parse::<u64>().map_err(|_| ParseError::InvalidFormat(l.into())))
///                     .sum::<Result<u64, ParseError>>()
///             })
///             .collect()
///     }
/// }
///
/// impl Solver for Calories {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         shared.sort_unstable_by(|a, b| b.cmp(a));
///         match part {
///             1 => Ok(shared[0].to_string()),
///             2 => Ok(shared.iter().take(3).sum::<u64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Calories::parse("1\n2\n\n10\n\n4").unwrap();
/// assert_eq!(Calories::solve_part(&mut shared, 1).unwrap(), "10");
/// assert_eq!(Calories::solve_part(&mut shared, 2).unwrap(), "17");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point used by the registry and the CLI.
pub trait SolverExt: Solver {
    /// Reject parts outside `1..=PARTS` before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
