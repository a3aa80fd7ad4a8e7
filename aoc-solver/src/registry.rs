//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Thread-safe factory that parses input into a ready-to-solve instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Immutable storage for solver factories with O(1) access
///
/// Uses a flat Vec with index math for efficient storage and lookup.
/// Supports years 2015-2034 and days 1-25. Iteration is in
/// ascending (year, day) order.
pub struct SolverFactoryStorage {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverFactoryStorage {
    /// Iterate over metadata for all registered factories
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Get metadata for a specific factory
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    /// Check if a factory exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing a [`SolverRegistry`]
///
/// Registration fails on duplicates and on year/day pairs outside the
/// supported range, so a built registry never silently shadows a solver.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Echo>(2023, 1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2023, 1, " hello ").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// assert!(solver.solve(2).is_err());
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with explicit parts count
    ///
    /// Returns error if year/day is out of bounds or already registered.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type for a year/day
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, move |input: &str| {
            let solver: Box<dyn DynSolver + '_> =
                Box::new(SolverInstance::<S>::new(year, day, input)?);
            Ok(solver)
        })
    }

    /// Register all collected solver plugins
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2023 && plugin.tags.contains(&"parsing"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Build the immutable registry
    pub fn build(self) -> SolverRegistry {
        let storage = SolverFactoryStorage {
            entries: self.entries,
        };
        tracing::debug!(solvers = storage.len(), "built solver registry");
        SolverRegistry { storage }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable registry mapping (year, day) to solver factories
///
/// `Send + Sync`, so one registry can be shared by every worker thread.
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    /// Get readonly access to the factory storage for iteration/lookup
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Parse `input` with the solver registered for year/day
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .storage
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Type-erased hook that lets a solver register itself
///
/// Implemented for every [`Solver`] through a blanket impl, so plugin
/// statics can hold `&'static dyn RegisterableSolver`.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`; a hand-written
/// submission looks like:
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 7,
///         solver: &Day7,
///         tags: &["2023", "sorting"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g. "2023", "parsing")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::AocParser;

    struct Lines;

    impl AocParser for Lines {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for Lines {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                2 => Ok(shared.concat()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_index_roundtrip() {
        assert_eq!(calc_index(2015, 1), Some(0));
        assert_eq!(calc_index(2023, 5), Some(8 * 25 + 4));
        assert_eq!(from_index(8 * 25 + 4), (2023, 5));
        assert_eq!(from_index(CAPACITY - 1), (2034, 25));
    }

    #[test]
    fn test_index_bounds() {
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(2035, 1), None);
        assert_eq!(calc_index(2023, 0), None);
        assert_eq!(calc_index(2023, 26), None);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = SolverRegistryBuilder::new()
            .register_solver::<Lines>(2023, 5)
            .unwrap()
            .register_solver::<Lines>(2023, 5);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2023, 5))
        ));
    }

    #[test]
    fn test_out_of_range_registration_rejected() {
        let result = SolverRegistryBuilder::new().register_solver::<Lines>(2023, 26);
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidYearDay(2023, 26))
        ));
    }

    #[test]
    fn test_create_and_solve() {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<Lines>(2023, 7)
            .unwrap()
            .build();

        let mut solver = registry.create_solver(2023, 7, "ab\ncd").unwrap();
        assert_eq!(solver.year(), 2023);
        assert_eq!(solver.day(), 7);
        assert_eq!(solver.parts(), 2);
        assert_eq!(solver.solve(1).unwrap().answer, "2");
        assert_eq!(solver.solve(2).unwrap().answer, "abcd");
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_lookup_errors() {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<Lines>(2023, 7)
            .unwrap()
            .build();

        assert!(matches!(
            registry.create_solver(2023, 8, "x"),
            Err(SolverError::NotFound(2023, 8))
        ));
        assert!(matches!(
            registry.create_solver(1999, 1, "x"),
            Err(SolverError::InvalidYearDay(1999, 1))
        ));
        assert!(matches!(
            registry.create_solver(2023, 7, ""),
            Err(SolverError::ParseError(ParseError::MissingData(_)))
        ));
    }

    #[test]
    fn test_storage_iteration_is_ordered() {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<Lines>(2024, 1)
            .unwrap()
            .register_solver::<Lines>(2023, 19)
            .unwrap()
            .register_solver::<Lines>(2023, 5)
            .unwrap()
            .build();

        let keys: Vec<_> = registry
            .storage()
            .iter_info()
            .map(|info| (info.year, info.day))
            .collect();
        assert_eq!(keys, vec![(2023, 5), (2023, 19), (2024, 1)]);
        assert_eq!(registry.storage().len(), 3);
        assert!(registry.storage().contains(2023, 19));
        assert_eq!(
            registry.storage().get_info(2024, 1),
            Some(FactoryInfo {
                year: 2024,
                day: 1,
                parts: 2
            })
        );
    }
}
