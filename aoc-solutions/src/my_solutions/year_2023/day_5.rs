//! Day 5: If You Give A Seed A Fertilizer
//!
//! Seeds are pushed through a chain of category maps (seed -> soil -> ... ->
//! location). Each map is a list of `destination source length` rows; the
//! first row covering a value wins and values outside every row map to
//! themselves.

use crate::utils::{line_error, parse_numbers, solve_failed};
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;
use std::ops::Range;

const START_CATEGORY: &str = "seed";
const END_CATEGORY: &str = "location";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["2023", "ranges"])]
pub struct Solver;

#[derive(Debug)]
pub struct Almanac<'a> {
    seeds: Vec<u64>,
    maps: Vec<CategoryMap<'a>>,
}

#[derive(Debug)]
struct CategoryMap<'a> {
    source: &'a str,
    destination: &'a str,
    ranges: Vec<MapRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MapRange {
    destination: u64,
    source: u64,
    length: u64,
}

impl MapRange {
    /// Rows whose source or destination end would not fit in `u64` are rejected,
    /// so `translate` cannot overflow.
    fn from_numbers(numbers: Vec<u64>) -> anyhow::Result<Self> {
        let [destination, source, length] = numbers[..] else {
            bail!("expected 3 numbers, got {}", numbers.len());
        };
        if destination.checked_add(length).is_none() || source.checked_add(length).is_none() {
            bail!("range {destination} {source} {length} extends past {}", u64::MAX);
        }
        Ok(Self {
            destination,
            source,
            length,
        })
    }

    fn source_range(&self) -> Range<u64> {
        self.source..self.source.saturating_add(self.length)
    }

    fn translate(&self, value: u64) -> u64 {
        self.destination + (value - self.source)
    }
}

impl CategoryMap<'_> {
    fn map_value(&self, value: u64) -> u64 {
        self.ranges
            .iter()
            .find(|range| range.source_range().contains(&value))
            .map_or(value, |range| range.translate(value))
    }

    /// Map whole intervals, splitting them on row boundaries.
    ///
    /// Rows are applied in order and a piece consumed by one row is never
    /// seen by a later one, so overlapping rows keep first-match semantics.
    fn map_intervals(&self, intervals: Vec<Range<u64>>) -> Vec<Range<u64>> {
        let mut pending = intervals;
        let mut mapped = Vec::with_capacity(pending.len());

        for row in &self.ranges {
            let source = row.source_range();
            let mut unmatched = Vec::with_capacity(pending.len());
            for interval in pending {
                let overlap = interval.start.max(source.start)..interval.end.min(source.end);
                if overlap.is_empty() {
                    unmatched.push(interval);
                    continue;
                }
                let target = row.translate(overlap.start);
                mapped.push(target..target + (overlap.end - overlap.start));
                if interval.start < overlap.start {
                    unmatched.push(interval.start..overlap.start);
                }
                if overlap.end < interval.end {
                    unmatched.push(overlap.end..interval.end);
                }
            }
            pending = unmatched;
        }

        mapped.extend(pending);
        mapped
    }
}

impl Almanac<'_> {
    /// Maps in the order they are applied, following category names from
    /// `seed` to `location`.
    fn pipeline(&self) -> anyhow::Result<Vec<&CategoryMap<'_>>> {
        let mut chain = Vec::new();
        let mut current = START_CATEGORY;

        while current != END_CATEGORY {
            let next = self
                .maps
                .iter()
                .find(|map| map.source == current)
                .ok_or_else(|| anyhow!("no map from category {current:?}"))?;
            if chain.iter().any(|seen: &&CategoryMap<'_>| seen.source == next.source) {
                bail!("category maps loop back on {current:?} before reaching {END_CATEGORY:?}");
            }
            chain.push(next);
            current = next.destination;
        }

        Ok(chain)
    }

    fn lowest_location(&self) -> anyhow::Result<u64> {
        let pipeline = self.pipeline()?;
        self.seeds
            .iter()
            .map(|&seed| pipeline.iter().fold(seed, |value, map| map.map_value(value)))
            .min()
            .ok_or_else(|| anyhow!("no seeds listed"))
    }

    fn lowest_location_for_seed_ranges(&self) -> anyhow::Result<u64> {
        if self.seeds.len() % 2 != 0 {
            bail!("seed ranges need start/length pairs, got {} numbers", self.seeds.len());
        }
        let pipeline = self.pipeline()?;

        let seed_ranges = self
            .seeds
            .iter()
            .tuples()
            .map(|(&start, &length)| start..start.saturating_add(length))
            .filter(|range| !range.is_empty())
            .collect_vec();

        pipeline
            .iter()
            .fold(seed_ranges, |intervals, map| map.map_intervals(intervals))
            .into_iter()
            .map(|range| range.start)
            .min()
            .ok_or_else(|| anyhow!("no seeds listed"))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (seed_idx, seed_line) = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("seeds line".to_string()))?;
        let seeds = seed_line
            .trim()
            .strip_prefix("seeds:")
            .ok_or_else(|| anyhow!("expected \"seeds:\" line"))
            .and_then(parse_numbers::<u64>)
            .map_err(|e| line_error(seed_idx, e))?;

        let mut maps: Vec<CategoryMap<'a>> = Vec::new();
        for (idx, line) in lines {
            let line = line.trim();
            if let Some(header) = line.strip_suffix(" map:") {
                let (source, destination) = header
                    .split_once("-to-")
                    .ok_or_else(|| line_error(idx, anyhow!("invalid map header {line:?}")))?;
                maps.push(CategoryMap {
                    source,
                    destination,
                    ranges: Vec::new(),
                });
                continue;
            }

            let row = parse_numbers::<u64>(line)
                .and_then(MapRange::from_numbers)
                .map_err(|e| line_error(idx, e))?;
            maps.last_mut()
                .ok_or_else(|| line_error(idx, anyhow!("range row before any map header")))?
                .ranges
                .push(row);
        }

        Ok(Almanac { seeds, maps })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .lowest_location()
            .map(|location| location.to_string())
            .map_err(solve_failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .lowest_location_for_seed_ranges()
            .map(|location| location.to_string())
            .map_err(solve_failed)
    }
}
