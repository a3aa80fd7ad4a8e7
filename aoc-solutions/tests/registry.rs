//! Plugin registration for the 2023 solutions

use aoc_solver::{DynSolver, SolveError, SolverError, SolverRegistryBuilder};

// Link the crate so its plugins are collected
use aoc_solutions as _;

const DAY_5: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

const DAY_7: &str = "\
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

fn solve_all(year: u16, day: u8, input: &str) -> Vec<Result<String, SolveError>> {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let mut solver = registry.create_solver(year, day, input).unwrap();
    (1..=solver.parts())
        .map(|part| solver.solve(part).map(|r| r.answer))
        .collect()
}

#[test]
fn test_2023_days_registered() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let storage = registry.storage();

    for day in [5, 7, 19] {
        let info = storage.get_info(2023, day).unwrap();
        assert_eq!(info.parts, 2, "day {day}");
    }
    assert_eq!(storage.get_info(2023, 25).unwrap().parts, 1);
    assert!(!storage.contains(2023, 1));
}

#[test]
fn test_tag_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"ranges"))
        .unwrap()
        .build();
    let storage = registry.storage();

    assert!(storage.contains(2023, 5));
    assert!(storage.contains(2023, 19));
    assert!(!storage.contains(2023, 7));
    assert!(!storage.contains(2023, 25));
}

#[test]
fn test_solve_through_registry() {
    let answers: Vec<_> = solve_all(2023, 5, DAY_5)
        .into_iter()
        .map(Result::unwrap)
        .collect();
    assert_eq!(answers, ["35", "46"]);

    let answers: Vec<_> = solve_all(2023, 7, DAY_7)
        .into_iter()
        .map(Result::unwrap)
        .collect();
    assert_eq!(answers, ["6440", "5905"]);
}

#[test]
fn test_parse_failure_surfaces_as_solver_error() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2023, 7, "32T3K"),
        Err(SolverError::ParseError(_))
    ));
    assert!(matches!(
        registry.create_solver(2023, 1, ""),
        Err(SolverError::NotFound(2023, 1))
    ));
}
