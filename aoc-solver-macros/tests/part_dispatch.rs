use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Tally;

impl AocParser for Tally {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u64>()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {token}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Tally {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Tally {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(u64::to_string)
            .ok_or_else(|| SolveError::SolveFailed("no numbers".into()))
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct FinalDay;

impl AocParser for FinalDay {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for FinalDay {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<Tally as Solver>::PARTS, 2);
    assert_eq!(<FinalDay as Solver>::PARTS, 1);
}

#[test]
fn test_dispatch_routes_to_part_solver() {
    let mut shared = Tally::parse("4 8 15 16 23 42").unwrap();
    assert_eq!(Tally::solve_part(&mut shared, 1).unwrap(), "108");
    assert_eq!(Tally::solve_part(&mut shared, 2).unwrap(), "42");
}

#[test]
fn test_dispatch_rejects_unknown_parts() {
    let mut shared = Tally::parse("1").unwrap();
    assert!(matches!(
        Tally::solve_part(&mut shared, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
    assert!(matches!(
        Tally::solve_part(&mut shared, 3),
        Err(SolveError::PartOutOfRange(3))
    ));

    let mut text = FinalDay::parse("abc").unwrap();
    assert_eq!(FinalDay::solve_part(&mut text, 1).unwrap(), "3");
    assert!(matches!(
        FinalDay::solve_part(&mut text, 2),
        Err(SolveError::PartOutOfRange(2))
    ));
}

#[test]
fn test_part_errors_propagate() {
    let mut shared = Tally::parse("").unwrap();
    assert!(matches!(
        Tally::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
}
