//! Parsing helpers shared by the day solvers

use anyhow::{Context, anyhow};
use aoc_solver::{ParseError, SolveError};
use std::str::FromStr;

/// Parse every non-blank line with `parse_line`, prefixing failures with the
/// 1-based line number.
pub fn parse_lines<'a, T, F>(input: &'a str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line).map_err(|e| line_error(idx, e)))
        .collect()
}

/// Wrap an error with the 1-based line number it came from.
pub fn line_error(line_idx: usize, err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, err))
}

/// Parse whitespace-separated numbers.
pub fn parse_numbers<T>(text: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<T>()
                .with_context(|| format!("invalid number {token:?}"))
        })
        .collect()
}

/// Parse a single field, naming it in the error.
pub fn parse_field<T>(text: &str, what: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.trim()
        .parse::<T>()
        .map_err(|e| anyhow!("invalid {what} {text:?}: {e}"))
}

/// Turn a solve-time failure into the framework error.
pub fn solve_failed(err: anyhow::Error) -> SolveError {
    SolveError::SolveFailed(err.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_skips_blank_and_reports_line() {
        let parsed = parse_lines("1\n\n2\n", |l| parse_field::<u8>(l, "value")).unwrap();
        assert_eq!(parsed, vec![1, 2]);

        let err = parse_lines("1\n\nx", |l| parse_field::<u8>(l, "value")).unwrap_err();
        assert!(err.to_string().contains("(line 3)"), "{err}");
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_numbers::<u64>(" 79 14  55 ").unwrap(), vec![79, 14, 55]);
        assert!(parse_numbers::<u64>("79 -1").is_err());
        assert!(parse_numbers::<u64>("").unwrap().is_empty());
    }
}
