//! Puzzle input lookup

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Where puzzle inputs are read from
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`. An explicit
/// file replaces the lookup for every year/day.
#[derive(Debug, Clone)]
pub struct InputStore {
    input_dir: PathBuf,
    input_file: Option<PathBuf>,
}

impl InputStore {
    /// Create a store rooted at `input_dir`
    pub fn new(input_dir: PathBuf, input_file: Option<PathBuf>) -> Self {
        Self {
            input_dir,
            input_file,
        }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.input_file {
            Some(file) => file.clone(),
            None => self.input_dir.join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        tracing::debug!(year, day, path = %path.display(), "reading input");

        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing(path),
            _ => InputError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), None);

        assert_eq!(
            store.input_path(2023, 5),
            temp.path().join("2023_day05.txt")
        );
        assert_eq!(
            store.input_path(2023, 25),
            temp.path().join("2023_day25.txt")
        );
    }

    #[test]
    fn test_read_from_directory() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), None);

        assert!(matches!(store.read(2023, 7), Err(InputError::Missing(_))));

        let input = "32T3K 765\nT55J5 684\n";
        fs::write(temp.path().join("2023_day07.txt"), input).unwrap();
        assert_eq!(store.read(2023, 7).unwrap(), input);
    }

    #[test]
    fn test_explicit_file_overrides_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("custom.txt");
        fs::write(&file, "seeds: 1\n").unwrap();
        fs::write(temp.path().join("2023_day05.txt"), "ignored").unwrap();

        let store = InputStore::new(temp.path().to_path_buf(), Some(file.clone()));
        assert_eq!(store.input_path(2023, 5), file);
        assert_eq!(store.read(2023, 5).unwrap(), "seeds: 1\n");
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("2023_day19.txt")).unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), None);

        assert!(matches!(store.read(2023, 19), Err(InputError::Io { .. })));
    }
}
