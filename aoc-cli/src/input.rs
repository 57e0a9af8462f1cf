//! Local puzzle input lookup

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::InputError;

/// Directory of puzzle inputs, one file per puzzle.
///
/// Layout: `{dir}/{year}_day{day:02}.txt`
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the input for a year/day is read from
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Read the input, `None` when the file does not exist
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, InputError> {
        let path = self.path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(InputError::NotUtf8 { path }),
            Err(source) => Err(InputError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(store.path(2021, 1), PathBuf::from("inputs/2021_day01.txt"));
        assert_eq!(store.path(2021, 25), PathBuf::from("inputs/2021_day25.txt"));
    }

    #[test]
    fn test_missing_input_is_none() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2021, 9));
        assert!(store.get(2021, 9).unwrap().is_none());
    }

    #[test]
    fn test_reads_existing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        let input = "2199943210\n3987894921\n";
        fs::write(temp.path().join("2021_day09.txt"), input).unwrap();

        assert!(store.contains(2021, 9));
        assert_eq!(store.get(2021, 9).unwrap(), Some(input.to_string()));
        assert!(!store.contains(2021, 10));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::write(store.path(2021, 3), [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(store.get(2021, 3), Err(InputError::NotUtf8 { .. })));
    }

    #[test]
    fn test_directory_in_place_of_file() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir(store.path(2021, 4)).unwrap();

        assert!(!store.contains(2021, 4));
        assert!(matches!(store.get(2021, 4), Err(InputError::Io { .. })));
    }
}
