//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// No input file for the puzzle
    #[error("Missing input for {year}/{day:02}: {} not found", .path.display())]
    MissingInput { year: u16, day: u8, path: PathBuf },

    /// Input file exists but could not be read
    #[error("Input read failed for {year}/{day:02}: {source}")]
    InputRead {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Parsing or solving failed
    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Merge two errors into one `Multiple`, flattening either side that is
    /// already a `Multiple`. Order is preserved.
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let mut errors = Vec::new();
        for err in [first, second] {
            match err.inner() {
                ExecutorError::Multiple(inner) => errors.extend(inner.iter().cloned()),
                _ => errors.push(err),
            }
        }
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Input store errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Reading the input file failed for a reason other than absence
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid UTF-8
    #[error("{} is not valid UTF-8", .path.display())]
    NotUtf8 { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(day: u8) -> ArcExecutorError {
        ExecutorError::MissingInput {
            year: 2021,
            day,
            path: PathBuf::from(format!("inputs/2021_day{day:02}.txt")),
        }
        .into()
    }

    fn days(err: &ArcExecutorError) -> Vec<u8> {
        match err.inner() {
            ExecutorError::Multiple(errors) => errors.iter().flat_map(days).collect(),
            ExecutorError::MissingInput { day, .. } => vec![*day],
            _ => vec![],
        }
    }

    #[test]
    fn test_combine_flattens_in_order() {
        let left = ArcExecutorError::combine(single(1), single(2));
        let right = ArcExecutorError::combine(single(3), single(4));
        let all = ArcExecutorError::combine(left, right);
        assert_eq!(days(&all), vec![1, 2, 3, 4]);
        assert!(all.to_string().contains("4 total"));

        let appended = ArcExecutorError::combine(all, single(5));
        assert_eq!(days(&appended), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_combine_opt_keeps_single_error() {
        let err = ArcExecutorError::combine_opt(None, single(9));
        assert!(matches!(err.inner(), ExecutorError::MissingInput { day: 9, .. }));
        assert!(err.to_string().contains("2021_day09.txt"));
    }
}
