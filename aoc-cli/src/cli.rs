//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute all solvers sequentially in order
    Sequential,
    /// Parallelize across years; days run sequentially within each year
    Year,
    /// Parallelize across year/day combinations; parts run sequentially (default)
    #[default]
    Day,
}

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers on local inputs", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}_day{day:02}.txt` inputs
    /// [default: $AOC_INPUT_DIR, then ./inputs]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, or day
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.year, None);
        assert_eq!(args.input_dir, None);
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert!(args.tags.is_empty());
        assert!(!args.quiet);
    }

    #[test]
    fn test_full_command_line() {
        let args = Args::try_parse_from([
            "aoc",
            "-y",
            "2021",
            "-d",
            "9",
            "-p",
            "2",
            "-t",
            "grid,bfs",
            "--input-dir",
            "/tmp/aoc",
            "--threads",
            "4",
            "--parallelize-by",
            "sequential",
            "-q",
        ])
        .unwrap();
        assert_eq!(args.year, Some(2021));
        assert_eq!(args.day, Some(9));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["grid", "bfs"]);
        assert_eq!(args.input_dir, Some(PathBuf::from("/tmp/aoc")));
        assert_eq!(args.threads, Some(4));
        assert_eq!(args.parallelize_by, ParallelizeBy::Sequential);
        assert!(args.quiet);
    }

    #[test]
    fn test_out_of_range_day_and_part() {
        assert!(Args::try_parse_from(["aoc", "-d", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "-p", "3"]).is_err());
    }
}
