use std::str::FromStr;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Sonar Sweep: count depth increases, raw and over a sliding window of 3.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["2021", "sequence"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                u32::from_str(line.trim())
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(shared, 3).to_string())
    }
}

/// Window sums `a[i..i+w]` and `a[i+1..i+1+w]` share all but their ends, so
/// comparing the ends is enough.
fn count_increases(depths: &[u32], window: usize) -> usize {
    depths
        .iter()
        .zip(depths.iter().skip(window))
        .filter(|(earlier, later)| later > earlier)
        .count()
}

#[cfg(test)]
mod tests {
    use aoc_solver::SolverExt;

    use super::*;

    const SAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    #[test]
    fn test_sample() {
        let mut depths = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut depths, 1).unwrap(), "7");
        assert_eq!(Solver::solve_part_checked_range(&mut depths, 2).unwrap(), "5");
    }

    #[test]
    fn test_parse_reports_line() {
        let err = Solver::parse("1\n2\nthree\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("line 3")));
    }

    #[test]
    fn test_short_input() {
        assert_eq!(count_increases(&[5], 1), 0);
        assert_eq!(count_increases(&[1, 2, 3], 3), 0);
    }
}
