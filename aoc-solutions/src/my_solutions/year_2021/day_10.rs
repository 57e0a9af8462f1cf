use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

/// Syntax Scoring: score corrupted and incomplete bracket lines.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 10, tags = ["2021", "stack"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineState {
    /// First closing bracket that does not match
    Corrupted(char),
    /// Closers needed to finish the line, innermost first
    Incomplete(Vec<char>),
}

fn closer_of(opener: char) -> Option<char> {
    match opener {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn check_line(line: &str) -> anyhow::Result<LineState> {
    let mut expected = Vec::new();
    for c in line.chars() {
        if let Some(closer) = closer_of(c) {
            expected.push(closer);
        } else if matches!(c, ')' | ']' | '}' | '>') {
            if expected.pop() != Some(c) {
                return Ok(LineState::Corrupted(c));
            }
        } else {
            return Err(anyhow!("unexpected character '{}'", c));
        }
    }
    expected.reverse();
    Ok(LineState::Incomplete(expected))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<LineState>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                check_line(line.trim()).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score: u64 = shared
            .iter()
            .filter_map(|state| match state {
                LineState::Corrupted(')') => Some(3),
                LineState::Corrupted(']') => Some(57),
                LineState::Corrupted('}') => Some(1197),
                LineState::Corrupted('>') => Some(25137),
                _ => None,
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let scores = shared
            .iter()
            .filter_map(|state| match state {
                LineState::Incomplete(closers) if !closers.is_empty() => Some(
                    closers
                        .iter()
                        .map(|c| match c {
                            ')' => 1,
                            ']' => 2,
                            '}' => 3,
                            _ => 4,
                        })
                        .fold(0u64, |total, points| total * 5 + points),
                ),
                _ => None,
            })
            .sorted_unstable()
            .collect_vec();
        scores
            .get(scores.len() / 2)
            .map(u64::to_string)
            .ok_or_else(|| SolveError::failed("no incomplete lines"))
    }
}
