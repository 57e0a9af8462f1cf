use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

/// The Treachery of Whales: cheapest horizontal position to align the crabs on.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 7, tags = ["2021", "optimization"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let positions = input
            .trim()
            .split(',')
            .enumerate()
            .map(|(idx, field)| {
                field
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| anyhow!("(crab {}) {}", idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(positions.into_iter().sorted_unstable().collect())
    }
}

fn cheapest(positions: &[i64], cost: impl Fn(i64) -> i64) -> Option<i64> {
    let (&low, &high) = (positions.first()?, positions.last()?);
    (low..=high)
        .map(|target| positions.iter().map(|&p| cost((p - target).abs())).sum::<i64>())
        .min()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Positions are sorted, so the median is in the middle
        let median = *shared
            .get(shared.len() / 2)
            .ok_or_else(|| SolveError::failed("no crabs"))?;
        let fuel: i64 = shared.iter().map(|&p| (p - median).abs()).sum();
        Ok(fuel.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        cheapest(shared, |distance| distance * (distance + 1) / 2)
            .map(|fuel| fuel.to_string())
            .ok_or_else(|| SolveError::failed("no crabs"))
    }
}
