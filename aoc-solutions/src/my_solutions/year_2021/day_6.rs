use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

/// Lanternfish: population after 80 and 256 days of exponential spawning.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 6, tags = ["2021", "dp"])]
pub struct Solver;

const RESET_TIMER: u32 = 6;
const NEWBORN_TIMER: u32 = 8;

/// Fish descended from one fish with timer `t` after `d` more days,
/// itself included.
struct Descendants;

impl DpProblem<(u32, u32), u64> for Descendants {
    fn deps(&self, &(timer, days): &(u32, u32)) -> Vec<(u32, u32)> {
        if days <= timer {
            vec![]
        } else {
            let left = days - timer - 1;
            vec![(RESET_TIMER, left), (NEWBORN_TIMER, left)]
        }
    }

    fn compute(&self, _index: &(u32, u32), deps: &[u64]) -> u64 {
        if deps.is_empty() { 1 } else { deps.iter().sum() }
    }
}

type DescendantCache = DpCache<(u32, u32), u64, HashMapBackend<(u32, u32), u64>, Descendants>;

pub struct School {
    timers: Vec<u32>,
    cache: DescendantCache,
}

impl School {
    fn population_after(&self, days: u32) -> u64 {
        self.timers
            .iter()
            .map(|&timer| self.cache.get(&(timer, days)))
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = School;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_timers(input)
            .map(|timers| School {
                timers,
                cache: DpCache::new(HashMapBackend::new(), Descendants),
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_timers(input: &str) -> anyhow::Result<Vec<u32>> {
    input
        .trim()
        .split(',')
        .enumerate()
        .map(|(idx, field)| {
            let timer: u32 = field
                .trim()
                .parse()
                .map_err(|e| anyhow!("(fish {}) {}", idx + 1, e))?;
            if timer > NEWBORN_TIMER {
                bail!("(fish {}) timer {} exceeds {}", idx + 1, timer, NEWBORN_TIMER);
            }
            Ok(timer)
        })
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.population_after(80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.population_after(256).to_string())
    }
}

#[cfg(test)]
mod tests {
    use aoc_solver::SolverExt;

    use super::*;

    const SAMPLE: &str = "3,4,3,1,2\n";

    #[test]
    fn test_sample() {
        let mut school = Solver::parse(SAMPLE).unwrap();
        assert_eq!(school.population_after(18), 26);
        assert_eq!(Solver::solve_part_checked_range(&mut school, 1).unwrap(), "5934");
        assert_eq!(
            Solver::solve_part_checked_range(&mut school, 2).unwrap(),
            "26984457539"
        );
    }

    #[test]
    fn test_single_fish_spawns_after_timer() {
        let cache = DpCache::new(HashMapBackend::new(), Descendants);
        assert_eq!(cache.get(&(0, 0)), 1);
        assert_eq!(cache.get(&(0, 1)), 2);
        assert_eq!(cache.get(&(3, 3)), 1);
        assert_eq!(cache.get(&(3, 4)), 2);
    }

    #[test]
    fn test_timer_out_of_range() {
        let Err(err) = Solver::parse("3,9") else {
            panic!("timer 9 should be rejected");
        };
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("fish 2")));
    }
}
