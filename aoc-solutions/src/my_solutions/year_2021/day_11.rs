use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Connectivity, GridError, GridSize};

/// Dumbo Octopus: cascading flashes on an 8-connected energy grid.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 11, tags = ["2021", "grid", "simulation"])]
pub struct Solver;

const FLASH_ABOVE: u8 = 9;
const STEP_LIMIT: usize = 100_000;

#[derive(Debug, Clone)]
pub struct Cavern {
    size: GridSize,
    energy: Vec<u8>,
}

impl Cavern {
    /// Advance one step and return how many octopuses flashed.
    fn step(&mut self) -> Result<usize, GridError> {
        let mut pending: Vec<usize> = Vec::new();
        for (index, level) in self.energy.iter_mut().enumerate() {
            *level += 1;
            if *level > FLASH_ABOVE {
                pending.push(index);
            }
        }

        let mut flashed = vec![false; self.energy.len()];
        while let Some(index) = pending.pop() {
            if flashed[index] {
                continue;
            }
            flashed[index] = true;
            for neighbor in self.size.neighbor_indices(index, Connectivity::WithDiagonals)? {
                self.energy[neighbor] += 1;
                if self.energy[neighbor] > FLASH_ABOVE && !flashed[neighbor] {
                    pending.push(neighbor);
                }
            }
        }

        for (level, &did_flash) in self.energy.iter_mut().zip(&flashed) {
            if did_flash {
                *level = 0;
            }
        }
        Ok(flashed.into_iter().filter(|&f| f).count())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Cavern;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_cavern(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_cavern(input: &str) -> anyhow::Result<Cavern> {
    let rows: Vec<&str> = input.trim().lines().map(str::trim).collect();
    let width = rows.first().map_or(0, |row| row.len());
    let mut energy = Vec::with_capacity(width * rows.len());
    for (line_idx, row) in rows.iter().enumerate() {
        if row.len() != width {
            bail!("(line {}) expected {} columns, got {}", line_idx + 1, width, row.len());
        }
        for c in row.chars() {
            let level = c
                .to_digit(10)
                .ok_or_else(|| anyhow!("(line {}) invalid energy level '{}'", line_idx + 1, c))?;
            energy.push(level as u8);
        }
    }
    let size = GridSize::new(width, rows.len())?;
    Ok(Cavern { size, energy })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut cavern = shared.clone();
        let mut total = 0;
        for _ in 0..100 {
            total += cavern.step().map_err(SolveError::failed)?;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut cavern = shared.clone();
        for step in 1..=STEP_LIMIT {
            if cavern.step().map_err(SolveError::failed)? == cavern.energy.len() {
                return Ok(step.to_string());
            }
        }
        Err(SolveError::failed(format!(
            "no synchronized flash within {STEP_LIMIT} steps"
        )))
    }
}
