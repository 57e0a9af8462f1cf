use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{
    Connectivity, GridError, GridSize, SquareGrid, Tile, try_breadth_first_search,
};

/// Smoke Basin: low points of a heightmap and the basins draining into them.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 9, tags = ["2021", "grid", "bfs"])]
pub struct Solver;

const RIDGE: u8 = 9;

#[derive(Debug)]
pub struct HeightMap {
    size: GridSize,
    heights: Vec<u8>,
}

impl HeightMap {
    fn height(&self, tile: Tile) -> Result<u8, GridError> {
        Ok(self.heights[self.size.index_of(tile)?])
    }

    fn low_points(&self) -> Result<Vec<Tile>, GridError> {
        let mut lows = Vec::new();
        for tile in self.size.tiles() {
            let height = self.height(tile)?;
            let neighbors = self.size.neighbors(tile, Connectivity::Orthogonal)?;
            if neighbors
                .into_iter()
                .map(|neighbor| self.height(neighbor))
                .process_results(|mut heights| heights.all(|other| other > height))?
            {
                lows.push(tile);
            }
        }
        Ok(lows)
    }

    /// Tiles connected to `low` without crossing a ridge.
    fn basin_size(&self, low: Tile) -> Result<usize, GridError> {
        let grid = SquareGrid::new(self.size, Connectivity::Orthogonal);
        let basin = try_breadth_first_search(&grid, low, None, |tile| {
            Ok::<_, GridError>(self.height(*tile)? < RIDGE)
        })?;
        Ok(basin.len())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = HeightMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_heights(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_heights(input: &str) -> anyhow::Result<HeightMap> {
    let rows: Vec<&str> = input.trim().lines().map(str::trim).collect();
    let width = rows.first().map_or(0, |row| row.len());
    let mut heights = Vec::with_capacity(width * rows.len());
    for (line_idx, row) in rows.iter().enumerate() {
        if row.len() != width {
            bail!("(line {}) expected {} columns, got {}", line_idx + 1, width, row.len());
        }
        for c in row.chars() {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| anyhow!("(line {}) invalid height '{}'", line_idx + 1, c))?;
            heights.push(digit as u8);
        }
    }
    let size = GridSize::new(width, rows.len())?;
    Ok(HeightMap { size, heights })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let risk = shared
            .low_points()
            .map_err(SolveError::failed)?
            .into_iter()
            .map(|tile| shared.height(tile).map(|h| u32::from(h) + 1))
            .sum::<Result<u32, _>>()
            .map_err(SolveError::failed)?;
        Ok(risk.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sizes = shared
            .low_points()
            .map_err(SolveError::failed)?
            .into_iter()
            .map(|low| shared.basin_size(low))
            .collect::<Result<Vec<_>, _>>()
            .map_err(SolveError::failed)?;
        if sizes.len() < 3 {
            return Err(SolveError::failed("fewer than three basins"));
        }
        let product: usize = sizes.into_iter().sorted_unstable().rev().take(3).product();
        Ok(product.to_string())
    }
}
