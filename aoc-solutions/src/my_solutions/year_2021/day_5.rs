use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::grid::Tile;

/// Hydrothermal Venture: count points covered by at least two vent lines.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 5, tags = ["2021", "grid"])]
pub struct Solver;

static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+),(\d+)\s*->\s*(\d+),(\d+)$").expect("segment pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    from: Tile,
    to: Tile,
}

impl Segment {
    fn is_diagonal(&self) -> bool {
        self.from.x != self.to.x && self.from.y != self.to.y
    }

    /// Tiles from `from` to `to` inclusive. Only horizontal, vertical and
    /// 45 degree segments are walkable.
    fn tiles(&self) -> Option<impl Iterator<Item = Tile> + use<>> {
        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;
        if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
            return None;
        }
        let (step_x, step_y) = (dx.signum(), dy.signum());
        let from = self.from;
        Some((0..=dx.abs().max(dy.abs())).map(move |i| from.translate(step_x * i, step_y * i)))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Segment>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_segment(line.trim()).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_segment(line: &str) -> anyhow::Result<Segment> {
    let captures = SEGMENT
        .captures(line)
        .ok_or_else(|| anyhow!("expected 'x1,y1 -> x2,y2'"))?;
    let coord = |i: usize| -> anyhow::Result<i32> { Ok(captures[i].parse()?) };
    let segment = Segment {
        from: Tile::new(coord(1)?, coord(2)?),
        to: Tile::new(coord(3)?, coord(4)?),
    };
    segment
        .tiles()
        .map(|_| segment)
        .ok_or_else(|| anyhow!("segment is neither straight nor diagonal"))
}

fn count_overlaps<'s>(segments: impl Iterator<Item = &'s Segment>) -> usize {
    let mut covered: HashMap<Tile, u32> = HashMap::new();
    for tile in segments.filter_map(Segment::tiles).flatten() {
        *covered.entry(tile).or_default() += 1;
    }
    covered.values().filter(|&&count| count >= 2).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared.iter().filter(|segment| !segment.is_diagonal())).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared.iter()).to_string())
    }
}
