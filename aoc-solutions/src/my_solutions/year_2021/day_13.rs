use std::collections::HashSet;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{GridError, GridSize, Tile};

/// Transparent Origami: fold a dotted sheet and read the code.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 13, tags = ["2021", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    AlongX(i32),
    AlongY(i32),
}

impl Fold {
    /// Where `tile` lands after the fold. Dots more than one fold width past
    /// the line would land off the sheet and are dropped.
    fn apply(self, tile: Tile) -> Option<Tile> {
        let reflect = |coord: i32, line: i32| match coord {
            c if c <= line => Some(c),
            c if c <= 2 * line => Some(2 * line - c),
            _ => None,
        };
        match self {
            Fold::AlongX(line) => reflect(tile.x, line).map(|x| Tile::new(x, tile.y)),
            Fold::AlongY(line) => reflect(tile.y, line).map(|y| Tile::new(tile.x, y)),
        }
    }
}

#[derive(Debug)]
pub struct Manual {
    dots: HashSet<Tile>,
    folds: Vec<Fold>,
}

fn fold_all(dots: &HashSet<Tile>, fold: Fold) -> HashSet<Tile> {
    dots.iter().filter_map(|&tile| fold.apply(tile)).collect()
}

/// `#` for dots and `.` for gaps over the bounding box anchored at the origin.
fn render(dots: &HashSet<Tile>) -> Result<String, GridError> {
    let width = dots.iter().map(|tile| tile.x).max().unwrap_or(0) + 1;
    let height = dots.iter().map(|tile| tile.y).max().unwrap_or(0) + 1;
    let size = GridSize::new(width.max(0) as usize, height.max(0) as usize)?;
    let rows = size
        .tiles()
        .map(|tile| if dots.contains(&tile) { '#' } else { '.' })
        .chunks(size.width())
        .into_iter()
        .map(|row| row.collect::<String>())
        .join("\n");
    Ok(rows)
}

impl AocParser for Solver {
    type SharedData<'a> = Manual;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_manual(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_manual(input: &str) -> anyhow::Result<Manual> {
    let mut dots = HashSet::new();
    let mut folds = Vec::new();
    for (line_idx, line) in input.trim().lines().enumerate() {
        let line = line.trim();
        let context = |e: anyhow::Error| anyhow!("(line {}) {}", line_idx + 1, e);
        if line.is_empty() {
            continue;
        }
        if let Some(instruction) = line.strip_prefix("fold along ") {
            folds.push(parse_fold(instruction).map_err(context)?);
        } else {
            if !folds.is_empty() {
                return Err(context(anyhow!("dot listed after fold instructions")));
            }
            dots.insert(parse_dot(line).map_err(context)?);
        }
    }
    Ok(Manual { dots, folds })
}

fn parse_dot(line: &str) -> anyhow::Result<Tile> {
    let (x, y) = line
        .split_once(',')
        .ok_or_else(|| anyhow!("expected 'x,y'"))?;
    let tile = Tile::new(x.trim().parse()?, y.trim().parse()?);
    if tile.x < 0 || tile.y < 0 {
        bail!("dot {} has a negative coordinate", tile);
    }
    Ok(tile)
}

fn parse_fold(instruction: &str) -> anyhow::Result<Fold> {
    let (axis, line) = instruction
        .split_once('=')
        .ok_or_else(|| anyhow!("expected 'x=N' or 'y=N'"))?;
    let line: i32 = line.trim().parse()?;
    match axis.trim() {
        "x" => Ok(Fold::AlongX(line)),
        "y" => Ok(Fold::AlongY(line)),
        other => bail!("unknown fold axis '{}'", other),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let first = *shared
            .folds
            .first()
            .ok_or_else(|| SolveError::failed("no fold instructions"))?;
        Ok(fold_all(&shared.dots, first).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let folded = shared
            .folds
            .iter()
            .fold(shared.dots.clone(), |dots, &fold| fold_all(&dots, fold));
        render(&folded).map_err(SolveError::failed)
    }
}

#[cfg(test)]
mod tests {
    use aoc_solver::SolverExt;

    use super::*;

    const SAMPLE: &str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

    #[test]
    fn test_sample() {
        let mut manual = Solver::parse(SAMPLE).unwrap();
        assert_eq!(manual.dots.len(), 18);
        assert_eq!(manual.folds, vec![Fold::AlongY(7), Fold::AlongX(5)]);
        assert_eq!(Solver::solve_part_checked_range(&mut manual, 1).unwrap(), "17");
        assert_eq!(
            Solver::solve_part_checked_range(&mut manual, 2).unwrap(),
            "#####\n#...#\n#...#\n#...#\n#####"
        );
    }

    #[test]
    fn test_fold_reflects_only_far_side() {
        assert_eq!(Fold::AlongY(7).apply(Tile::new(0, 14)), Some(Tile::new(0, 0)));
        assert_eq!(Fold::AlongY(7).apply(Tile::new(3, 4)), Some(Tile::new(3, 4)));
        assert_eq!(Fold::AlongX(5).apply(Tile::new(9, 0)), Some(Tile::new(1, 0)));
    }

    #[test]
    fn test_dots_past_double_line_are_dropped() {
        assert_eq!(Fold::AlongX(2).apply(Tile::new(5, 1)), None);

        let mut manual = Solver::parse("0,0\n5,1\n\nfold along x=2\n").unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut manual, 1).unwrap(), "1");
        assert_eq!(Solver::solve_part_checked_range(&mut manual, 2).unwrap(), "#");
    }

    #[test]
    fn test_render_single_dot() {
        let dots = HashSet::from([Tile::new(2, 1)]);
        assert_eq!(render(&dots).unwrap(), "...\n..#");
    }

    #[test]
    fn test_bad_fold_axis() {
        let err = Solver::parse("1,1\n\nfold along z=3\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("line 3")));
    }
}
