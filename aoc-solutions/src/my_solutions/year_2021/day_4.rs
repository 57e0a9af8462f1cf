use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{GridError, GridSize, Tile};

/// Giant Squid: play bingo against the squid, first and last winning board.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 4, tags = ["2021", "grid", "simulation"])]
pub struct Solver;

const SIDE: usize = 5;

#[derive(Debug, Clone)]
pub struct Board {
    size: GridSize,
    numbers: Vec<u32>,
    marked: Vec<bool>,
}

impl Board {
    fn new(numbers: Vec<u32>) -> anyhow::Result<Self> {
        let size = GridSize::new(SIDE, SIDE)?;
        if numbers.len() != size.len() {
            bail!("expected {} numbers, got {}", size.len(), numbers.len());
        }
        Ok(Self {
            size,
            marked: vec![false; numbers.len()],
            numbers,
        })
    }

    /// Mark `number`, returning whether its row or column is now complete.
    fn mark(&mut self, number: u32) -> Result<bool, GridError> {
        let Some(index) = self.numbers.iter().position(|&n| n == number) else {
            return Ok(false);
        };
        self.marked[index] = true;

        let tile = self.size.tile_at(index)?;
        let row_done = self.line_complete((0..SIDE as i32).map(|x| Tile::new(x, tile.y)))?;
        let column_done = self.line_complete((0..SIDE as i32).map(|y| Tile::new(tile.x, y)))?;
        Ok(row_done || column_done)
    }

    fn line_complete(&self, mut tiles: impl Iterator<Item = Tile>) -> Result<bool, GridError> {
        tiles.try_fold(true, |done, tile| {
            Ok(done && self.marked[self.size.index_of(tile)?])
        })
    }

    fn unmarked_sum(&self) -> u32 {
        self.numbers
            .iter()
            .zip(&self.marked)
            .filter(|&(_, marked)| !marked)
            .map(|(number, _)| number)
            .sum()
    }
}

#[derive(Debug)]
pub struct Game {
    draws: Vec<u32>,
    boards: Vec<Board>,
    scores: Option<Vec<u32>>,
}

impl Game {
    /// Scores in the order boards win. Computed once for both parts.
    fn winning_scores(&mut self) -> Result<&[u32], GridError> {
        if self.scores.is_none() {
            let mut boards = self.boards.clone();
            let mut done = vec![false; boards.len()];
            let mut scores = Vec::with_capacity(boards.len());
            for &draw in &self.draws {
                for (board, won) in boards.iter_mut().zip(done.iter_mut()) {
                    if !*won && board.mark(draw)? {
                        *won = true;
                        scores.push(board.unmarked_sum() * draw);
                    }
                }
            }
            self.scores = Some(scores);
        }
        Ok(self.scores.as_deref().unwrap_or_default())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Game;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_game(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_game(input: &str) -> anyhow::Result<Game> {
    let input = input.trim().replace("\r\n", "\n");
    let mut blocks = input.split("\n\n");
    let draws = blocks
        .next()
        .ok_or_else(|| anyhow!("missing draw line"))?
        .trim()
        .split(',')
        .map(|n| n.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| anyhow!("(draws) {}", e))?;

    let boards = blocks
        .enumerate()
        .map(|(board_idx, block)| {
            let numbers = block
                .split_whitespace()
                .map(str::parse::<u32>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| anyhow!("(board {}) {}", board_idx + 1, e))?;
            Board::new(numbers).map_err(|e| anyhow!("(board {}) {}", board_idx + 1, e))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if boards.is_empty() {
        bail!("no boards");
    }

    Ok(Game {
        draws,
        boards,
        scores: None,
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .winning_scores()
            .map_err(SolveError::failed)?
            .first()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::failed("no board wins"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .winning_scores()
            .map_err(SolveError::failed)?
            .last()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::failed("no board wins"))
    }
}

#[cfg(test)]
mod tests {
    use aoc_solver::SolverExt;

    use super::*;

    const SAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    #[test]
    fn test_sample() {
        let mut game = Solver::parse(SAMPLE).unwrap();
        assert_eq!(game.boards.len(), 3);
        assert_eq!(Solver::solve_part_checked_range(&mut game, 1).unwrap(), "4512");
        assert_eq!(Solver::solve_part_checked_range(&mut game, 2).unwrap(), "1924");
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new((0..25).collect()).unwrap();
        for number in [2, 7, 12, 17] {
            assert!(!board.mark(number).unwrap());
        }
        assert!(board.mark(22).unwrap());
        assert!(!board.mark(99).unwrap());
    }

    #[test]
    fn test_short_board_rejected() {
        let err = Solver::parse("1,2\n\n1 2 3\n4 5 6\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidFormat(msg) if msg == "(board 1) expected 25 numbers, got 6"
        ));
    }
}
