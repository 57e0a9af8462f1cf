use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Dive: steer the submarine with `forward`, `down` and `up` commands.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 2, tags = ["2021", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_command(line).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_command(line: &str) -> anyhow::Result<Command> {
    let (name, amount) = line
        .trim()
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<command> <amount>'"))?;
    let amount: i64 = amount.parse()?;
    Ok(match name {
        "forward" => Command::Forward(amount),
        "down" => Command::Down(amount),
        "up" => Command::Up(amount),
        other => bail!("unknown command '{other}'"),
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (horizontal, depth) =
            shared
                .iter()
                .fold((0, 0), |(horizontal, depth), command| match *command {
                    Command::Forward(n) => (horizontal + n, depth),
                    Command::Down(n) => (horizontal, depth + n),
                    Command::Up(n) => (horizontal, depth - n),
                });
        Ok((horizontal * depth).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (horizontal, depth, _) = shared.iter().fold(
            (0, 0, 0),
            |(horizontal, depth, aim), command| match *command {
                Command::Forward(n) => (horizontal + n, depth + aim * n, aim),
                Command::Down(n) => (horizontal, depth, aim + n),
                Command::Up(n) => (horizontal, depth, aim - n),
            },
        );
        Ok((horizontal * depth).to_string())
    }
}
