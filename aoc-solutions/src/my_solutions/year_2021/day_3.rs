use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Binary Diagnostic: derive power and life-support ratings from bit columns.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 3, tags = ["2021", "bits"])]
pub struct Solver;

#[derive(Debug)]
pub struct Report {
    width: u32,
    values: Vec<u32>,
}

impl Report {
    fn ones_at(values: &[u32], bit: u32) -> usize {
        values.iter().filter(|&&value| (value >> bit) & 1 == 1).count()
    }

    /// Keep filtering by the bit `keep_one(ones, zeros)` selects until one value is left.
    fn rating(&self, keep_one: impl Fn(usize, usize) -> bool) -> Option<u32> {
        let mut candidates = self.values.clone();
        for bit in (0..self.width).rev() {
            if candidates.len() <= 1 {
                break;
            }
            let ones = Self::ones_at(&candidates, bit);
            let wanted = u32::from(keep_one(ones, candidates.len() - ones));
            candidates.retain(|value| (value >> bit) & 1 == wanted);
        }
        match candidates.as_slice() {
            [single] => Some(*single),
            _ => None,
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Report;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_report(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_report(input: &str) -> anyhow::Result<Report> {
    let mut width = None;
    let mut values = Vec::new();
    for (line_idx, line) in input.trim().lines().enumerate() {
        let line = line.trim();
        let line_width = line.len();
        if line_width == 0 || line_width > 32 {
            bail!("(line {}) expected 1 to 32 bits, got {}", line_idx + 1, line_width);
        }
        match width {
            None => width = Some(line_width),
            Some(w) if w != line_width => {
                bail!("(line {}) expected {} bits, got {}", line_idx + 1, w, line_width)
            }
            Some(_) => {}
        }
        let value = u32::from_str_radix(line, 2)
            .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?;
        values.push(value);
    }
    let width = width.ok_or_else(|| anyhow!("empty report"))?;
    Ok(Report {
        width: width as u32,
        values,
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = shared.values.len();
        let gamma = (0..shared.width)
            .filter(|&bit| Report::ones_at(&shared.values, bit) * 2 > total)
            .fold(0u64, |acc, bit| acc | (1 << bit));
        let mask = (1u64 << shared.width) - 1;
        let epsilon = !gamma & mask;
        Ok((gamma * epsilon).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Ties keep 1 for oxygen and 0 for CO2
        let oxygen = shared
            .rating(|ones, zeros| ones >= zeros)
            .ok_or_else(|| SolveError::failed("no oxygen generator rating"))?;
        let co2 = shared
            .rating(|ones, zeros| ones < zeros)
            .ok_or_else(|| SolveError::failed("no CO2 scrubber rating"))?;
        Ok((u64::from(oxygen) * u64::from(co2)).to_string())
    }
}
