//! Day 3: Toboggan Trajectory

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};

#[derive(RegisterPuzzle)]
#[puzzle(day = 3, tags = ["grid"])]
pub struct Solver;

/// Rows of the map, `true` where there is a tree. The pattern repeats to the right.
pub struct TreeMap {
    rows: Vec<Vec<bool>>,
    width: usize,
}

const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

impl TreeMap {
    /// Trees hit going `right`, `down` per step from the top-left corner
    fn trees_on_slope(&self, right: usize, down: usize) -> usize {
        self.rows
            .iter()
            .step_by(down)
            .enumerate()
            .skip(1)
            .filter(|(step, row)| row[(step * right) % self.width])
            .count()
    }
}

impl Puzzle for Solver {
    type Parsed<'a> = TreeMap;
    const LAST_PART: Part = Part::Two;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let rows = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim()
                    .chars()
                    .map(|c| match c {
                        '#' => Ok(true),
                        '.' => Ok(false),
                        other => Err(ParseError::InvalidFormat(format!(
                            "(line {}) unexpected map character {:?}",
                            line_idx + 1,
                            other
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let width = rows
            .first()
            .map(Vec::len)
            .filter(|&width| width > 0)
            .ok_or_else(|| ParseError::MissingData("map is empty".to_string()))?;
        if let Some(idx) = rows.iter().position(|row| row.len() != width) {
            return Err(ParseError::InvalidFormat(format!(
                "(line {}) row width differs from first row ({})",
                idx + 1,
                width
            )));
        }

        Ok(TreeMap { rows, width })
    }

    fn part_one(map: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(map.trees_on_slope(3, 1).to_string())
    }

    fn part_two(map: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let product: u64 = SLOPES
            .iter()
            .map(|&(right, down)| map.trees_on_slope(right, down) as u64)
            .product();
        Ok(product.to_string())
    }
}
