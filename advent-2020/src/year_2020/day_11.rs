//! Day 11: Seating System

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};
use tracing::debug;

#[derive(RegisterPuzzle)]
#[puzzle(day = 11, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Floor,
    Empty,
    Occupied,
}

/// Occupied neighbours at which a seated passenger leaves
const CROWDED: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLayout {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl SeatLayout {
    fn occupied_neighbours(&self, row: usize, col: usize) -> usize {
        let rows = row.saturating_sub(1)..=(row + 1).min(self.height - 1);
        rows.flat_map(|r| {
            let cols = col.saturating_sub(1)..=(col + 1).min(self.width - 1);
            cols.map(move |c| (r, c))
        })
        .filter(|&(r, c)| (r, c) != (row, col))
        .filter(|&(r, c)| self.cells[r * self.width + c] == Cell::Occupied)
        .count()
    }

    /// Applies one round of the seating rules, returning whether anything changed
    fn step(&mut self) -> bool {
        let next: Vec<Cell> = (0..self.cells.len())
            .map(|idx| {
                let (row, col) = (idx / self.width, idx % self.width);
                match self.cells[idx] {
                    Cell::Empty if self.occupied_neighbours(row, col) == 0 => Cell::Occupied,
                    Cell::Occupied if self.occupied_neighbours(row, col) >= CROWDED => Cell::Empty,
                    cell => cell,
                }
            })
            .collect();

        let changed = next != self.cells;
        self.cells = next;
        changed
    }

    fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Occupied).count()
    }
}

impl Puzzle for Solver {
    type Parsed<'a> = SeatLayout;
    const LAST_PART: Part = Part::One;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (line_idx, line) in input.trim().lines().enumerate() {
            let line = line.trim();
            if *width.get_or_insert(line.len()) != line.len() {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) row width differs from first row",
                    line_idx + 1
                )));
            }
            for c in line.chars() {
                cells.push(match c {
                    '.' => Cell::Floor,
                    'L' => Cell::Empty,
                    '#' => Cell::Occupied,
                    other => {
                        return Err(ParseError::InvalidFormat(format!(
                            "(line {}) unexpected seat {:?}",
                            line_idx + 1,
                            other
                        )));
                    }
                });
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(SeatLayout {
                cells,
                width,
                height,
            }),
            _ => Err(ParseError::MissingData("seat layout is empty".to_string())),
        }
    }

    fn part_one(initial: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        let mut layout = initial.clone();
        let mut round = 0;
        while layout.step() {
            round += 1;
            debug!(round, occupied = layout.occupied(), "seating round");
        }
        Ok(layout.occupied().to_string())
    }
}
