//! Day 17: Conway Cubes
//!
//! The pocket dimension is unbounded, so only active cubes are stored.

use std::collections::{HashMap, HashSet};

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};
use itertools::Itertools;
use tracing::debug;

#[derive(RegisterPuzzle)]
#[puzzle(day = 17, tags = ["simulation"])]
pub struct Solver;

const BOOT_CYCLES: usize = 6;

/// `(x, y)` of each active cube in the initial slice
pub type Slice = Vec<(i32, i32)>;

struct PocketDimension<const D: usize> {
    active: HashSet<[i32; D]>,
    /// Every offset to a neighbouring cube, excluding the zero offset
    offsets: Vec<[i32; D]>,
}

impl<const D: usize> PocketDimension<D> {
    fn from_slice(slice: &Slice) -> Self {
        let active = slice
            .iter()
            .map(|&(x, y)| {
                let mut cube = [0; D];
                cube[0] = x;
                cube[1] = y;
                cube
            })
            .collect();

        let offsets = (0..D)
            .map(|_| -1..=1)
            .multi_cartesian_product()
            .filter(|offset| offset.iter().any(|&d| d != 0))
            .map(|offset| {
                let mut array = [0; D];
                array.copy_from_slice(&offset);
                array
            })
            .collect();

        Self { active, offsets }
    }

    fn neighbours<'a>(&'a self, cube: &'a [i32; D]) -> impl Iterator<Item = [i32; D]> + 'a {
        self.offsets.iter().map(move |offset| {
            let mut neighbour = *cube;
            neighbour.iter_mut().zip(offset).for_each(|(c, d)| *c += d);
            neighbour
        })
    }

    /// Active cubes stay active with 2 or 3 active neighbours; inactive cubes
    /// turn active with exactly 3
    fn cycle(&mut self) {
        let mut active_neighbours: HashMap<[i32; D], usize> = HashMap::new();
        for cube in &self.active {
            for neighbour in self.neighbours(cube) {
                *active_neighbours.entry(neighbour).or_default() += 1;
            }
        }

        self.active = active_neighbours
            .into_iter()
            .filter(|(cube, count)| match count {
                3 => true,
                2 => self.active.contains(cube),
                _ => false,
            })
            .map(|(cube, _)| cube)
            .collect();
    }
}

fn boot<const D: usize>(slice: &Slice) -> usize {
    let mut dimension = PocketDimension::<D>::from_slice(slice);
    for cycle in 1..=BOOT_CYCLES {
        dimension.cycle();
        debug!(dimensions = D, cycle, active = dimension.active.len(), "boot cycle");
    }
    dimension.active.len()
}

impl Puzzle for Solver {
    type Parsed<'a> = Slice;
    const LAST_PART: Part = Part::Two;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let mut slice = Slice::new();
        for (y, line) in input.trim().lines().enumerate() {
            for (x, c) in line.trim().chars().enumerate() {
                match c {
                    '#' => slice.push((x as i32, y as i32)),
                    '.' => {}
                    other => {
                        return Err(ParseError::InvalidFormat(format!(
                            "(line {}) unexpected cube state {:?}",
                            y + 1,
                            other
                        )));
                    }
                }
            }
        }
        Ok(slice)
    }

    fn part_one(slice: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(boot::<3>(slice).to_string())
    }

    fn part_two(slice: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(boot::<4>(slice).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = ".#.\n..#\n###\n";

    #[test]
    fn test_three_dimensions() {
        let mut parsed = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::part_one(&mut parsed).unwrap(), "112");
    }

    #[test]
    fn test_four_dimensions() {
        let mut parsed = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::part_two(&mut parsed).unwrap(), "848");
    }

    #[test]
    fn test_first_cycle() {
        let slice = Solver::parse(EXAMPLE).unwrap();
        let mut dimension = PocketDimension::<3>::from_slice(&slice);
        assert_eq!(dimension.offsets.len(), 26);
        dimension.cycle();
        assert_eq!(dimension.active.len(), 11);
    }

    #[test]
    fn test_neighbour_offsets() {
        let dimension = PocketDimension::<4>::from_slice(&Slice::new());
        assert_eq!(dimension.offsets.len(), 80);
        assert!(!dimension.offsets.contains(&[0; 4]));
    }

    #[test]
    fn test_empty_slice_stays_empty() {
        let mut parsed = Solver::parse("...\n...\n").unwrap();
        assert_eq!(Solver::part_one(&mut parsed).unwrap(), "0");
        assert!(Solver::parse(".#?\n").is_err());
    }
}
