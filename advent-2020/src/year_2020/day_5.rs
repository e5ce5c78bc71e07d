//! Day 5: Binary Boarding
//!
//! A boarding pass is a 10-bit number: `F`/`L` are zero bits and `B`/`R` are
//! one bits, so the seat id `row * 8 + column` is the pass read in binary.

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};

#[derive(RegisterPuzzle)]
#[puzzle(day = 5, tags = ["binary"])]
pub struct Solver;

const ROW_CHARS: usize = 7;
const COLUMN_CHARS: usize = 3;

fn seat_id(pass: &str) -> Result<u16, String> {
    if pass.len() != ROW_CHARS + COLUMN_CHARS {
        return Err(format!(
            "boarding pass must have {} characters, got {:?}",
            ROW_CHARS + COLUMN_CHARS,
            pass
        ));
    }

    pass.bytes().enumerate().try_fold(0u16, |id, (idx, b)| {
        let bit = match (idx < ROW_CHARS, b) {
            (true, b'F') | (false, b'L') => 0,
            (true, b'B') | (false, b'R') => 1,
            _ => return Err(format!("unexpected {:?} at position {}", b as char, idx + 1)),
        };
        Ok(id << 1 | bit)
    })
}

/// The ids are sorted; my seat is the first hole in the run
fn find_my_seat(sorted_ids: &[u16]) -> Option<u16> {
    let last_before_gap = sorted_ids
        .windows(2)
        .find(|pair| pair[1] - pair[0] != 1)
        .map_or(sorted_ids.last().copied(), |pair| Some(pair[0]))?;
    Some(last_before_gap + 1)
}

impl Puzzle for Solver {
    /// Seat ids in ascending order
    type Parsed<'a> = Vec<u16>;
    const LAST_PART: Part = Part::Two;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let mut ids = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                seat_id(line.trim()).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if ids.is_empty() {
            return Err(ParseError::MissingData("no boarding passes".to_string()));
        }
        ids.sort_unstable();
        Ok(ids)
    }

    fn part_one(seat_ids: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        seat_ids
            .last()
            .map(u16::to_string)
            .ok_or_else(|| SolveError::failed("no boarding passes"))
    }

    fn part_two(seat_ids: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        find_my_seat(seat_ids)
            .map(|id| id.to_string())
            .ok_or_else(|| SolveError::failed("no boarding passes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Narrow the seat range half by half, one character at a time
    fn decode_by_halving(code: &str, seats: u16) -> u16 {
        let (mut low, mut high) = (0, seats);
        for c in code.chars() {
            let mid = (low + high) / 2;
            match c {
                'F' | 'L' => high = mid,
                _ => low = mid,
            }
        }
        low
    }

    #[test]
    fn test_example_passes() {
        assert_eq!(seat_id("FBFBBFFRLR"), Ok(357));
        assert_eq!(seat_id("BFFFBBFRRR"), Ok(567));
        assert_eq!(seat_id("FFFBBBFRRR"), Ok(119));
        assert_eq!(seat_id("BBFFBBFRLL"), Ok(820));
    }

    #[test]
    fn test_highest_seat() {
        let mut parsed = Solver::parse("FBFBBFFRLR\nBBFFBBFRLL\nBFFFBBFRRR\n").unwrap();
        assert_eq!(Solver::part_one(&mut parsed).unwrap(), "820");
    }

    #[test]
    fn test_my_seat_is_the_gap() {
        assert_eq!(find_my_seat(&[3, 4, 5, 7, 8]), Some(6));
        assert_eq!(find_my_seat(&[3, 4, 5]), Some(6));
        assert_eq!(find_my_seat(&[]), None);
    }

    #[test]
    fn test_rejects_bad_pass() {
        assert!(seat_id("FBFBBFFRL").is_err());
        assert!(seat_id("FBFBBFRRLR").is_err());
        assert!(Solver::parse("").is_err());
    }

    proptest! {
        #[test]
        fn prop_binary_decoding_matches_halving(
            row in "[FB]{7}",
            column in "[LR]{3}",
        ) {
            let expected = decode_by_halving(&row, 128) * 8 + decode_by_halving(&column, 8);
            prop_assert_eq!(seat_id(&format!("{row}{column}")), Ok(expected));
        }
    }
}
