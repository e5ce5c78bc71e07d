//! Day 4: Passport Processing

use std::collections::HashMap;

use advent_solver::{ParseError, Part, Puzzle, RegisterPuzzle, SolveError};

#[derive(RegisterPuzzle)]
#[puzzle(day = 4, tags = ["parsing"])]
pub struct Solver;

/// `cid` is optional and therefore not listed
const REQUIRED_FIELDS: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

pub type Passport<'a> = HashMap<&'a str, &'a str>;

fn has_required_fields(passport: &Passport<'_>) -> bool {
    REQUIRED_FIELDS
        .iter()
        .all(|field| passport.contains_key(field))
}

impl Puzzle for Solver {
    type Parsed<'a> = Vec<Passport<'a>>;
    const LAST_PART: Part = Part::One;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        let mut passports = Vec::new();
        let mut current = Passport::new();

        for (line_idx, line) in input.trim().lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    passports.push(std::mem::take(&mut current));
                }
                continue;
            }

            for pair in line.split_whitespace() {
                let (key, value) = pair.split_once(':').ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "(line {}) expected key:value, got {:?}",
                        line_idx + 1,
                        pair
                    ))
                })?;
                current.insert(key, value);
            }
        }
        if !current.is_empty() {
            passports.push(current);
        }

        Ok(passports)
    }

    fn part_one(passports: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(passports
            .iter()
            .filter(|passport| has_required_fields(passport))
            .count()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in
";

    #[test]
    fn test_example() {
        let mut parsed = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(parsed.len(), 4);
        assert_eq!(Solver::part_one(&mut parsed).unwrap(), "2");
    }

    #[test]
    fn test_cid_is_optional() {
        let passport: Passport<'_> = REQUIRED_FIELDS.iter().map(|&f| (f, "x")).collect();
        assert!(has_required_fields(&passport));

        let mut missing_byr = passport.clone();
        missing_byr.remove("byr");
        assert!(!has_required_fields(&missing_byr));
    }

    #[test]
    fn test_multiple_blank_lines_between_records() {
        let parsed = Solver::parse("a:1\n\n\n\nb:2\n").unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_rejects_field_without_colon() {
        assert!(Solver::parse("byr:1937 iyr2017").is_err());
    }
}
