use advent_solver::{
    ParseError, Part, Puzzle, PuzzlePlugin, PuzzleRegistryBuilder, RegisterPuzzle, SolveError,
};

#[derive(RegisterPuzzle)]
#[puzzle(day = 24, tags = ["test", "lines"])]
pub struct LineCount;

impl Puzzle for LineCount {
    type Parsed<'a> = &'a str;
    const LAST_PART: Part = Part::One;

    fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        Ok(input)
    }

    fn part_one(text: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(text.lines().count().to_string())
    }
}

#[derive(RegisterPuzzle)]
#[puzzle(day = 25)]
pub struct Untagged;

impl Puzzle for Untagged {
    type Parsed<'a> = ();
    const LAST_PART: Part = Part::Two;

    fn parse(_input: &str) -> Result<Self::Parsed<'_>, ParseError> {
        Ok(())
    }

    fn part_one(_parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok("done".to_string())
    }

    fn part_two(_parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok("also done".to_string())
    }
}

#[test]
fn test_plugin_submitted_with_tags() {
    let plugin = advent_solver::inventory::iter::<PuzzlePlugin>()
        .find(|p| p.day == 24)
        .expect("day 24 plugin submitted");
    assert_eq!(plugin.tags, &["test", "lines"]);

    let untagged = advent_solver::inventory::iter::<PuzzlePlugin>()
        .find(|p| p.day == 25)
        .expect("day 25 plugin submitted");
    assert!(untagged.tags.is_empty());
}

#[test]
fn test_register_all_plugins() {
    let registry = PuzzleRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut puzzle = registry.parse(24, "a\nb\nc").unwrap();
    assert_eq!(puzzle.solve(Part::One).unwrap().value, "3");
    assert_eq!(registry.get(25).map(|info| info.last_part), Some(Part::Two));
}

#[test]
fn test_register_filtered_by_tag() {
    let registry = PuzzleRegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"lines"))
        .unwrap()
        .build();

    assert!(registry.get(24).is_some());
    assert!(registry.get(25).is_none());
}
