//! Day-indexed registry of puzzles

use crate::error::{ParseError, PuzzleError, RegistrationError};
use crate::parsed::{DynPuzzle, ParsedPuzzle};
use crate::puzzle::{Part, Puzzle};

/// Puzzle days per Advent of Code event
pub const DAYS: usize = 25;

/// Slot for a day, or None if the day is outside 1..=25
fn slot(day: u8) -> Option<usize> {
    (1..=DAYS as u8).contains(&day).then(|| usize::from(day - 1))
}

/// Parses a day's input into a boxed, ready-to-solve puzzle
pub type PuzzleFactory = for<'a> fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError>;

fn parse_boxed<P: Puzzle + 'static>(input: &str) -> Result<Box<dyn DynPuzzle + '_>, ParseError> {
    Ok(Box::new(ParsedPuzzle::<P>::new(input)?))
}

/// What the registry knows about a day without parsing anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayInfo {
    pub day: u8,
    pub last_part: Part,
}

impl DayInfo {
    pub fn parts(&self) -> impl Iterator<Item = Part> {
        Part::up_to(self.last_part)
    }
}

#[derive(Clone, Copy)]
struct Entry {
    factory: PuzzleFactory,
    last_part: Part,
}

/// Builder for a [`PuzzleRegistry`]
///
/// ```no_run
/// # use advent_solver::PuzzleRegistryBuilder;
/// // Only days tagged "grid"
/// let registry = PuzzleRegistryBuilder::new()
///     .register_plugins(|plugin| plugin.tags.contains(&"grid"))
///     .unwrap()
///     .build();
/// ```
pub struct PuzzleRegistryBuilder {
    entries: [Option<Entry>; DAYS],
}

impl PuzzleRegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: [None; DAYS],
        }
    }

    /// Register puzzle `P` for `day`. Each day takes one puzzle.
    pub fn register<P: Puzzle + 'static>(mut self, day: u8) -> Result<Self, RegistrationError> {
        let index = slot(day).ok_or(RegistrationError::InvalidDay(day))?;
        let entry = &mut self.entries[index];
        if entry.is_some() {
            return Err(RegistrationError::Duplicate(day));
        }
        *entry = Some(Entry {
            factory: parse_boxed::<P>,
            last_part: P::LAST_PART,
        });
        Ok(self)
    }

    /// Register every submitted [`PuzzlePlugin`] that `filter` accepts
    pub fn register_plugins<F>(self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&PuzzlePlugin) -> bool,
    {
        inventory::iter::<PuzzlePlugin>()
            .filter(|plugin| filter(plugin))
            .try_fold(self, |builder, plugin| (plugin.register)(builder, plugin.day))
    }

    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    pub fn build(self) -> PuzzleRegistry {
        PuzzleRegistry {
            entries: self.entries,
        }
    }
}

impl Default for PuzzleRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry, one optional puzzle per day
pub struct PuzzleRegistry {
    entries: [Option<Entry>; DAYS],
}

impl PuzzleRegistry {
    /// Registered days in ascending order
    pub fn days(&self) -> impl Iterator<Item = DayInfo> + '_ {
        self.entries.iter().zip(1u8..).filter_map(|(entry, day)| {
            entry.map(|e| DayInfo {
                day,
                last_part: e.last_part,
            })
        })
    }

    pub fn get(&self, day: u8) -> Option<DayInfo> {
        self.days().find(|info| info.day == day)
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse `input` with the puzzle registered for `day`
    pub fn parse<'a>(
        &self,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynPuzzle + 'a>, PuzzleError> {
        let index = slot(day).ok_or(PuzzleError::InvalidDay(day))?;
        let entry = self.entries[index].ok_or(PuzzleError::NotFound(day))?;
        Ok((entry.factory)(input)?)
    }
}

/// Registration record submitted through `inventory`, normally by
/// `#[derive(RegisterPuzzle)]`
pub struct PuzzlePlugin {
    pub day: u8,
    /// Tags for filtering (e.g. "grid", "simulation")
    pub tags: &'static [&'static str],
    /// Usually `PuzzleRegistryBuilder::register::<P>`
    pub register: fn(PuzzleRegistryBuilder, u8) -> Result<PuzzleRegistryBuilder, RegistrationError>,
}

inventory::collect!(PuzzlePlugin);
