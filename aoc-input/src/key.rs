//! Puzzle identity and cache file naming

use crate::error::InputError;
use std::fmt;

/// First Advent of Code event
pub const FIRST_YEAR: u16 = 2015;

/// Last puzzle day of an event
pub const LAST_DAY: u8 = 25;

/// A validated (year, day) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleKey {
    year: u16,
    day: u8,
}

impl PuzzleKey {
    /// Validate and build a key
    ///
    /// # Errors
    ///
    /// `InputError::InvalidKey` if `year < 2015` or `day` is outside `1..=25`.
    pub fn new(year: u16, day: u8) -> Result<Self, InputError> {
        if year < FIRST_YEAR || !(1..=LAST_DAY).contains(&day) {
            return Err(InputError::InvalidKey { year, day });
        }
        Ok(Self { year, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Cache file name: `{year}-{day:02}.txt`
    pub fn file_name(&self) -> String {
        format!("{}-{:02}.txt", self.year, self.day)
    }
}

impl fmt::Display for PuzzleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/day{:02}", self.year, self.day)
    }
}
