//! Lords of the Night: the nine-day glyph cycle G1..G9.

use std::fmt;

/// One of the nine Lords of the Night, labelled `G1`..`G9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LordOfNight(u8);

impl LordOfNight {
    /// Returns the Lord of the Night for a day count since the Long Count epoch.
    pub fn from_days(days: i64) -> Self {
        Self(days.rem_euclid(9) as u8 + 1)
    }

    /// Returns the glyph number (1..=9).
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for LordOfNight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}
