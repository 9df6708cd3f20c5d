//! Haab': the 365-day vague year.

use std::fmt;

use crate::glyphs::HAAB_MONTHS;

/// Length of the Haab' year in days.
pub const HAAB_DAYS: i64 = 365;

/// Position of the Long Count epoch within the Haab' year, counted backward.
///
/// Day zero of the Long Count falls on 8 K'umk'u, which is 17 days before
/// 0 Pop.
const EPOCH_OFFSET: i64 = 17;

/// A Haab' date: a day of the month (0..20, 0..5 in Wayeb') and a month glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Haab {
    day: u8,
    month: u8,
}

impl Haab {
    /// Returns the Haab' date for a day count since the Long Count epoch.
    pub fn from_days(days: i64) -> Self {
        let position = (days - EPOCH_OFFSET).rem_euclid(HAAB_DAYS);
        Self {
            day: (position % 20) as u8,
            month: (position / 20) as u8,
        }
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the 0-based month index (18 is Wayeb').
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the romanized month name.
    pub fn month_name(self) -> &'static str {
        HAAB_MONTHS[usize::from(self.month)]
    }

    /// Returns the 0-based position within the 365-day year.
    pub fn day_of_year(self) -> u16 {
        u16::from(self.month) * 20 + u16::from(self.day)
    }
}

impl fmt::Display for Haab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.month_name())
    }
}
