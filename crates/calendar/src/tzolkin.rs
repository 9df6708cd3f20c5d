//! Tzolk'in: the 260-day count of 13 numerals and 20 named days.

use std::fmt;

use crate::glyphs::TZOLKIN_DAYS;

/// Length of the Tzolk'in cycle in days.
pub const TZOLKIN_DAYS_PER_CYCLE: i64 = 260;

/// A Tzolk'in date.
///
/// The numeral is held raw as `0..13`, where 0 stands for the traditional 13;
/// see [`Tzolkin::traditional_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tzolkin {
    number: u8,
    day: u8,
}

impl Tzolkin {
    /// Returns the Tzolk'in date for a day count since the Long Count epoch.
    ///
    /// The epoch itself is 4 Ajaw.
    pub fn from_days(days: i64) -> Self {
        Self {
            number: (days + 4).rem_euclid(13) as u8,
            day: (days + 19).rem_euclid(20) as u8,
        }
    }

    /// Returns the raw numeral (0..13).
    pub fn number(self) -> u8 {
        self.number
    }

    /// Returns the numeral in traditional 1..=13 notation.
    pub fn traditional_number(self) -> u8 {
        if self.number == 0 { 13 } else { self.number }
    }

    /// Returns the 0-based day-name index (Imix = 0).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the romanized day name.
    pub fn day_name(self) -> &'static str {
        TZOLKIN_DAYS[usize::from(self.day)]
    }
}

impl fmt::Display for Tzolkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.day_name())
    }
}
