//! Julian Day Number computation and correlation to the Maya epoch.

use std::fmt;

use crate::date::GregorianDate;

/// JDN offset aligning the Long Count zero date (13.0.0.0.0 4 Ajaw 8 Kumk'u)
/// with the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Correlation(i64);

impl Correlation {
    /// Goodman-Martinez-Thompson correlation (JDN 584283, 11 August 3114 BCE).
    pub const GMT: Self = Self(584_283);

    /// Lounsbury's variant of the GMT correlation (JDN 584285).
    pub const LOUNSBURY: Self = Self(584_285);

    /// Creates a correlation from an arbitrary epoch JDN.
    pub const fn new(epoch_jdn: i64) -> Self {
        Self(epoch_jdn)
    }

    /// Returns the epoch JDN.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Default for Correlation {
    fn default() -> Self {
        Self::GMT
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the astronomical Julian Day Number of a Gregorian date.
///
/// Integer arithmetic with truncating division throughout; the order of
/// operations matters because of truncation. Valid from March 1, 4801 BCE.
pub fn julian_day_number(date: GregorianDate) -> i64 {
    let d = i64::from(date.day());
    let m = i64::from(date.month());
    let y = i64::from(date.year());

    let alpha = (14 - m) / 12;
    let yy = y + 4800 - alpha;
    let mm = m + 12 * alpha - 3;

    d + (153 * mm + 2) / 5 + 365 * yy + yy / 4 - yy / 100 + yy / 400 - 32045
}

/// Returns the number of days elapsed since the Long Count epoch.
///
/// This is the pivot value every Maya derivation is computed from. It is
/// negative for dates before the epoch.
pub fn maya_day_number(date: GregorianDate, correlation: Correlation) -> i64 {
    julian_day_number(date) - correlation.get()
}
