//! Output types for a conversion.

use serde::Serialize;

use crate::date::GregorianDate;
use crate::haab::Haab;
use crate::long_count::LongCount;
use crate::lord::LordOfNight;
use crate::tzolkin::Tzolkin;

/// Result of converting one Gregorian date.
///
/// All four derivations are computed from the same day number, so the fields
/// are always mutually consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MayaDate {
    date: GregorianDate,
    day_number: i64,
    long_count: LongCount,
    haab: Haab,
    tzolkin: Tzolkin,
    lord_of_night: LordOfNight,
}

impl MayaDate {
    /// Assembles every derivation for `day_number`.
    pub(crate) fn new(date: GregorianDate, day_number: i64) -> Self {
        Self {
            date,
            day_number,
            long_count: LongCount::from_days(day_number),
            haab: Haab::from_days(day_number),
            tzolkin: Tzolkin::from_days(day_number),
            lord_of_night: LordOfNight::from_days(day_number),
        }
    }

    /// Returns the input date.
    pub fn date(&self) -> GregorianDate {
        self.date
    }

    /// Returns the day number relative to the correlation epoch.
    pub fn julian_day_number(&self) -> i64 {
        self.day_number
    }

    /// Returns the Long Count.
    pub fn long_count(&self) -> LongCount {
        self.long_count
    }

    /// Returns the Haab' date.
    pub fn haab(&self) -> Haab {
        self.haab
    }

    /// Returns the Tzolk'in date.
    pub fn tzolkin(&self) -> Tzolkin {
        self.tzolkin
    }

    /// Returns the Lord of the Night.
    pub fn lord_of_night(&self) -> LordOfNight {
        self.lord_of_night
    }

    /// Renders every field as text for serialization.
    pub fn to_record(&self) -> ConversionRecord {
        ConversionRecord {
            date: self.date.to_string(),
            long_count: self.long_count.to_string(),
            pronounce: self.long_count.pronounce(),
            haab: self.haab.to_string(),
            tzolkin: self.tzolkin.to_string(),
            lord_of_night: self.lord_of_night.to_string(),
            julian_day_number: self.day_number,
        }
    }
}

/// Flat, string-typed view of a [`MayaDate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    pub date: String,
    pub long_count: String,
    pub pronounce: String,
    pub haab: String,
    pub tzolkin: String,
    pub lord_of_night: String,
    pub julian_day_number: i64,
}
