//! Error types for the maya-calendar crate.

use crate::date::{MAX_YEAR, MIN_YEAR};

/// Error type for all fallible operations in the maya-calendar crate.
///
/// Every variant is raised before any day-number arithmetic begins; once a
/// date has been accepted the conversion itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when one or more of day, month and year is absent or empty.
    #[error("missing required field(s): {fields} ('day', 'month', and 'year' are required)")]
    MissingField {
        /// Comma-separated names of the missing fields.
        fields: String,
    },

    /// Returned when a field cannot be parsed as an integer.
    #[error("could not parse {field} as an integer: {value:?}")]
    Parse {
        /// The name of the offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// Returned when the year lies outside the supported window.
    #[error("year {year} out of range (must be {}..={})", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
    },

    /// Returned in strict validation when the month is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i32,
    },

    /// Returned in strict validation when the day exceeds the month length.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: i32,
        /// The month for which the day is invalid.
        month: i32,
        /// The year, which decides February's length.
        year: i32,
        /// The maximum valid day for the given month.
        max_day: i32,
    },

    /// Returned when an explicit Long Count has a component outside its radix.
    #[error("invalid long count component {unit}: {value} (must be 0..{radix})")]
    InvalidLongCount {
        /// Name of the offending period.
        unit: &'static str,
        /// The value that was provided.
        value: u32,
        /// Exclusive upper bound for the period.
        radix: u32,
    },
}
