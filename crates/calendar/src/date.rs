//! Gregorian input date and its validation.

use std::fmt;

use crate::error::CalendarError;

/// Earliest supported astronomical year (4801 BCE).
///
/// The day-number formula is valid from March 1 of this year onward.
pub const MIN_YEAR: i32 = -4800;

/// Latest supported astronomical year.
pub const MAX_YEAR: i32 = 4000;

/// How much of a Gregorian date is checked before conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Validation {
    /// Only the year window is checked; day and month pass through unchanged.
    #[default]
    Lenient,
    /// Month must be 1..=12 and day must fit the month (leap years included).
    Strict,
}

/// A proleptic Gregorian date with an astronomical (signed) year.
///
/// Fields are kept as plain integers: in [`Validation::Lenient`] mode the
/// day and month are not range-checked and flow into the day-number formula
/// as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianDate {
    day: i32,
    month: i32,
    year: i32,
}

impl PartialOrd for GregorianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl GregorianDate {
    /// Creates a date, checking only that the year is in the supported window.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if `year` is outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn new(day: i32, month: i32, year: i32) -> Result<Self, CalendarError> {
        Self::with_validation(day, month, year, Validation::Lenient)
    }

    /// Creates a date using the given validation mode.
    ///
    /// The year window is always enforced. [`Validation::Strict`] additionally
    /// rejects impossible months and days.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`], [`CalendarError::InvalidMonth`]
    /// or [`CalendarError::InvalidDay`].
    pub fn with_validation(
        day: i32,
        month: i32,
        year: i32,
        validation: Validation,
    ) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year });
        }
        if validation == Validation::Strict {
            if !(1..=12).contains(&month) {
                return Err(CalendarError::InvalidMonth { month });
            }
            let max_day = days_in_month(month, year);
            if !(1..=max_day).contains(&day) {
                return Err(CalendarError::InvalidDay {
                    day,
                    month,
                    year,
                    max_day,
                });
            }
        }
        Ok(Self { day, month, year })
    }

    /// Parses a date from raw text fields, as received by an adapter.
    ///
    /// `None` and blank strings count as missing. Every missing field is
    /// reported at once; missing fields take priority over parse failures,
    /// which take priority over range checks.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingField`], [`CalendarError::Parse`], or any
    /// error from [`GregorianDate::with_validation`].
    pub fn parse_fields(
        day: Option<&str>,
        month: Option<&str>,
        year: Option<&str>,
        validation: Validation,
    ) -> Result<Self, CalendarError> {
        let fields = [("day", day), ("month", month), ("year", year)];
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, v)| v.is_none_or(|s| s.trim().is_empty()))
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(CalendarError::MissingField {
                fields: missing.join(", "),
            });
        }

        let mut parsed = [0i32; 3];
        for (slot, (name, value)) in parsed.iter_mut().zip(fields) {
            let text = value.unwrap_or_default().trim();
            *slot = text.parse().map_err(|_| CalendarError::Parse {
                field: name,
                value: text.to_string(),
            })?;
        }
        let [d, m, y] = parsed;
        Self::with_validation(d, m, y, validation)
    }

    /// Returns the day of the month.
    pub fn day(self) -> i32 {
        self.day
    }

    /// Returns the month (1..=12 for validated input).
    pub fn month(self) -> i32 {
        self.month
    }

    /// Returns the astronomical year (1 BCE is year 0).
    pub fn year(self) -> i32 {
        self.year
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns the number of days in `month` of `year`, or 0 for a month outside 1..=12.
pub fn days_in_month(month: i32, year: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
