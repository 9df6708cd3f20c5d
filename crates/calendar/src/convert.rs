//! Gregorian to Maya conversion entry points.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::date::{GregorianDate, Validation};
use crate::error::CalendarError;
use crate::jdn::{Correlation, maya_day_number};
use crate::result::MayaDate;

/// Configuration for a conversion.
///
/// # Example
///
/// ```
/// use maya_calendar::{ConvertConfig, Correlation, Validation};
///
/// let config = ConvertConfig::new()
///     .with_correlation(Correlation::LOUNSBURY)
///     .with_validation(Validation::Strict);
///
/// assert_eq!(config.correlation(), Correlation::LOUNSBURY);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    correlation: Correlation,
    validation: Validation,
}

impl ConvertConfig {
    /// Creates a configuration with the GMT correlation and lenient validation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the correlation constant.
    pub fn with_correlation(mut self, correlation: Correlation) -> Self {
        self.correlation = correlation;
        self
    }

    /// Sets the validation mode.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Returns the correlation constant.
    pub fn correlation(&self) -> Correlation {
        self.correlation
    }

    /// Returns the validation mode.
    pub fn validation(&self) -> Validation {
        self.validation
    }
}

/// Stateless converter bound to a [`ConvertConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Creates a converter with the given configuration.
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Validates and converts a date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the date fails validation.
    pub fn convert(&self, day: i32, month: i32, year: i32) -> Result<MayaDate, CalendarError> {
        let date = GregorianDate::with_validation(day, month, year, self.config.validation)?;
        Ok(self.convert_date(date))
    }

    /// Converts an already-validated date.
    pub fn convert_date(&self, date: GregorianDate) -> MayaDate {
        let day_number = maya_day_number(date, self.config.correlation);
        trace!(%date, day_number, "converted");
        MayaDate::new(date, day_number)
    }

    /// Converts many already-validated dates in parallel, preserving order.
    pub fn convert_dates(&self, dates: &[GregorianDate]) -> Vec<MayaDate> {
        let results: Vec<_> = dates.par_iter().map(|&d| self.convert_date(d)).collect();
        debug!(n_dates = dates.len(), "dates converted");
        results
    }

    /// Validates and converts many dates in parallel.
    ///
    /// Results are returned in input order, one per input; a failing date
    /// does not affect the others.
    pub fn convert_batch(&self, dates: &[(i32, i32, i32)]) -> Vec<Result<MayaDate, CalendarError>> {
        let results: Vec<_> = dates
            .par_iter()
            .map(|&(d, m, y)| self.convert(d, m, y))
            .collect();
        debug!(
            n_dates = dates.len(),
            n_failed = results.iter().filter(|r| r.is_err()).count(),
            "batch converted"
        );
        results
    }
}

/// Validates and converts a date with the given configuration.
///
/// # Errors
///
/// Returns [`CalendarError`] if the date fails validation.
pub fn convert(
    day: i32,
    month: i32,
    year: i32,
    config: &ConvertConfig,
) -> Result<MayaDate, CalendarError> {
    Converter::new(*config).convert(day, month, year)
}
