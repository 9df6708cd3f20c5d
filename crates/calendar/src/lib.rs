//! # maya-calendar
//!
//! Pure conversion from proleptic Gregorian dates to the Maya Long Count,
//! Haab', Tzolk'in and Lord of the Night.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(day, month, year)"] -->|"GregorianDate::with_validation()"| B["GregorianDate"]
//!     B -->|"maya_day_number()"| C["day number (i64)"]
//!     C -->|"LongCount::from_days()"| D["LongCount"]
//!     C -->|"Haab::from_days()"| E["Haab"]
//!     C -->|"Tzolkin::from_days()"| F["Tzolkin"]
//!     C -->|"LordOfNight::from_days()"| G["LordOfNight"]
//!     D & E & F & G --> H["MayaDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use maya_calendar::{ConvertConfig, convert};
//!
//! let maya = convert(21, 12, 2012, &ConvertConfig::default()).unwrap();
//! assert_eq!(maya.long_count().to_string(), "13.0.0.0.0");
//! assert_eq!(maya.tzolkin().to_string(), "4 Ajaw");
//! assert_eq!(maya.haab().to_string(), "3 K'ank'in");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian input date and validation |
//! | `jdn` | Julian Day Number and correlation constant |
//! | `long_count` | Long Count decomposition |
//! | `haab` | Haab' vague year |
//! | `tzolkin` | Tzolk'in 260-day count |
//! | `lord` | Lords of the Night |
//! | `glyphs` | Romanized glyph name tables |
//! | `result` | Conversion result and serializable record |
//! | `convert` | Conversion entry points and batch conversion |
//! | `error` | Error types |

mod convert;
mod date;
mod error;
mod glyphs;
mod haab;
mod jdn;
mod long_count;
mod lord;
mod result;
mod tzolkin;

pub use convert::{ConvertConfig, Converter, convert};
pub use date::{GregorianDate, MAX_YEAR, MIN_YEAR, Validation, days_in_month, is_leap_year};
pub use error::CalendarError;
pub use glyphs::{HAAB_MONTHS, TZOLKIN_DAYS};
pub use haab::{HAAB_DAYS, Haab};
pub use jdn::{Correlation, julian_day_number, maya_day_number};
pub use long_count::{DAYS_PER_BAKTUN, DAYS_PER_KATUN, DAYS_PER_TUN, DAYS_PER_WINAL, LongCount};
pub use lord::LordOfNight;
pub use result::{ConversionRecord, MayaDate};
pub use tzolkin::{TZOLKIN_DAYS_PER_CYCLE, Tzolkin};
