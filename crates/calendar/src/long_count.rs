//! Long Count: mixed-radix day count from the Maya epoch.

use std::fmt;

use crate::error::CalendarError;

/// Days in one b'ak'tun (20 k'atun).
pub const DAYS_PER_BAKTUN: i64 = 144_000;
/// Days in one k'atun (20 tun).
pub const DAYS_PER_KATUN: i64 = 7_200;
/// Days in one tun (18 winal).
pub const DAYS_PER_TUN: i64 = 360;
/// Days in one winal (20 k'in).
pub const DAYS_PER_WINAL: i64 = 20;

/// A Long Count date `b'ak'tun.k'atun.tun.winal.k'in`.
///
/// The lower four periods always lie within their radices. The b'ak'tun is
/// unbounded and goes negative for dates before the epoch, so that
/// [`LongCount::days`] inverts [`LongCount::from_days`] for every day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LongCount {
    baktun: i64,
    katun: u8,
    tun: u8,
    winal: u8,
    kin: u8,
}

impl LongCount {
    /// Creates a Long Count from explicit period values.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidLongCount`] if k'atun or tun is not
    /// below 20, winal is not below 18, or k'in is not below 20.
    pub fn new(baktun: i64, katun: u8, tun: u8, winal: u8, kin: u8) -> Result<Self, CalendarError> {
        for (unit, value, radix) in [
            ("k'atun", katun, 20),
            ("tun", tun, 20),
            ("winal", winal, 18),
            ("k'in", kin, 20),
        ] {
            if value >= radix {
                return Err(CalendarError::InvalidLongCount {
                    unit,
                    value: u32::from(value),
                    radix: u32::from(radix),
                });
            }
        }
        Ok(Self {
            baktun,
            katun,
            tun,
            winal,
            kin,
        })
    }

    /// Decomposes a day count since the epoch into Long Count periods.
    pub fn from_days(days: i64) -> Self {
        let baktun = days.div_euclid(DAYS_PER_BAKTUN);
        let mut rem = days.rem_euclid(DAYS_PER_BAKTUN);

        let katun = rem / DAYS_PER_KATUN;
        rem %= DAYS_PER_KATUN;
        let tun = rem / DAYS_PER_TUN;
        rem %= DAYS_PER_TUN;
        let winal = rem / DAYS_PER_WINAL;
        let kin = rem % DAYS_PER_WINAL;

        // rem_euclid bounds every lower period by its radix, all well below u8::MAX.
        Self {
            baktun,
            katun: katun as u8,
            tun: tun as u8,
            winal: winal as u8,
            kin: kin as u8,
        }
    }

    /// Returns the number of days since the epoch this Long Count denotes.
    pub fn days(self) -> i64 {
        self.baktun * DAYS_PER_BAKTUN
            + i64::from(self.katun) * DAYS_PER_KATUN
            + i64::from(self.tun) * DAYS_PER_TUN
            + i64::from(self.winal) * DAYS_PER_WINAL
            + i64::from(self.kin)
    }

    /// Returns the b'ak'tun count.
    pub fn baktun(self) -> i64 {
        self.baktun
    }

    /// Returns the k'atun count (0..20).
    pub fn katun(self) -> u8 {
        self.katun
    }

    /// Returns the tun count (0..20).
    pub fn tun(self) -> u8 {
        self.tun
    }

    /// Returns the winal count (0..18).
    pub fn winal(self) -> u8 {
        self.winal
    }

    /// Returns the k'in count (0..20).
    pub fn kin(self) -> u8 {
        self.kin
    }

    /// Returns a spoken rendering, e.g. `"12 b'ak'tun 18 ka'tun 18 tun 9 uinal 6 k'in"`.
    pub fn pronounce(self) -> String {
        format!(
            "{} b'ak'tun {} ka'tun {} tun {} uinal {} k'in",
            self.baktun, self.katun, self.tun, self.winal, self.kin
        )
    }
}

impl fmt::Display for LongCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.baktun, self.katun, self.tun, self.winal, self.kin
        )
    }
}
