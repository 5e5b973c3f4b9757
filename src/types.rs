use crate::consts::{
    CENTURY_CYCLE, FEBRUARY, FEBRUARY_DAYS_COMMON, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Day of the week, numbered from Monday (0) to Sunday (6).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Maps a zero-based index (Monday = 0) to a weekday, wrapping modulo 7.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % 7) as usize]
    }

    /// Zero-based index, Monday = 0 through Sunday = 6
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

// Helper functions

/// Proleptic Gregorian leap rule, applied uniformly to every year.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// Outside February, months before August alternate 31/30 starting with
/// January, and the pattern flips from August on. That is exactly when the
/// low bit of the month equals bit 3.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY {
        if is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            FEBRUARY_DAYS_COMMON
        }
    } else if (month & 1) == (month >> 3) {
        30
    } else {
        31
    }
}
