//! Lookup tables generated at compile time from month lengths.

use crate::consts::{JANUARY, MAX_MONTH};
use crate::types::days_in_month;

/// Representative years used to pick common or leap month lengths.
const COMMON_YEAR: u16 = 2001;
const LEAP_YEAR: u16 = 2000;

/// Days elapsed in a common year before the first of each month
/// (index 0 is unused, months are 1-indexed)
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] = build_days_before_month();

/// Zero-based day of year to month, `[common, leap]`. Entry 365 of the common
/// table is never read.
pub(crate) const MONTH_OF_DAY: [[u8; 366]; 2] =
    [build_month_of_day(COMMON_YEAR), build_month_of_day(LEAP_YEAR)];

const fn build_days_before_month() -> [u16; 13] {
    let mut table = [0u16; 13];
    let mut month = JANUARY + 1;
    while month <= MAX_MONTH {
        let idx = month as usize;
        table[idx] = table[idx - 1] + days_in_month(COMMON_YEAR, month - 1) as u16;
        month += 1;
    }
    table
}

/// Concatenates one run of `days_in_month` copies of each month number.
const fn build_month_of_day(year: u16) -> [u8; 366] {
    let mut table = [0u8; 366];
    let mut day = 0usize;
    let mut month = JANUARY;
    while month <= MAX_MONTH {
        let mut run = 0;
        while run < days_in_month(year, month) {
            table[day] = month;
            day += 1;
            run += 1;
        }
        month += 1;
    }
    table
}
