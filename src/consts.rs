/// Smallest valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in February for common years
pub const FEBRUARY_DAYS_COMMON: u8 = 28;

/// Ordinal of 0001-01-01. Day 0 is January 1 of year 0 (1 BCE).
pub const MIN_ORDINAL: i32 = 366;
/// Ordinal of 9999-12-31
pub const MAX_ORDINAL: i32 = 3_652_424;

/// Ordinal of 1970-01-01
pub const UNIX_EPOCH_ORDINAL: i32 = 719_528;

/// `(ordinal + WEEKDAY_OFFSET) % 7` is 0 on Mondays
pub(crate) const WEEKDAY_OFFSET: i32 = 5;

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const MILLIS_PER_DAY: i64 = SECONDS_PER_DAY * 1_000;
pub(crate) const NANOS_PER_DAY: i128 = MILLIS_PER_DAY as i128 * 1_000_000;

/// Days in a 100-year span that contains 25 leap years
pub(crate) const DAYS_PER_CENTURY: i32 = 36_525;
/// Four Julian years, so `365.25 == DAYS_PER_4_YEARS / 4`
pub(crate) const DAYS_PER_4_YEARS: i32 = 1_461;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 extended format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 time interval)
pub const RANGE_SEPARATOR: char = '/';

/// Length of `YYYY-MM-DD`
pub(crate) const EXTENDED_LEN: usize = 10;
/// Length of `YYYYMMDD`
pub(crate) const BASIC_LEN: usize = 8;

/// The only time zone a locale formatter may be configured with
pub const UTC: &str = "UTC";
