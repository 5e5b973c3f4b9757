#[macro_use]
mod logging;

mod arith;
mod consts;
mod convert;
mod format;
mod prelude;
mod range;
mod tables;
mod types;

pub use consts::*;
pub use format::{DateStyle, FormatOptions, LocaleFormatter};
pub use range::{DateRange, DateRangeIter, RangeError};
pub use types::{Weekday, days_in_month, is_leap_year};

use crate::consts::{
    BASIC_LEN, DAYS_PER_4_YEARS, DAYS_PER_CENTURY, EXTENDED_LEN, WEEKDAY_OFFSET,
};
use crate::prelude::*;
use crate::tables::{DAYS_BEFORE_MONTH, MONTH_OF_DAY};
use std::fmt;
use std::str::FromStr;

/// A calendar date in the proleptic Gregorian calendar, from 0001-01-01 to
/// 9999-12-31, independent of any time zone or time of day.
///
/// Internally this is a single day ordinal where day 0 is January 1 of year 0
/// (1 BCE). Equality and ordering are those of the ordinal, so earlier dates
/// compare smaller. Every accessor is a pure function of that ordinal and every
/// arithmetic operation returns a new value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct CalendarDate(i32);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0:?} (expected YYYY-MM-DD or YYYYMMDD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid {field} field: {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[display(fmt = "Date {year:04}-{month:02}-{day:02} does not exist")]
    NonexistentDate { year: u16, month: u8, day: u8 },
}

impl std::error::Error for ParseError {}

/// Error type for constructing, converting and shifting dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Day ordinal outside 0001-01-01..=9999-12-31.
    #[error("Day ordinal {0} is out of range (366..=3652424)")]
    OrdinalOutOfRange(i64),

    #[error("Year {0} is out of range (1-9999)")]
    YearOutOfRange(i64),

    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day is zero or past the end of its month.
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An external instant carried a time of day other than 00:00:00 UTC.
    #[error("Instant {0} is not exactly midnight UTC")]
    NotUtcMidnight(String),

    /// A locale formatter was configured for a zone other than UTC.
    #[error("Formatter time zone must be \"UTC\", found {0:?}")]
    FormatterNotUtc(String),
}

impl CalendarDate {
    /// 0001-01-01
    pub const MIN: Self = Self(MIN_ORDINAL);
    /// 9999-12-31
    pub const MAX: Self = Self(MAX_ORDINAL);

    /// Creates a date from its year, month and day.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` if the triple is not a real date in 1..=9999.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        Self::from_parts(i64::from(year), month, day)
    }

    /// Creates a date from a raw day ordinal.
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` outside `MIN_ORDINAL..=MAX_ORDINAL`.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, DateError> {
        i32::try_from(ordinal)
            .ok()
            .filter(|o| (MIN_ORDINAL..=MAX_ORDINAL).contains(o))
            .map(Self)
            .ok_or(DateError::OrdinalOutOfRange(ordinal))
    }

    pub(crate) fn from_parts(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        let year = checked_year(year)?;
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self(ordinal_of(year, month, day)))
    }

    /// Returns the day ordinal (days since January 1 of year 0)
    #[inline]
    pub const fn ordinal(self) -> i32 {
        self.0
    }

    pub const fn year(self) -> u16 {
        year_of(self.0)
    }

    pub const fn month(self) -> u8 {
        let year = self.year();
        MONTH_OF_DAY[is_leap_year(year) as usize][(self.0 - jan1_ordinal(year)) as usize]
    }

    pub const fn day(self) -> u8 {
        let (_, _, day) = self.to_ymd();
        day
    }

    /// Decodes the ordinal into `(year, month, day)` in one pass.
    pub const fn to_ymd(self) -> (u16, u8, u8) {
        let year = year_of(self.0);
        let offset = (self.0 - jan1_ordinal(year)) as usize;
        let month = MONTH_OF_DAY[is_leap_year(year) as usize][offset];
        let day = self.0 - ordinal_of(year, month, MIN_DAY) + 1;
        (year, month, day as u8)
    }

    /// Zero-based day of the year (January 1 is 0)
    pub const fn day_of_year(self) -> u16 {
        (self.0 - jan1_ordinal(self.year())) as u16
    }

    /// Zero-based day of the week, Monday = 0 through Sunday = 6
    pub const fn day_of_week(self) -> u8 {
        ((self.0 + WEEKDAY_OFFSET) % 7) as u8
    }

    pub const fn weekday(self) -> Weekday {
        Weekday::from_index(self.day_of_week())
    }

    pub const fn is_leap_year(self) -> bool {
        is_leap_year(self.year())
    }

    pub const fn days_in_month(self) -> u8 {
        let (year, month, _) = self.to_ymd();
        days_in_month(year, month)
    }

    pub const fn is_before(self, other: Self) -> bool {
        self.0 < other.0
    }

    pub const fn is_after(self, other: Self) -> bool {
        self.0 > other.0
    }
}

// --- encoding kernel ---

pub(crate) fn checked_year(year: i64) -> Result<u16, DateError> {
    u16::try_from(year)
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or(DateError::YearOutOfRange(year))
}

/// Ordinal of January 1 of `year`: 365 days per year plus one leap day every
/// 4 years, minus every 100, plus every 400 (year 0 itself is leap).
const fn jan1_ordinal(year: u16) -> i32 {
    let y = year as i32;
    y * 365 + (y + 3) / 4 - (y + 99) / 100 + (y + 399) / 400
}

/// `year`, `month` and `day` must already be validated.
pub(crate) const fn ordinal_of(year: u16, month: u8, day: u8) -> i32 {
    let mut ordinal =
        jan1_ordinal(year) + DAYS_BEFORE_MONTH[month as usize] as i32 + day as i32 - 1;
    if month > FEBRUARY && is_leap_year(year) {
        ordinal += 1;
    }
    ordinal
}

/// Closed-form year of a valid ordinal: `(v + c - c/4) / 365.25` with `c` the
/// number of elapsed centuries, in integer form since `365.25 == 1461 / 4`.
const fn year_of(ordinal: i32) -> u16 {
    let centuries = ordinal / DAYS_PER_CENTURY;
    ((ordinal + centuries - centuries / 4) * 4 / DAYS_PER_4_YEARS) as u16
}

// --- parsing ---

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Accepts exactly `YYYY-MM-DD` or `YYYYMMDD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let (year, month, day) = match bytes.len() {
            EXTENDED_LEN => {
                let sep = DATE_SEPARATOR as u8;
                if bytes[4] != sep || bytes[7] != sep {
                    return Err(ParseError::InvalidFormat(s.to_owned()));
                }
                (&bytes[0..4], &bytes[5..7], &bytes[8..10])
            }
            BASIC_LEN => (&bytes[0..4], &bytes[4..6], &bytes[6..8]),
            _ => return Err(ParseError::InvalidFormat(s.to_owned())),
        };

        let year = Self::parse_digits("year", year)?;
        let month = Self::parse_digits("month", month)?;
        let day = Self::parse_digits("day", day)?;

        // Month and day fields are two digits wide, so they fit in a u8.
        #[allow(clippy::cast_possible_truncation)]
        let (month, day) = (month as u8, day as u8);
        Self::from_parts(i64::from(year), month, day)
            .map_err(|_| ParseError::NonexistentDate { year, month, day })
    }
}

impl CalendarDate {
    /// Parses a fixed-width field of ASCII digits. Signs and whitespace are rejected.
    fn parse_digits(field: &'static str, digits: &[u8]) -> Result<u16, ParseError> {
        digits.iter().try_fold(0u16, |acc, &b| {
            if b.is_ascii_digit() {
                Ok(acc * 10 + u16::from(b - b'0'))
            } else {
                Err(ParseError::InvalidField {
                    field,
                    value: String::from_utf8_lossy(digits).into_owned(),
                })
            }
        })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.to_ymd();
        write!(f, "{year:04}{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{day:02}")
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDate({self})")
    }
}

impl TryFrom<i32> for CalendarDate {
    type Error = DateError;

    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        Self::from_ordinal(i64::from(ordinal))
    }
}

impl TryFrom<i64> for CalendarDate {
    type Error = DateError;

    fn try_from(ordinal: i64) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}

impl TryFrom<(i32, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_range_endpoints() {
        assert_eq!(CalendarDate::new(1, 1, 1).unwrap().ordinal(), MIN_ORDINAL);
        assert_eq!(CalendarDate::new(9999, 12, 31).unwrap().ordinal(), MAX_ORDINAL);
        assert_eq!(CalendarDate::new(1970, 1, 1).unwrap().ordinal(), UNIX_EPOCH_ORDINAL);
        assert_eq!(CalendarDate::MIN.to_string(), "0001-01-01");
        assert_eq!(CalendarDate::MAX.to_string(), "9999-12-31");
    }

    #[test]
    fn test_from_ordinal_bounds() {
        assert!(CalendarDate::from_ordinal(366).is_ok());
        assert!(CalendarDate::from_ordinal(3_652_424).is_ok());
        assert!(matches!(
            CalendarDate::from_ordinal(365),
            Err(DateError::OrdinalOutOfRange(365))
        ));
        assert!(matches!(
            CalendarDate::from_ordinal(3_652_425),
            Err(DateError::OrdinalOutOfRange(3_652_425))
        ));
        assert!(CalendarDate::try_from(-1i32).is_err());
        assert!(CalendarDate::try_from(i64::MAX).is_err());
    }

    #[test]
    fn test_new_validation() {
        assert!(matches!(
            CalendarDate::new(0, 1, 1),
            Err(DateError::YearOutOfRange(0))
        ));
        assert!(matches!(
            CalendarDate::new(10000, 1, 1),
            Err(DateError::YearOutOfRange(10000))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 13, 1),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 0, 1),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 1, 0),
            Err(DateError::InvalidDay { day: 0, .. })
        ));
        assert!(matches!(
            CalendarDate::new(2023, 2, 29),
            Err(DateError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2024, 4, 31).is_err());
    }

    #[test]
    fn test_every_ordinal_round_trips() {
        for ordinal in MIN_ORDINAL..=MAX_ORDINAL {
            let d = CalendarDate(ordinal);
            let (year, month, day) = d.to_ymd();
            assert_eq!(
                CalendarDate::new(i32::from(year), month, day).map(CalendarDate::ordinal),
                Ok(ordinal),
                "Ordinal {ordinal} decoded to {year}-{month}-{day}"
            );
            assert_eq!(d.year(), year);
            assert_eq!(d.month(), month);
            assert_eq!(d.day(), day);
        }
    }

    #[test]
    fn test_decoding_matches_day_by_day_walk() {
        let (mut year, mut month, mut day) = (1u16, 1u8, 1u8);
        for ordinal in MIN_ORDINAL..=MAX_ORDINAL {
            assert_eq!(CalendarDate(ordinal).to_ymd(), (year, month, day));
            if day < days_in_month(year, month) {
                day += 1;
            } else if month < DECEMBER {
                month += 1;
                day = 1;
            } else {
                year += 1;
                month = 1;
                day = 1;
            }
        }
        assert_eq!((year, month, day), (10000, 1, 1));
    }

    #[test]
    fn test_year_boundaries_day_of_year() {
        for year in MIN_YEAR..=MAX_YEAR {
            let first = CalendarDate::new(i32::from(year), 1, 1).unwrap();
            let last = CalendarDate::new(i32::from(year), 12, 31).unwrap();
            let expected_last = if is_leap_year(year) { 365 } else { 364 };
            assert_eq!(first.day_of_year(), 0, "Year {year}");
            assert_eq!(last.day_of_year(), expected_last, "Year {year}");
            assert_eq!(first.year(), year);
            assert_eq!(last.year(), year);
        }
    }

    #[test]
    fn test_day_of_week() {
        // 1970-01-01 was a Thursday
        assert_eq!(date("1970-01-01").weekday(), Weekday::Thursday);
        assert_eq!(date("1970-01-01").day_of_week(), 3);
        // 2000-01-01 was a Saturday
        assert_eq!(date("2000-01-01").weekday(), Weekday::Saturday);
        // 2024-02-29 was a Thursday
        assert_eq!(date("2024-02-29").weekday(), Weekday::Thursday);
        // 0001-01-01 is a Monday in the proleptic calendar
        assert_eq!(CalendarDate::MIN.weekday(), Weekday::Monday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date("2023-03-01").day_of_year(), 59);
        assert_eq!(date("2024-03-01").day_of_year(), 60);
        assert_eq!(date("2024-12-31").day_of_year(), 365);
    }

    #[test]
    fn test_days_in_month_accessor() {
        assert_eq!(date("2024-02-10").days_in_month(), 29);
        assert_eq!(date("1900-02-10").days_in_month(), 28);
        assert!(date("2000-06-01").is_leap_year());
    }

    #[test]
    fn test_parse_extended() {
        let d = date("2023-08-15");
        assert_eq!(d.to_ymd(), (2023, 8, 15));
    }

    #[test]
    fn test_parse_basic() {
        let d = date("20230815");
        assert_eq!(d.to_ymd(), (2023, 8, 15));
        assert_eq!(d.to_string(), "2023-08-15");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for input in ["hello", "2016,01,01", "05/05/05", "2016-o1-o1", "", "2016-1-1"] {
            assert!(
                input.parse::<CalendarDate>().is_err(),
                "{input:?} should not parse"
            );
        }
        assert!(matches!(
            "2016,01,01".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2016-o1-o1".parse::<CalendarDate>(),
            Err(ParseError::InvalidField { field: "month", .. })
        ));
        assert!(matches!(
            "05/05/05".parse::<CalendarDate>(),
            Err(ParseError::InvalidField { field: "year", .. })
        ));
    }

    #[test]
    fn test_parse_rejects_signs_and_whitespace() {
        for input in ["+2016-01-01", "2016-01-+1", " 20160101", "2016010 ", "+0160101", "-0160101"] {
            assert!(
                input.parse::<CalendarDate>().is_err(),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_without_panicking() {
        assert!("20é6-01-0".parse::<CalendarDate>().is_err());
        assert!("2016-0é-1".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_parse_rejects_nonexistent_dates() {
        assert!(matches!(
            "2021-02-29".parse::<CalendarDate>(),
            Err(ParseError::NonexistentDate {
                year: 2021,
                month: 2,
                day: 29
            })
        ));
        assert!("0000-01-01".parse::<CalendarDate>().is_err());
        assert!("2021-13-01".parse::<CalendarDate>().is_err());
        assert!("20210100".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_string_round_trip_for_every_date() {
        for ordinal in MIN_ORDINAL..=MAX_ORDINAL {
            let d = CalendarDate(ordinal);
            let s = d.to_string();
            assert_eq!(s.len(), 10);
            assert_eq!(s.parse::<CalendarDate>(), Ok(d));
        }
    }

    #[test]
    fn test_ordering_agrees_with_ordinal() {
        let a = date("1999-12-31");
        let b = date("2000-01-01");
        assert!(a < b);
        assert!(a.is_before(b));
        assert!(b.is_after(a));
        assert!(!a.is_after(a));
        assert_eq!(a, date("19991231"));

        let mut dates = vec![date("2020-05-01"), date("0001-01-01"), date("2020-04-30")];
        dates.sort();
        let ordinals: Vec<i32> = dates.iter().copied().map(i32::from).collect();
        assert!(ordinals.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DateError::from(ParseError::InvalidFormat("hello".into())).to_string(),
            "Invalid date format: \"hello\" (expected YYYY-MM-DD or YYYYMMDD)"
        );
        assert_eq!(
            DateError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", date("2023-08-15")), "CalendarDate(2023-08-15)");
    }

    #[test]
    fn test_serde() {
        let d = date("2023-08-15");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2023-08-15\"");
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);

        let result: Result<CalendarDate, _> = serde_json::from_str("\"2023-02-30\"");
        assert!(result.is_err());
    }
}
