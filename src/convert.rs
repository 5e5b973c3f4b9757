//! Conversions between [`CalendarDate`] and instants on the UTC time line.
//!
//! A calendar date maps to the instant of its midnight in UTC. Going the other
//! way, only instants that are exactly midnight UTC are accepted: truncating a
//! time of day would hide the very time zone mistakes this type exists to
//! prevent.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::consts::{MILLIS_PER_DAY, NANOS_PER_DAY, SECONDS_PER_DAY, UNIX_EPOCH_ORDINAL};
use crate::{CalendarDate, DateError};

impl CalendarDate {
    /// Milliseconds from 1970-01-01T00:00:00Z to this date's UTC midnight
    pub const fn to_epoch_ms(self) -> i64 {
        (self.0 - UNIX_EPOCH_ORDINAL) as i64 * MILLIS_PER_DAY
    }

    /// Seconds from 1970-01-01T00:00:00Z to this date's UTC midnight
    pub const fn to_epoch_seconds(self) -> i64 {
        (self.0 - UNIX_EPOCH_ORDINAL) as i64 * SECONDS_PER_DAY
    }

    /// # Errors
    /// Returns `DateError::NotUtcMidnight` unless `ms` is a whole number of days,
    /// or `DateError::OrdinalOutOfRange` if the day is not representable.
    pub fn from_epoch_ms(ms: i64) -> Result<Self, DateError> {
        if ms.rem_euclid(MILLIS_PER_DAY) != 0 {
            return Err(DateError::NotUtcMidnight(format!("{ms}ms since Unix epoch")));
        }
        Self::from_unix_days(ms.div_euclid(MILLIS_PER_DAY))
    }

    /// # Errors
    /// Same as [`Self::from_epoch_ms`], in seconds.
    pub fn from_epoch_seconds(seconds: i64) -> Result<Self, DateError> {
        if seconds.rem_euclid(SECONDS_PER_DAY) != 0 {
            return Err(DateError::NotUtcMidnight(format!("{seconds}s since Unix epoch")));
        }
        Self::from_unix_days(seconds.div_euclid(SECONDS_PER_DAY))
    }

    /// UTC midnight of this date as a `SystemTime`.
    pub fn to_system_time(self) -> SystemTime {
        let seconds = self.to_epoch_seconds();
        let offset = Duration::from_secs(seconds.unsigned_abs());
        if seconds >= 0 {
            UNIX_EPOCH + offset
        } else {
            UNIX_EPOCH - offset
        }
    }

    /// Today's date in the system's local time zone.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the clock reads a year outside 1..=9999.
    pub fn today() -> Result<Self, DateError> {
        let now = jiff::Zoned::now();
        trace!("reading current date from system clock: {now}");
        Self::try_from(now.date())
    }

    fn from_unix_days(days: i64) -> Result<Self, DateError> {
        Self::from_ordinal(days.saturating_add(i64::from(UNIX_EPOCH_ORDINAL)))
    }

    /// Day count for an instant `nanos` after the Unix epoch, if it is exactly midnight.
    fn unix_days_at_midnight(nanos: i128) -> Option<i64> {
        if nanos.rem_euclid(NANOS_PER_DAY) != 0 {
            return None;
        }
        let days = nanos.div_euclid(NANOS_PER_DAY);
        Some(i64::try_from(days).unwrap_or(if days < 0 { i64::MIN } else { i64::MAX }))
    }
}

impl From<CalendarDate> for SystemTime {
    fn from(date: CalendarDate) -> Self {
        date.to_system_time()
    }
}

impl TryFrom<SystemTime> for CalendarDate {
    type Error = DateError;

    fn try_from(time: SystemTime) -> Result<Self, Self::Error> {
        let nanos = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => i128::try_from(after.as_nanos()).unwrap_or(i128::MAX),
            Err(before) => i128::try_from(before.duration().as_nanos()).map_or(i128::MIN, |n| -n),
        };
        let days = Self::unix_days_at_midnight(nanos)
            .ok_or_else(|| DateError::NotUtcMidnight(format!("{nanos}ns since Unix epoch")))?;
        Self::from_unix_days(days)
    }
}

impl TryFrom<jiff::Timestamp> for CalendarDate {
    type Error = DateError;

    fn try_from(timestamp: jiff::Timestamp) -> Result<Self, Self::Error> {
        let days = Self::unix_days_at_midnight(timestamp.as_nanosecond())
            .ok_or_else(|| DateError::NotUtcMidnight(timestamp.to_string()))?;
        Self::from_unix_days(days)
    }
}

impl TryFrom<jiff::civil::Date> for CalendarDate {
    type Error = DateError;

    fn try_from(date: jiff::civil::Date) -> Result<Self, Self::Error> {
        // jiff keeps month in 1..=12 and day in 1..=31
        #[allow(clippy::cast_sign_loss)]
        let (month, day) = (date.month() as u8, date.day() as u8);
        Self::new(i32::from(date.year()), month, day)
    }
}

impl From<CalendarDate> for jiff::civil::Date {
    fn from(date: CalendarDate) -> Self {
        let (year, month, day) = date.to_ymd();
        // 1..=9999 and 1..=31 fit jiff's signed components
        #[allow(clippy::cast_possible_wrap)]
        let (year, month, day) = (year as i16, month as i8, day as i8);
        jiff::civil::date(year, month, day)
    }
}
