use crate::consts::{FEBRUARY, FEBRUARY_DAYS_LEAP, MARCH, MIN_DAY};
use crate::types::{days_in_month, is_leap_year};
use crate::{CalendarDate, DateError, checked_year, ordinal_of};

const MONTHS_PER_YEAR: i64 = 12;

impl CalendarDate {
    /// Shifts the date by `days`, which may be negative.
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if the result leaves 0001-01-01..=9999-12-31.
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        Self::from_ordinal(i64::from(self.0).saturating_add(days))
    }

    /// Shifts the date by whole months. The day is clamped to the end of the
    /// target month, so Jan 31 plus one month is the last day of February.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the target month leaves years 1..=9999.
    pub fn add_months(self, months: i64) -> Result<Self, DateError> {
        let (year, month, day) = self.to_ymd();
        let index = (i64::from(year) * MONTHS_PER_YEAR + i64::from(month - 1)).saturating_add(months);

        let new_year = checked_year(index.div_euclid(MONTHS_PER_YEAR))?;
        // rem_euclid(12) is in 0..12
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let new_month = index.rem_euclid(MONTHS_PER_YEAR) as u8 + 1;
        let new_day = day.min(days_in_month(new_year, new_month));

        Ok(Self(ordinal_of(new_year, new_month, new_day)))
    }

    /// Shifts the date by whole years. February 29 moved into a common year
    /// becomes March 1, unlike the clamping done by [`Self::add_months`].
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the target year leaves 1..=9999.
    pub fn add_years(self, years: i64) -> Result<Self, DateError> {
        let (year, month, day) = self.to_ymd();
        let new_year = checked_year(i64::from(year).saturating_add(years))?;

        if month == FEBRUARY && day == FEBRUARY_DAYS_LEAP && !is_leap_year(new_year) {
            return Ok(Self(ordinal_of(new_year, MARCH, MIN_DAY)));
        }
        Ok(Self(ordinal_of(new_year, month, day)))
    }

    /// Number of complete years elapsed from `earlier` to `self`, e.g. an age
    /// given a birth date. The anniversary itself counts as a completed year.
    /// Negative when `self` is before `earlier`.
    pub fn full_years_since(self, earlier: Self) -> i32 {
        if self < earlier {
            return -earlier.full_years_since(self);
        }
        let (year, month, day) = self.to_ymd();
        let (from_year, from_month, from_day) = earlier.to_ymd();

        let years = i32::from(year) - i32::from(from_year);
        if (month, day) < (from_month, from_day) {
            years - 1
        } else {
            years
        }
    }

    /// Signed number of days from `self` to `other`
    pub const fn days_until(self, other: Self) -> i32 {
        other.0 - self.0
    }

    pub const fn first_of_month(self) -> Self {
        let (year, month, _) = self.to_ymd();
        Self(ordinal_of(year, month, MIN_DAY))
    }

    pub const fn last_of_month(self) -> Self {
        let (year, month, _) = self.to_ymd();
        Self(ordinal_of(year, month, days_in_month(year, month)))
    }
}
