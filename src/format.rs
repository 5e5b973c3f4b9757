//! Delegation to an external locale-aware formatter.
//!
//! Locale data is not part of this crate. Callers plug in any
//! [`LocaleFormatter`] (an ICU binding, a platform API, a test double); the only
//! contract enforced here is that it renders instants in UTC, since a
//! calendar date handed over as a UTC midnight would otherwise shift by a day
//! in zones west of Greenwich.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::consts::UTC;
use crate::prelude::*;
use crate::{CalendarDate, DateError};

/// Verbosity of a localized date, mirroring the common short/medium/long/full styles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    #[display(fmt = "short")]
    Short,
    #[default]
    #[display(fmt = "medium")]
    Medium,
    #[display(fmt = "long")]
    Long,
    #[display(fmt = "full")]
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    /// IANA time zone name; must be `"UTC"` to format a [`CalendarDate`].
    pub time_zone: String,
    pub date_style: DateStyle,
}

impl FormatOptions {
    pub fn utc(date_style: DateStyle) -> Self {
        Self {
            time_zone: UTC.to_owned(),
            date_style,
        }
    }

    /// Time zone identifiers are matched case-insensitively.
    pub fn is_utc(&self) -> bool {
        self.time_zone.eq_ignore_ascii_case(UTC)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::utc(DateStyle::default())
    }
}

/// A locale-aware formatter for instants.
pub trait LocaleFormatter {
    /// The options this formatter was configured with
    fn options(&self) -> &FormatOptions;

    /// Renders `instant` in the formatter's time zone and style.
    fn format_instant(&self, instant: SystemTime) -> String;
}

impl CalendarDate {
    /// Formats this date with a locale-aware formatter.
    ///
    /// # Errors
    /// Returns `DateError::FormatterNotUtc` if the formatter is not configured
    /// for UTC. Nothing is formatted in that case.
    pub fn format<F>(self, formatter: &F) -> Result<String, DateError>
    where
        F: LocaleFormatter + ?Sized,
    {
        let options = formatter.options();
        if !options.is_utc() {
            return Err(DateError::FormatterNotUtc(options.time_zone.clone()));
        }
        trace!("formatting {self} with {} date style", options.date_style);
        Ok(formatter.format_instant(self.to_system_time()))
    }
}
