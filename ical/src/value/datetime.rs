// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date and date-time values as defined in RFC 5545 Sections 3.3.4 and 3.3.5.
//!
//! Times are always rendered with a literal `00` seconds field.

use std::fmt;

use jiff::Timestamp;
use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;

use crate::keyword::{KW_DATE, KW_TZID, KW_VALUE};
use crate::semantic::OutlookTimeZone;

/// Value of a `DTSTART` or `DTEND` property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOrDateTime {
    /// A whole day, rendered as `VALUE=DATE:YYYYMMDD`.
    Date(Date),

    /// A local date-time qualified by a zone identifier, rendered as
    /// `TZID=<tzid>:YYYYMMDDTHHMM00`.
    Zoned {
        /// Wall clock date-time in the zone
        date_time: DateTime,
        /// IANA or Outlook zone identifier, written verbatim
        tzid: String,
    },
}

impl DateOrDateTime {
    /// A local date-time in the given zone. The identifier is not validated.
    #[must_use]
    pub fn zoned(date_time: DateTime, tzid: impl Into<String>) -> Self {
        Self::Zoned {
            date_time,
            tzid: tzid.into(),
        }
    }

    /// A local date-time in one of the Outlook zones.
    ///
    /// The calendar must embed the matching VTIMEZONE block, see
    /// [`ICalendar::add_outlook_time_zone`](crate::ICalendar::add_outlook_time_zone).
    #[must_use]
    pub fn outlook(date_time: DateTime, tz: OutlookTimeZone) -> Self {
        Self::zoned(date_time, tz.tzid())
    }
}

impl From<Date> for DateOrDateTime {
    fn from(date: Date) -> Self {
        Self::Date(date)
    }
}

impl fmt::Display for DateOrDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => {
                write!(f, "{KW_VALUE}={KW_DATE}:")?;
                write_date_digits(f, *date)
            }
            Self::Zoned { date_time, tzid } => {
                write!(f, "{KW_TZID}={tzid}:")?;
                write_date_time_digits(f, *date_time)
            }
        }
    }
}

/// Format a date as `VALUE=DATE:YYYYMMDD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    DateOrDateTime::Date(date).to_string()
}

/// Format a local date-time as `TZID=<tzid>:YYYYMMDDTHHMM00`.
#[must_use]
pub fn format_local_date_time(date_time: DateTime, tzid: &str) -> String {
    format!("{KW_TZID}={tzid}:{}", Digits(date_time))
}

/// Format an instant as a UTC date-time, `YYYYMMDDTHHMM00Z`.
#[must_use]
pub fn format_utc(timestamp: Timestamp) -> String {
    let date_time = TimeZone::UTC.to_datetime(timestamp);
    format!("{}Z", Digits(date_time))
}

/// Convert a wall clock date-time in `tz` to an instant.
///
/// Gaps and folds around daylight saving transitions are resolved with the
/// "compatible" strategy: the earlier instant in a fold, the later one in a
/// gap.
///
/// # Errors
///
/// Returns an error if the date-time cannot be represented in the zone.
pub fn to_utc(date_time: DateTime, tz: &TimeZone) -> Result<Timestamp, jiff::Error> {
    Ok(date_time.to_zoned(tz.clone())?.timestamp())
}

/// Convert a wall clock date-time in `tz` to UTC and format it as
/// `YYYYMMDDTHHMM00Z`.
///
/// # Errors
///
/// Returns an error if the date-time cannot be represented in the zone.
pub fn convert_and_format_utc(date_time: DateTime, tz: &TimeZone) -> Result<String, jiff::Error> {
    to_utc(date_time, tz).map(format_utc)
}

/// `YYYYMMDDTHHMM00` for a date-time.
struct Digits(DateTime);

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date_time_digits(f, self.0)
    }
}

fn write_date_digits(f: &mut fmt::Formatter<'_>, date: Date) -> fmt::Result {
    write!(f, "{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

fn write_date_time_digits(f: &mut fmt::Formatter<'_>, date_time: DateTime) -> fmt::Result {
    write_date_digits(f, date_time.date())?;
    write!(f, "T{:02}{:02}00", date_time.hour(), date_time.minute())
}
