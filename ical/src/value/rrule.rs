// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule values as defined in RFC 5545 Section 3.3.10.

use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;

use crate::value::to_utc;

/// Recurrence frequency
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[expect(missing_docs)]
pub enum RecurrenceFrequency {
    Yearly,
    Monthly,
    Weekly,
    Daily,
}

/// Recurrence rule of an event.
///
/// `until` and `count` are mutually exclusive; rendering a rule with both set
/// fails with [`FormatError::ConflictingRecurrence`](crate::FormatError::ConflictingRecurrence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    /// Frequency of the repetition
    pub freq: RecurrenceFrequency,
    /// Last instant of the repetition, already in UTC
    pub until: Option<Timestamp>,
    /// Number of occurrences
    pub count: Option<u32>,
    /// Number of frequency periods between occurrences
    pub interval: Option<u32>,
}

impl RecurrenceRule {
    /// Create a rule repeating forever at the given frequency.
    #[must_use]
    pub const fn new(freq: RecurrenceFrequency) -> Self {
        Self {
            freq,
            until: None,
            count: None,
            interval: None,
        }
    }

    /// Stop repeating after the given UTC instant.
    #[must_use]
    pub const fn until(mut self, until: Timestamp) -> Self {
        self.until = Some(until);
        self
    }

    /// Stop repeating after a wall clock date-time in `tz`.
    ///
    /// The value is converted to UTC here, as UNTIL is always written in UTC.
    ///
    /// # Errors
    ///
    /// Returns an error if the date-time cannot be represented in the zone.
    pub fn until_local(self, until: DateTime, tz: &TimeZone) -> Result<Self, jiff::Error> {
        Ok(self.until(to_utc(until, tz)?))
    }

    /// Stop repeating after `count` occurrences.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Repeat every `interval` periods.
    #[must_use]
    pub const fn interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Whether both terminators are set, which clients may reject.
    #[must_use]
    pub const fn is_conflicting(&self) -> bool {
        self.until.is_some() && self.count.is_some()
    }
}

impl From<RecurrenceFrequency> for RecurrenceRule {
    fn from(freq: RecurrenceFrequency) -> Self {
        Self::new(freq)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::datetime;

    use super::*;

    #[test]
    fn test_frequency_names() {
        assert_eq!(RecurrenceFrequency::Yearly.to_string(), "YEARLY");
        assert_eq!(RecurrenceFrequency::Monthly.to_string(), "MONTHLY");
        assert_eq!(RecurrenceFrequency::Weekly.to_string(), "WEEKLY");
        assert_eq!(RecurrenceFrequency::Daily.to_string(), "DAILY");

        assert_eq!(
            "daily".parse::<RecurrenceFrequency>().unwrap(),
            RecurrenceFrequency::Daily
        );
        assert!("HOURLY".parse::<RecurrenceFrequency>().is_err());
    }

    #[test]
    fn test_until_local_converts_to_utc() {
        let tz = TimeZone::get("America/New_York").unwrap();
        let rule = RecurrenceRule::new(RecurrenceFrequency::Daily)
            .until_local(datetime(2022, 11, 4, 0, 0, 0, 0), &tz)
            .unwrap();
        let expected: Timestamp = "2022-11-04T04:00:00Z".parse().unwrap();
        assert_eq!(rule.until, Some(expected));
        assert!(!rule.is_conflicting());
    }

    #[test]
    fn test_conflicting_terminators() {
        let rule = RecurrenceRule::new(RecurrenceFrequency::Weekly)
            .count(3)
            .until(Timestamp::UNIX_EPOCH);
        assert!(rule.is_conflicting());
    }
}
