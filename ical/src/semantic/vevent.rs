// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event component (VEVENT) of an invitation.

use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;

use crate::value::{DateOrDateTime, RecurrenceRule, to_utc};

/// Event component (VEVENT)
///
/// `organizer`, `uid` and `dt_start` are required; rendering an event
/// without them fails with [`FormatError::MissingProperty`](crate::FormatError::MissingProperty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VEvent {
    /// Unique identifier for the event
    pub uid: Option<String>,

    /// Date/time the event description was created, in UTC
    pub dt_stamp: Timestamp,

    /// Date/time the event starts
    pub dt_start: Option<DateOrDateTime>,

    /// Date/time the event ends, exclusive for whole-day events
    pub dt_end: Option<DateOrDateTime>,

    /// Organizer of the event
    pub organizer: Option<CalendarUser>,

    /// Attendees of the event, in invitation order
    pub attendees: Vec<CalendarUser>,

    /// Date/time the event was created in the originating system, in UTC
    pub created: Option<Timestamp>,

    /// Sequence number for revisions
    pub sequence: Option<u32>,

    /// Status of the event
    pub status: Option<EventStatus>,

    /// Summary/title of the event
    pub summary: Option<String>,

    /// Description of the event
    pub description: Option<String>,

    /// Recurrence rule
    pub rrule: Option<RecurrenceRule>,

    /// Location of the event
    pub location: Option<Location>,
}

impl VEvent {
    /// Create an event stamped with the current time and status CONFIRMED.
    #[must_use]
    pub fn new() -> Self {
        Self {
            uid: None,
            dt_stamp: Timestamp::now(),
            dt_start: None,
            dt_end: None,
            organizer: None,
            attendees: Vec::new(),
            created: None,
            sequence: None,
            status: Some(EventStatus::Confirmed),
            summary: None,
            description: None,
            rrule: None,
            location: None,
        }
    }

    /// Set the globally unique identifier.
    #[must_use]
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Override the `DTSTAMP` instant.
    #[must_use]
    pub const fn dt_stamp(mut self, dt_stamp: Timestamp) -> Self {
        self.dt_stamp = dt_stamp;
        self
    }

    /// Set the start, either a date for a whole-day event or a zoned date-time.
    #[must_use]
    pub fn dt_start(mut self, dt_start: impl Into<DateOrDateTime>) -> Self {
        self.dt_start = Some(dt_start.into());
        self
    }

    /// Set the end. For whole-day events the date is exclusive: an event
    /// whose last day is Nov 2 ends on Nov 3.
    #[must_use]
    pub fn dt_end(mut self, dt_end: impl Into<DateOrDateTime>) -> Self {
        self.dt_end = Some(dt_end.into());
        self
    }

    /// Set the organizer.
    #[must_use]
    pub fn organizer(mut self, organizer: impl Into<CalendarUser>) -> Self {
        self.organizer = Some(organizer.into());
        self
    }

    /// Append an attendee.
    #[must_use]
    pub fn attendee(mut self, attendee: impl Into<CalendarUser>) -> Self {
        self.attendees.push(attendee.into());
        self
    }

    /// Set the creation instant.
    #[must_use]
    pub const fn created(mut self, created: Timestamp) -> Self {
        self.created = Some(created);
        self
    }

    /// Set the creation instant from a wall clock date-time in `tz`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date-time cannot be represented in the zone.
    pub fn created_local(self, created: DateTime, tz: &TimeZone) -> Result<Self, jiff::Error> {
        Ok(self.created(to_utc(created, tz)?))
    }

    /// Set the sequence number.
    #[must_use]
    pub const fn sequence(mut self, sequence: u32) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Set the status.
    #[must_use]
    pub const fn status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the summary.
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the recurrence rule.
    #[must_use]
    pub fn rrule(mut self, rrule: impl Into<RecurrenceRule>) -> Self {
        self.rrule = Some(rrule.into());
        self
    }

    /// Set the location.
    #[must_use]
    pub fn location(mut self, location: impl Into<Location>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl Default for VEvent {
    fn default() -> Self {
        Self::new()
    }
}

/// Status of an event
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum EventStatus {
    /// Indicates event is tentative.
    Tentative,

    /// Indicates event is definite.
    #[default]
    Confirmed,

    /// Indicates event was cancelled.
    Cancelled,
}

/// Organizer or attendee, addressed by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarUser {
    /// Common name, the email is shown when absent
    pub name: Option<String>,
    /// Email address, written as a `mailto:` URI
    pub email: String,
}

impl CalendarUser {
    /// A user known only by email.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
        }
    }

    /// A user with a display name.
    #[must_use]
    pub fn named(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
        }
    }

    /// The `CN` parameter value.
    #[must_use]
    pub fn common_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

impl From<&str> for CalendarUser {
    fn from(email: &str) -> Self {
        Self::new(email)
    }
}

impl From<String> for CalendarUser {
    fn from(email: String) -> Self {
        Self::new(email)
    }
}

/// Location of an event, optionally linked to a page describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Name of the location, for example an address
    pub name: String,
    /// Alternate representation, for example a map link
    pub url: Option<String>,
}

impl Location {
    /// A location without link.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    /// A location with a companion URL, written as the `ALTREP` parameter.
    #[must_use]
    pub fn with_url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
        }
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, datetime};

    use super::*;
    use crate::value::RecurrenceFrequency;

    #[test]
    fn test_new_event_defaults() {
        let before = Timestamp::now();
        let event = VEvent::new();
        let after = Timestamp::now();

        assert!(before <= event.dt_stamp && event.dt_stamp <= after);
        assert_eq!(event.status, Some(EventStatus::Confirmed));
        assert!(event.uid.is_none());
        assert!(event.organizer.is_none());
        assert!(event.dt_start.is_none());
        assert!(event.sequence.is_none());
        assert!(event.attendees.is_empty());
    }

    #[test]
    fn test_setters() {
        let event = VEvent::new()
            .uid("123@example.com")
            .organizer(CalendarUser::named("Bibi", "bibi@example.com"))
            .dt_start(date(2022, 11, 2))
            .dt_end(DateOrDateTime::zoned(
                datetime(2022, 11, 2, 11, 30, 0, 0),
                "America/New_York",
            ))
            .attendee("a@example.com")
            .attendee(CalendarUser::named("B", "b@example.com"))
            .rrule(RecurrenceFrequency::Weekly)
            .location("Room 1")
            .sequence(2)
            .status(EventStatus::Tentative);

        assert_eq!(event.uid.as_deref(), Some("123@example.com"));
        assert_eq!(event.dt_start, Some(DateOrDateTime::Date(date(2022, 11, 2))));
        assert_eq!(event.attendees.len(), 2);
        assert_eq!(event.attendees[0].common_name(), "a@example.com");
        assert_eq!(event.attendees[1].common_name(), "B");
        assert_eq!(
            event.rrule,
            Some(RecurrenceRule::new(RecurrenceFrequency::Weekly))
        );
        assert_eq!(event.location, Some(Location::new("Room 1")));
        assert_eq!(event.sequence, Some(2));
        assert_eq!(event.status, Some(EventStatus::Tentative));
    }

    #[test]
    fn test_created_local_is_utc() {
        let tz = TimeZone::get("Asia/Kolkata").unwrap();
        let event = VEvent::new()
            .created_local(datetime(2022, 11, 2, 5, 30, 0, 0), &tz)
            .unwrap();
        let expected: Timestamp = "2022-11-02T00:00:00Z".parse().unwrap();
        assert_eq!(event.created, Some(expected));
    }

    #[test]
    fn test_event_status_names() {
        assert_eq!(EventStatus::Tentative.to_string(), "TENTATIVE");
        assert_eq!(EventStatus::Confirmed.to_string(), "CONFIRMED");
        assert_eq!(EventStatus::Cancelled.to_string(), "CANCELLED");
        assert_eq!(
            "cancelled".parse::<EventStatus>().unwrap(),
            EventStatus::Cancelled
        );
    }
}
