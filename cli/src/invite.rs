// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Invitation documents: the TOML input of `invitecal render`.
//!
//! ```toml
//! method = "REQUEST"
//! time_zones = ["Europe/Paris"]
//!
//! [[events]]
//! uid = "20221102-1@example.com"
//! organizer = { name = "Bibi", email = "bibi@example.com" }
//! start = { date_time = "2022-11-02T09:30", tzid = "Europe/Paris" }
//! end = { date_time = "2022-11-02T11:30", tzid = "Europe/Paris" }
//! outlook = true
//! attendees = ["kaka@example.com", { name = "Mama", email = "mama@example.com" }]
//! location = { name = "HQ", url = "https://maps.example.com/hq" }
//! recurrence = { freq = "weekly", until = { date_time = "2022-12-31T00:00", tzid = "Europe/Paris" } }
//! ```

use std::{error::Error, str::FromStr};

use invitecal_ical::{
    CalendarUser, DateOrDateTime, EventStatus, ICalendar, Location, MethodType, OutlookTimeZone,
    RecurrenceFrequency, RecurrenceRule, VEvent, resolve_time_zone, to_utc,
};
use jiff::Timestamp;
use jiff::civil::{Date, DateTime};
use serde::Deserialize;

use crate::config::Config;

/// An invitation document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Invite {
    #[serde(default, deserialize_with = "parsed::optional")]
    pub method: Option<MethodType>,

    pub product_id: Option<String>,

    /// Outlook zones to embed, by Outlook TZID or IANA identifier
    #[serde(default)]
    pub time_zones: Vec<String>,

    #[serde(default)]
    pub events: Vec<EventEntry>,
}

impl Invite {
    /// Build the calendar. Settings of the document win over the
    /// configuration; every event is stamped with `now`.
    pub fn into_calendar(self, config: &Config, now: Timestamp) -> Result<ICalendar, Box<dyn Error>> {
        let method = self.method.or(config.method).unwrap_or_default();
        let mut calendar = ICalendar::new().method(method);
        if let Some(prod_id) = self.product_id.or_else(|| config.product_id.clone()) {
            calendar = calendar.prod_id(prod_id);
        }

        let mut zones = Vec::new();
        for tzid in &self.time_zones {
            push_unique(&mut zones, lookup_outlook(tzid)?);
        }

        for entry in self.events {
            let event = entry.into_event(now, &mut zones)?;
            calendar.add_event(event);
        }

        for tz in zones {
            calendar.add_outlook_time_zone(tz);
        }
        Ok(calendar)
    }
}

impl FromStr for Invite {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

/// An event of an invitation document.
///
/// UID, organizer and start are optional here so that their absence is
/// reported by the formatter, with the property name.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventEntry {
    pub uid: Option<String>,
    pub organizer: Option<UserEntry>,
    pub start: Option<DateEntry>,
    pub end: Option<DateEntry>,
    pub created: Option<InstantEntry>,
    pub sequence: Option<u32>,
    #[serde(default, deserialize_with = "parsed::optional")]
    pub status: Option<EventStatus>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub attendees: Vec<UserEntry>,
    pub location: Option<LocationEntry>,
    pub recurrence: Option<RecurrenceEntry>,

    /// Rewrite IANA TZIDs of start and end to Outlook ones
    #[serde(default)]
    pub outlook: bool,
}

impl EventEntry {
    fn into_event(
        self,
        now: Timestamp,
        zones: &mut Vec<OutlookTimeZone>,
    ) -> Result<VEvent, Box<dyn Error>> {
        let outlook = self.outlook;
        let mut event = VEvent::new().dt_stamp(now);

        event.uid = self.uid;
        event.organizer = self.organizer.map(Into::into);
        event.dt_start = match self.start {
            Some(start) => Some(start.into_value(outlook, zones)?),
            None => None,
        };
        event.dt_end = match self.end {
            Some(end) => Some(end.into_value(outlook, zones)?),
            None => None,
        };
        event.created = self.created.map(InstantEntry::into_utc).transpose()?;
        event.sequence = self.sequence;
        if let Some(status) = self.status {
            event.status = Some(status);
        }
        event.summary = self.summary;
        event.description = self.description;
        event.attendees = self.attendees.into_iter().map(Into::into).collect();
        event.location = self.location.map(Into::into);
        event.rrule = self.recurrence.map(RecurrenceEntry::into_rule).transpose()?;
        Ok(event)
    }
}

/// `DTSTART` or `DTEND`: `{ date }` or `{ date_time, tzid }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum DateEntry {
    Date { date: Date },
    DateTime { date_time: DateTime, tzid: String },
}

impl DateEntry {
    fn into_value(
        self,
        outlook: bool,
        zones: &mut Vec<OutlookTimeZone>,
    ) -> Result<DateOrDateTime, Box<dyn Error>> {
        match self {
            DateEntry::Date { date } => Ok(date.into()),
            DateEntry::DateTime { date_time, tzid } => {
                if outlook || tzid.parse::<OutlookTimeZone>().is_ok() {
                    let tz = lookup_outlook(&tzid)?;
                    push_unique(zones, tz);
                    return Ok(DateOrDateTime::outlook(date_time, tz));
                }

                if let Err(e) = resolve_time_zone(&tzid) {
                    tracing::warn!(tzid = %tzid, %e, "TZID unknown to the tz database, writing it as is");
                }
                Ok(DateOrDateTime::zoned(date_time, tzid))
            }
        }
    }
}

/// An instant: `{ utc }`, or a wall clock `{ date_time, tzid }` converted to
/// UTC.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum InstantEntry {
    Utc { utc: Timestamp },
    Local { date_time: DateTime, tzid: String },
}

impl InstantEntry {
    fn into_utc(self) -> Result<Timestamp, Box<dyn Error>> {
        match self {
            InstantEntry::Utc { utc } => Ok(utc),
            InstantEntry::Local { date_time, tzid } => {
                let tz = resolve_time_zone(&tzid)
                    .map_err(|e| format!("Unknown time zone '{tzid}': {e}"))?;
                Ok(to_utc(date_time, &tz)?)
            }
        }
    }
}

/// An organizer or attendee: an email, or `{ name, email }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum UserEntry {
    Email(String),
    Full { name: Option<String>, email: String },
}

impl From<UserEntry> for CalendarUser {
    fn from(entry: UserEntry) -> Self {
        match entry {
            UserEntry::Email(email) => CalendarUser::new(email),
            UserEntry::Full { name, email } => CalendarUser { name, email },
        }
    }
}

/// A location: a name, or `{ name, url }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum LocationEntry {
    Name(String),
    Full { name: String, url: Option<String> },
}

impl From<LocationEntry> for Location {
    fn from(entry: LocationEntry) -> Self {
        match entry {
            LocationEntry::Name(name) => Location::new(name),
            LocationEntry::Full { name, url } => Location { name, url },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecurrenceEntry {
    #[serde(deserialize_with = "parsed::required")]
    pub freq: RecurrenceFrequency,
    pub count: Option<u32>,
    pub interval: Option<u32>,
    pub until: Option<InstantEntry>,
}

impl RecurrenceEntry {
    fn into_rule(self) -> Result<RecurrenceRule, Box<dyn Error>> {
        let mut rule = RecurrenceRule::new(self.freq);
        rule.count = self.count;
        rule.interval = self.interval;
        rule.until = self.until.map(InstantEntry::into_utc).transpose()?;
        Ok(rule)
    }
}

/// An Outlook zone by its TZID or by an IANA identifier.
fn lookup_outlook(tzid: &str) -> Result<OutlookTimeZone, String> {
    tzid.parse()
        .ok()
        .or_else(|| OutlookTimeZone::from_iana(tzid))
        .ok_or_else(|| format!("No Outlook time zone known for '{tzid}'"))
}

fn push_unique(zones: &mut Vec<OutlookTimeZone>, tz: OutlookTimeZone) {
    if !zones.contains(&tz) {
        zones.push(tz);
    }
}

/// Deserialize values through their `FromStr` implementation.
pub(crate) mod parsed {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, de};

    pub fn required<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid value '{s}': {e}")))
    }

    pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| {
                s.parse()
                    .map_err(|e| de::Error::custom(format!("invalid value '{s}': {e}")))
            })
            .transpose()
    }
}
