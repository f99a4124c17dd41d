// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component formatting for the VCALENDAR and VEVENT blocks of an invitation.
//!
//! Properties are written in a fixed order that invitation consumers rely on.

use std::io::{self, Write};

use crate::error::FormatError;
use crate::formatter::Formatter;
use crate::formatter::property::{
    write_prop_attendee, write_prop_date_or_date_time, write_prop_location, write_prop_organizer,
    write_prop_plain, write_prop_rrule, write_prop_utc, write_property,
};
use crate::keyword::{
    KW_BEGIN, KW_CALSCALE, KW_CALSCALE_GREGORIAN, KW_CREATED, KW_DESCRIPTION, KW_DTEND,
    KW_DTSTAMP, KW_DTSTART, KW_END, KW_METHOD, KW_ORGANIZER, KW_PRODID, KW_SEQUENCE, KW_STATUS,
    KW_SUMMARY, KW_UID, KW_VCALENDAR, KW_VERSION, KW_VERSION_2_0, KW_VEVENT,
};
use crate::semantic::{CalendarUser, ICalendar, VEvent};
use crate::value::DateOrDateTime;

/// Format an `ICalendar` component.
///
/// All events are checked first so that nothing is written for a calendar
/// holding an invalid event.
pub fn write_icalendar<W: Write>(
    f: &mut Formatter<W>,
    calendar: &ICalendar,
) -> Result<(), FormatError> {
    tracing::debug!(
        events = calendar.events.len(),
        time_zones = calendar.time_zones.len(),
        "formatting calendar"
    );

    let events = calendar
        .events
        .iter()
        .map(RequiredProperties::check)
        .collect::<Result<Vec<_>, _>>()?;

    with_block(f, KW_VCALENDAR, |f| {
        write_property(f, &format!("{KW_PRODID}:"), &calendar.prod_id)?;
        write_prop_plain(f, KW_VERSION, KW_VERSION_2_0)?;
        write_prop_plain(f, KW_CALSCALE, KW_CALSCALE_GREGORIAN)?;
        write_prop_plain(f, KW_METHOD, calendar.method)?;

        for vtimezone in &calendar.time_zones {
            f.write_verbatim(vtimezone)?;
        }

        for (event, required) in calendar.events.iter().zip(&events) {
            write_vevent(f, event, required)?;
        }

        Ok(())
    })?;

    Ok(())
}

/// The properties an event cannot be rendered without.
#[derive(Debug)]
struct RequiredProperties<'a> {
    uid: &'a str,
    organizer: &'a CalendarUser,
    dt_start: &'a DateOrDateTime,
}

impl<'a> RequiredProperties<'a> {
    fn check(event: &'a VEvent) -> Result<Self, FormatError> {
        let missing = |property: &'static str| {
            tracing::warn!(uid = event.uid.as_deref(), property, "event misses a required property");
            FormatError::MissingProperty {
                component: KW_VEVENT,
                property,
            }
        };

        let uid = event.uid.as_deref().ok_or_else(|| missing(KW_UID))?;
        let organizer = event.organizer.as_ref().ok_or_else(|| missing(KW_ORGANIZER))?;
        let dt_start = event.dt_start.as_ref().ok_or_else(|| missing(KW_DTSTART))?;

        if event.rrule.as_ref().is_some_and(|rule| rule.is_conflicting()) {
            tracing::warn!(uid, "recurrence rule sets both UNTIL and COUNT");
            return Err(FormatError::ConflictingRecurrence {
                uid: uid.to_string(),
            });
        }

        Ok(Self {
            uid,
            organizer,
            dt_start,
        })
    }
}

/// Format a `VEvent` component.
fn write_vevent<W: Write>(
    f: &mut Formatter<W>,
    event: &VEvent,
    required: &RequiredProperties<'_>,
) -> io::Result<()> {
    with_block(f, KW_VEVENT, |f| {
        write_prop_date_or_date_time(f, KW_DTSTART, required.dt_start)?;
        if let Some(dt_end) = &event.dt_end {
            write_prop_date_or_date_time(f, KW_DTEND, dt_end)?;
        }
        if let Some(rrule) = &event.rrule {
            write_prop_rrule(f, rrule)?;
        }
        write_prop_utc(f, KW_DTSTAMP, event.dt_stamp)?;
        write_prop_organizer(f, required.organizer)?;
        write_property(f, &format!("{KW_UID}:"), required.uid)?;

        if let Some(created) = event.created {
            write_prop_utc(f, KW_CREATED, created)?;
        }
        if let Some(sequence) = event.sequence {
            write_prop_plain(f, KW_SEQUENCE, sequence)?;
        }
        if let Some(status) = event.status {
            write_prop_plain(f, KW_STATUS, status)?;
        }
        if let Some(summary) = &event.summary {
            write_property(f, &format!("{KW_SUMMARY}:"), summary)?;
        }
        if let Some(description) = &event.description {
            write_property(f, &format!("{KW_DESCRIPTION}:"), description)?;
        }
        for attendee in &event.attendees {
            write_prop_attendee(f, attendee)?;
        }
        if let Some(location) = &event.location {
            write_prop_location(f, location)?;
        }

        Ok(())
    })
}

/// Write a block with BEGIN and END.
fn with_block<W: Write, F: FnOnce(&mut Formatter<W>) -> io::Result<()>>(
    f: &mut Formatter<W>,
    name: &str,
    write_content: F,
) -> io::Result<()> {
    f.write_line(&format!("{KW_BEGIN}:{name}"))?;
    write_content(f)?;
    f.write_line(&format!("{KW_END}:{name}"))
}
