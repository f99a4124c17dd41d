// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property formatting for iCalendar properties.
//!
//! Every textual property goes through [`write_property`], which escapes the
//! value. Properties whose value is a pre-formatted date-time, integer,
//! enumeration or recurrence rule are written with [`Formatter::write_line`]
//! instead, which folds but does not escape.

use std::fmt::Write as _;
use std::io::{self, Write};

use jiff::Timestamp;

use crate::formatter::Formatter;
use crate::keyword::{
    KW_ALTREP, KW_ATTENDEE, KW_BOOLEAN_TRUE, KW_CN, KW_LOCATION, KW_MAILTO, KW_ORGANIZER,
    KW_PARTSTAT, KW_PARTSTAT_NEEDS_ACTION, KW_ROLE, KW_ROLE_REQ_PARTICIPANT, KW_RRULE,
    KW_RRULE_COUNT, KW_RRULE_FREQ, KW_RRULE_INTERVAL, KW_RRULE_UNTIL, KW_RSVP,
};
use crate::semantic::{CalendarUser, Location};
use crate::value::{DateOrDateTime, RecurrenceRule, escape_text, format_utc};

/// Write a property: `prefix` followed by the escaped `value`, folded and
/// terminated with CRLF.
///
/// The prefix holds the property name, any parameters and the separator, for
/// example `ATTENDEE;ROLE=REQ-PARTICIPANT;` or `SUMMARY:`. It is never escaped.
pub fn write_property<W: Write>(f: &mut Formatter<W>, prefix: &str, value: &str) -> io::Result<()> {
    let escaped = escape_text(value);
    let mut line = String::with_capacity(prefix.len() + escaped.len());
    line.push_str(prefix);
    line.push_str(&escaped);
    f.write_line(&line)
}

/// Format `DTSTART` / `DTEND`: `NAME;VALUE=DATE:...` or `NAME;TZID=...:...`.
pub fn write_prop_date_or_date_time<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    value: &DateOrDateTime,
) -> io::Result<()> {
    f.write_line(&format!("{name};{value}"))
}

/// Format a UTC date-time property such as `DTSTAMP` or `CREATED`.
pub fn write_prop_utc<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    value: Timestamp,
) -> io::Result<()> {
    f.write_line(&format!("{name}:{}", format_utc(value)))
}

/// Format a property whose value needs no escaping, such as `SEQUENCE`,
/// `STATUS` or `METHOD`.
pub fn write_prop_plain<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    value: impl std::fmt::Display,
) -> io::Result<()> {
    f.write_line(&format!("{name}:{value}"))
}

/// Format the `RRULE` property:
/// `RRULE:FREQ=<freq>[;UNTIL=<utc>][;COUNT=<n>][;INTERVAL=<n>]`.
pub fn write_prop_rrule<W: Write>(f: &mut Formatter<W>, rule: &RecurrenceRule) -> io::Result<()> {
    f.write_line(&format_recurrence_rule(rule))
}

fn format_recurrence_rule(rule: &RecurrenceRule) -> String {
    let mut line = format!("{KW_RRULE}:{KW_RRULE_FREQ}={}", rule.freq);
    if let Some(until) = rule.until {
        let _ = write!(line, ";{KW_RRULE_UNTIL}={}", format_utc(until));
    }
    if let Some(count) = rule.count {
        let _ = write!(line, ";{KW_RRULE_COUNT}={count}");
    }
    if let Some(interval) = rule.interval {
        let _ = write!(line, ";{KW_RRULE_INTERVAL}={interval}");
    }
    line
}

/// Format `ORGANIZER;CN=<name>:mailto:<email>`.
pub fn write_prop_organizer<W: Write>(
    f: &mut Formatter<W>,
    organizer: &CalendarUser,
) -> io::Result<()> {
    write_property(f, &format!("{KW_ORGANIZER};"), &cal_address(organizer))
}

/// Format an `ATTENDEE` asked to reply, with the fixed role and status
/// parameters of an invitation.
pub fn write_prop_attendee<W: Write>(
    f: &mut Formatter<W>,
    attendee: &CalendarUser,
) -> io::Result<()> {
    let prefix = format!(
        "{KW_ATTENDEE};{KW_ROLE}={KW_ROLE_REQ_PARTICIPANT};\
         {KW_PARTSTAT}={KW_PARTSTAT_NEEDS_ACTION};{KW_RSVP}={KW_BOOLEAN_TRUE};"
    );
    write_property(f, &prefix, &cal_address(attendee))
}

/// Format `LOCATION;ALTREP="<url>":<name>`, or `LOCATION:<name>` without URL.
pub fn write_prop_location<W: Write>(f: &mut Formatter<W>, location: &Location) -> io::Result<()> {
    let prefix = match &location.url {
        Some(url) => format!("{KW_LOCATION};{KW_ALTREP}=\"{url}\":"),
        None => format!("{KW_LOCATION}:"),
    };
    write_property(f, &prefix, &location.name)
}

/// `CN=<name>:mailto:<email>`, the value part of an organizer or attendee
/// line. It goes through escaping as a whole.
fn cal_address(user: &CalendarUser) -> String {
    format!("{KW_CN}={}:{KW_MAILTO}:{}", user.common_name(), user.email)
}
