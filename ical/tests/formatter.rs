// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the iCalendar formatter.

use invitecal_ical::formatter::format;
use invitecal_ical::{
    CalendarUser, DateOrDateTime, EventStatus, FoldingStyle, FormatError, FormatOptions,
    Formatter, ICalendar, Location, MethodType, OutlookTimeZone, RecurrenceFrequency,
    RecurrenceRule, VEvent, format_to_vec,
};
use jiff::Timestamp;
use jiff::civil::{date, datetime};
use jiff::tz::TimeZone;

fn stamp() -> Timestamp {
    "2022-11-01T08:00:00Z".parse().unwrap()
}

fn new_york() -> TimeZone {
    TimeZone::get("America/New_York").unwrap()
}

/// An event with only the required properties and a fixed DTSTAMP.
fn event() -> VEvent {
    VEvent::new()
        .uid("20221102-1@example.com")
        .organizer(CalendarUser::named("Bibi", "bibi@example.com"))
        .dt_start(date(2022, 11, 2))
        .dt_stamp(stamp())
}

fn lines(ics: &str) -> Vec<&str> {
    ics.trim_end_matches("\r\n").split("\r\n").collect()
}

#[test]
fn test_format_full_calendar() {
    let event = VEvent::new()
        .uid("20221102-1@example.com")
        .organizer(CalendarUser::named("Bibi", "bibi@example.com"))
        .dt_start(DateOrDateTime::zoned(
            datetime(2022, 11, 2, 9, 30, 0, 0),
            "America/New_York",
        ))
        .dt_end(DateOrDateTime::zoned(
            datetime(2022, 11, 2, 11, 30, 0, 0),
            "America/New_York",
        ))
        .rrule(RecurrenceRule::new(RecurrenceFrequency::Daily).count(2))
        .dt_stamp(stamp())
        .created("2022-10-31T12:00:00Z".parse().unwrap())
        .sequence(1)
        .summary("Weekly sync, part 1")
        .description("Agenda:\nreview")
        .attendee("k@x.io")
        .location(Location::with_url("HQ", "https://maps.example.com/hq"));

    let ics = format(&ICalendar::new().event(event)).unwrap();
    assert_eq!(
        ics,
        "BEGIN:VCALENDAR\r\n\
         PRODID:-//yzx9.xyz//invitecal//EN\r\n\
         VERSION:2.0\r\n\
         CALSCALE:GREGORIAN\r\n\
         METHOD:REQUEST\r\n\
         BEGIN:VEVENT\r\n\
         DTSTART;TZID=America/New_York:20221102T093000\r\n\
         DTEND;TZID=America/New_York:20221102T113000\r\n\
         RRULE:FREQ=DAILY;COUNT=2\r\n\
         DTSTAMP:20221101T080000Z\r\n\
         ORGANIZER;CN=Bibi:mailto:bibi@example.com\r\n\
         UID:20221102-1@example.com\r\n\
         CREATED:20221031T120000Z\r\n\
         SEQUENCE:1\r\n\
         STATUS:CONFIRMED\r\n\
         SUMMARY:Weekly sync\\, part 1\r\n\
         DESCRIPTION:Agenda:\\nreview\r\n\
         ATTENDEE;ROLE=REQ-PARTICIPANT;PARTSTAT=NEEDS-ACTION;RSVP=TRUE;CN=k@x.io:mai\r\n \
         lto:k@x.io\r\n\
         LOCATION;ALTREP=\"https://maps.example.com/hq\":HQ\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n"
    );
}

#[test]
fn test_format_empty_calendar() {
    let ics = format(&ICalendar::new().method(MethodType::Cancel)).unwrap();
    assert_eq!(
        lines(&ics),
        [
            "BEGIN:VCALENDAR",
            "PRODID:-//yzx9.xyz//invitecal//EN",
            "VERSION:2.0",
            "CALSCALE:GREGORIAN",
            "METHOD:CANCEL",
            "END:VCALENDAR",
        ]
    );
}

#[test]
fn test_format_zoned_event() {
    let event = event()
        .dt_start(DateOrDateTime::zoned(
            datetime(2022, 11, 2, 9, 30, 0, 0),
            "America/New_York",
        ))
        .dt_end(DateOrDateTime::zoned(
            datetime(2022, 11, 2, 11, 30, 0, 0),
            "America/New_York",
        ));

    let ics = format(&ICalendar::new().event(event)).unwrap();
    let lines = lines(&ics);
    assert!(lines.contains(&"DTSTART;TZID=America/New_York:20221102T093000"));
    assert!(lines.contains(&"DTEND;TZID=America/New_York:20221102T113000"));
}

#[test]
fn test_format_all_day_event() {
    let event = event().dt_end(date(2022, 11, 4));

    let ics = format(&ICalendar::new().event(event)).unwrap();
    let lines = lines(&ics);
    assert!(lines.contains(&"DTSTART;VALUE=DATE:20221102"));
    assert!(lines.contains(&"DTEND;VALUE=DATE:20221104"));
}

#[test]
fn test_format_recurrence() {
    let daily = RecurrenceRule::new(RecurrenceFrequency::Daily);

    let ics = format(&ICalendar::new().event(event().rrule(daily.clone().count(2)))).unwrap();
    assert!(lines(&ics).contains(&"RRULE:FREQ=DAILY;COUNT=2"));

    let until = daily
        .until_local(datetime(2022, 11, 4, 0, 0, 0, 0), &new_york())
        .unwrap();
    let ics = format(&ICalendar::new().event(event().rrule(until))).unwrap();
    assert!(lines(&ics).contains(&"RRULE:FREQ=DAILY;UNTIL=20221104T040000Z"));
}

#[test]
fn test_format_location() {
    let with_url = event().location(Location::with_url("Cafe", "https://example.com/cafe"));
    let ics = format(&ICalendar::new().event(with_url)).unwrap();
    assert!(lines(&ics).contains(&"LOCATION;ALTREP=\"https://example.com/cafe\":Cafe"));

    let without_url = event().location("Cafe");
    let ics = format(&ICalendar::new().event(without_url)).unwrap();
    assert!(lines(&ics).contains(&"LOCATION:Cafe"));
}

#[test]
fn test_format_property_order() {
    let event = event()
        .summary("s")
        .description("d")
        .attendee("a@example.com")
        .attendee("b@example.com")
        .status(EventStatus::Tentative)
        .sequence(3);

    let ics = format(&ICalendar::new().event(event)).unwrap();
    let names: Vec<_> = lines(&ics)
        .into_iter()
        .filter(|line| !line.starts_with(' '))
        .map(|line| line.split([':', ';']).next().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "BEGIN",
            "PRODID",
            "VERSION",
            "CALSCALE",
            "METHOD",
            "BEGIN",
            "DTSTART",
            "DTSTAMP",
            "ORGANIZER",
            "UID",
            "SEQUENCE",
            "STATUS",
            "SUMMARY",
            "DESCRIPTION",
            "ATTENDEE",
            "ATTENDEE",
            "END",
            "END",
        ]
    );
}

#[test]
fn test_format_events_in_insertion_order() {
    let calendar = ICalendar::new()
        .event(event().uid("first"))
        .event(event().uid("second"))
        .event(event().uid("third"));

    let ics = format(&calendar).unwrap();
    let uids: Vec<_> = lines(&ics)
        .into_iter()
        .filter_map(|line| line.strip_prefix("UID:"))
        .collect();
    assert_eq!(uids, ["first", "second", "third"]);
    assert_eq!(ics.matches("BEGIN:VEVENT\r\n").count(), 3);
}

#[test]
fn test_format_escapes_text() {
    let event = event()
        .summary("Hello,Mama;Papa\nkaka\\mama\npapa")
        .organizer(CalendarUser::named("Doe, Jane", "jane@example.com"));

    let ics = format(&ICalendar::new().event(event)).unwrap();
    let lines = lines(&ics);
    assert!(lines.contains(&"SUMMARY:Hello\\,Mama\\;Papa\\nkaka\\\\mama\\npapa"));
    assert!(lines.contains(&"ORGANIZER;CN=Doe\\, Jane:mailto:jane@example.com"));
}

#[test]
fn test_format_folds_long_lines() {
    let event = event().description("x".repeat(250));

    let ics = format(&ICalendar::new().event(event)).unwrap();
    for line in ics.split("\r\n") {
        assert!(line.len() <= 75, "line too long: {line:?}");
    }
    assert!(ics.contains(&format!("DESCRIPTION:{}\r\n x", "x".repeat(63))));
    assert!(
        ics.replace("\r\n ", "")
            .contains(&format!("\r\nDESCRIPTION:{}\r\n", "x".repeat(250)))
    );
}

#[test]
fn test_format_without_folding() {
    let event = event().description("x".repeat(250));
    let calendar = ICalendar::new().event(event);

    let ics = FormatOptions::default()
        .folding(None)
        .write_to_string(&calendar)
        .unwrap();
    assert!(ics.contains(&format!("DESCRIPTION:{}\r\n", "x".repeat(250))));
}

#[test]
fn test_format_with_tab_folding() {
    let event = event().description("x".repeat(100));
    let calendar = ICalendar::new().event(event);

    let ics = FormatOptions::default()
        .folding_style(FoldingStyle::Tab)
        .write_to_string(&calendar)
        .unwrap();
    assert!(ics.contains(&format!("DESCRIPTION:{}\r\n\t", "x".repeat(63))));
}

#[test]
fn test_format_outlook_time_zone() {
    let tz = OutlookTimeZone::RomanceStandardTime;
    let event = event()
        .dt_start(DateOrDateTime::outlook(datetime(2022, 11, 2, 9, 30, 0, 0), tz))
        .dt_end(DateOrDateTime::outlook(datetime(2022, 11, 2, 10, 0, 0, 0), tz));
    let calendar = ICalendar::new().outlook_time_zone(tz).event(event);

    let ics = format(&calendar).unwrap();
    assert!(ics.contains(&format!(
        "METHOD:REQUEST\r\n{}BEGIN:VEVENT\r\n",
        tz.vtimezone()
    )));
    assert!(ics.contains("\r\nDTSTART;TZID=Romance Standard Time:20221102T093000\r\n"));
    assert!(ics.contains("\r\nDTEND;TZID=Romance Standard Time:20221102T100000\r\n"));
}

#[test]
fn test_format_missing_required_property() {
    let cases = [
        (VEvent { uid: None, ..event() }, "UID"),
        (VEvent { organizer: None, ..event() }, "ORGANIZER"),
        (VEvent { dt_start: None, ..event() }, "DTSTART"),
    ];

    for (invalid, property) in cases {
        let calendar = ICalendar::new().event(event()).event(invalid);
        let mut buffer = Vec::new();
        let err = FormatOptions::default()
            .write(&calendar, &mut buffer)
            .unwrap_err();

        assert!(
            matches!(
                err,
                FormatError::MissingProperty { component: "VEVENT", property: p } if p == property
            ),
            "unexpected error: {err:?}"
        );
        assert_eq!(
            err.to_string(),
            format!("Missing required property '{property}' in VEVENT")
        );
        // Nothing is written, not even the valid first event.
        assert!(buffer.is_empty());
    }
}

#[test]
fn test_format_conflicting_recurrence() {
    let rule = RecurrenceRule::new(RecurrenceFrequency::Weekly)
        .count(3)
        .until(stamp());
    let calendar = ICalendar::new().event(event().rrule(rule));

    let mut buffer = Vec::new();
    let err = FormatOptions::default()
        .write(&calendar, &mut buffer)
        .unwrap_err();
    assert!(matches!(
        err,
        FormatError::ConflictingRecurrence { ref uid } if uid == "20221102-1@example.com"
    ));
    assert!(buffer.is_empty());
}

#[test]
fn test_format_entry_points_agree() {
    let calendar = ICalendar::new()
        .prod_id("-//Example Corp.//Cal Client 1.0//EN")
        .event(event().summary("Test Event"));

    let text = format(&calendar).unwrap();
    let bytes = format_to_vec(&calendar).unwrap();
    assert_eq!(text.as_bytes(), bytes.as_slice());
    assert!(text.contains("\r\nPRODID:-//Example Corp.//Cal Client 1.0//EN\r\n"));

    let mut formatter = Formatter::new(Vec::new(), FormatOptions::default());
    formatter.write(&calendar).unwrap();
    assert_eq!(formatter.into_writer(), bytes);
}

#[test]
fn test_format_utf8_content() {
    let event = event().summary("Réunion d'équipe 日本語".repeat(5));

    let ics = format(&ICalendar::new().event(event)).unwrap();
    for line in ics.split("\r\n") {
        assert!(line.len() <= 75);
    }
    assert!(
        ics.replace("\r\n ", "")
            .contains(&"Réunion d'équipe 日本語".repeat(5))
    );
}
