// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar container types.

use crate::semantic::{OutlookTimeZone, VEvent};

/// Product identifier used when none is set.
pub const DEFAULT_PROD_ID: &str = "-//yzx9.xyz//invitecal//EN";

/// Main iCalendar object of an invitation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ICalendar {
    /// Method of the invitation
    pub method: MethodType,
    /// Product identifier that generated the iCalendar data
    pub prod_id: String,
    /// Events, in output order
    pub events: Vec<VEvent>,
    /// Raw VTIMEZONE blocks, written verbatim before the events
    pub time_zones: Vec<String>,
}

impl ICalendar {
    /// Create an empty REQUEST calendar with the default PRODID.
    #[must_use]
    pub fn new() -> Self {
        Self {
            method: MethodType::default(),
            prod_id: DEFAULT_PROD_ID.to_string(),
            events: Vec::new(),
            time_zones: Vec::new(),
        }
    }

    /// Set the method.
    #[must_use]
    pub const fn method(mut self, method: MethodType) -> Self {
        self.method = method;
        self
    }

    /// Set the product identifier.
    #[must_use]
    pub fn prod_id(mut self, prod_id: impl Into<String>) -> Self {
        self.prod_id = prod_id.into();
        self
    }

    /// Append an event.
    #[must_use]
    pub fn event(mut self, event: VEvent) -> Self {
        self.add_event(event);
        self
    }

    /// Append a raw VTIMEZONE block.
    #[must_use]
    pub fn time_zone(mut self, vtimezone: impl Into<String>) -> Self {
        self.add_time_zone(vtimezone);
        self
    }

    /// Append the VTIMEZONE block of an Outlook zone.
    #[must_use]
    pub fn outlook_time_zone(mut self, tz: OutlookTimeZone) -> Self {
        self.add_outlook_time_zone(tz);
        self
    }

    /// Append an event.
    pub fn add_event(&mut self, event: VEvent) {
        self.events.push(event);
    }

    /// Append a raw VTIMEZONE block. The block must be complete, from
    /// `BEGIN:VTIMEZONE` to `END:VTIMEZONE`, with CRLF line endings.
    pub fn add_time_zone(&mut self, vtimezone: impl Into<String>) {
        self.time_zones.push(vtimezone.into());
    }

    /// Append the VTIMEZONE block of an Outlook zone.
    ///
    /// Events whose date-times use an Outlook zone identifier need the block
    /// in the same calendar, otherwise clients cannot resolve the TZID.
    pub fn add_outlook_time_zone(&mut self, tz: OutlookTimeZone) {
        self.add_time_zone(tz.vtimezone());
    }
}

impl Default for ICalendar {
    fn default() -> Self {
        Self::new()
    }
}

/// Method of an invitation (RFC 5546)
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
pub enum MethodType {
    /// Invite attendees or update an invitation
    #[default]
    Request,
    /// Cancel an invitation
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_calendar_defaults() {
        let calendar = ICalendar::new();
        assert_eq!(calendar.method, MethodType::Request);
        assert_eq!(calendar.prod_id, DEFAULT_PROD_ID);
        assert!(calendar.events.is_empty());
        assert!(calendar.time_zones.is_empty());
    }

    #[test]
    fn test_events_and_time_zones_keep_insertion_order() {
        let calendar = ICalendar::new()
            .method(MethodType::Cancel)
            .outlook_time_zone(OutlookTimeZone::GmtStandardTime)
            .time_zone("BEGIN:VTIMEZONE\r\nTZID:Custom\r\nEND:VTIMEZONE\r\n")
            .event(VEvent::new().uid("1"))
            .event(VEvent::new().uid("2"));

        assert_eq!(calendar.method, MethodType::Cancel);
        assert_eq!(calendar.time_zones.len(), 2);
        assert!(calendar.time_zones[0].contains("TZID:GMT Standard Time\r\n"));
        assert!(calendar.time_zones[1].contains("TZID:Custom\r\n"));

        let uids: Vec<_> = calendar
            .events
            .iter()
            .map(|e| e.uid.as_deref().unwrap())
            .collect();
        assert_eq!(uids, ["1", "2"]);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(MethodType::Request.to_string(), "REQUEST");
        assert_eq!(MethodType::Cancel.to_string(), "CANCEL");
        assert_eq!("cancel".parse::<MethodType>().unwrap(), MethodType::Cancel);
    }
}
