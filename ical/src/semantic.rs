// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! This module provides the strongly-typed calendar invitation model: the
//! calendar container, its events, and the Outlook time zones an invitation
//! can embed. All types are plain owned values; rendering only borrows them.

mod icalendar;
mod vevent;
mod vtimezone;

pub use icalendar::{DEFAULT_PROD_ID, ICalendar, MethodType};
pub use vevent::{CalendarUser, EventStatus, Location, VEvent};
pub use vtimezone::{OutlookTimeZone, resolve_time_zone};
