// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property values and their iCalendar text representations.
//!
//! Values are formatted as defined in RFC 5545 Section 3.3: escaped text,
//! dates, zone-qualified local date-times, UTC date-times and recurrence
//! rules.

mod datetime;
mod rrule;
mod text;

pub use datetime::{
    DateOrDateTime, convert_and_format_utc, format_date, format_local_date_time, format_utc,
    to_utc,
};
pub use rrule::{RecurrenceFrequency, RecurrenceRule};
pub use text::escape_text;
