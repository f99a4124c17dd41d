// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Render calendar invitations as iCalendar (RFC 5545) text, with support for
//! the non-standard time zone identifiers used by Outlook.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else)]

mod error;
pub mod formatter;
pub mod keyword;
pub mod semantic;
pub mod value;

pub use crate::error::FormatError;
pub use crate::formatter::{FoldingStyle, FormatOptions, Formatter, format, format_to_vec};
pub use crate::semantic::{
    CalendarUser, EventStatus, ICalendar, Location, MethodType, OutlookTimeZone, VEvent,
    resolve_time_zone,
};
pub use crate::value::{
    DateOrDateTime, RecurrenceFrequency, RecurrenceRule, escape_text, format_date,
    format_local_date_time, format_utc, to_utc,
};
