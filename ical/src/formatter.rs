// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) formatter module.
//!
//! This module renders an [`ICalendar`] to RFC 5545 text, writing to any
//! `std::io::Write` implementer. Every content line is folded and terminated
//! with CRLF.
//!
//! # Example
//!
//! ```
//! use invitecal_ical::{CalendarUser, ICalendar, VEvent, formatter::format};
//! use jiff::civil::date;
//!
//! let event = VEvent::new()
//!     .uid("20221102-1@example.com")
//!     .organizer(CalendarUser::named("Bibi", "bibi@example.com"))
//!     .dt_start(date(2022, 11, 2))
//!     .dt_end(date(2022, 11, 3));
//! let calendar = ICalendar::new().event(event);
//!
//! let ics = format(&calendar)?;
//! assert!(ics.contains("DTSTART;VALUE=DATE:20221102\r\n"));
//! # Ok::<(), invitecal_ical::FormatError>(())
//! ```

mod component;
mod property;

use std::borrow::Cow;
use std::io::{self, Write};

use crate::error::FormatError;
use crate::formatter::component::write_icalendar;
use crate::semantic::ICalendar;

/// Maximum length of a content line in octets, excluding the CRLF.
pub const MAX_LINE_LENGTH: usize = 75;

/// Convenience function to format an `ICalendar` to a `String` (uses default options).
///
/// # Errors
///
/// Returns an error if an event misses a required property or carries a
/// conflicting recurrence rule.
pub fn format(calendar: &ICalendar) -> Result<String, FormatError> {
    FormatOptions::default().write_to_string(calendar)
}

/// Convenience function to format an `ICalendar` to UTF-8 bytes (uses default options).
///
/// # Errors
///
/// Returns an error if an event misses a required property or carries a
/// conflicting recurrence rule.
pub fn format_to_vec(calendar: &ICalendar) -> Result<Vec<u8>, FormatError> {
    let mut buffer = Vec::new();
    FormatOptions::default().write(calendar, &mut buffer)?;
    Ok(buffer)
}

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(MAX_LINE_LENGTH),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub const fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Convenience method to write an `ICalendar` to any `Write` implementer.
    ///
    /// Events are checked before anything is written, so a calendar with an
    /// invalid event leaves the writer untouched.
    ///
    /// # Errors
    /// Returns an error if an event is invalid or writing fails.
    pub fn write(&self, calendar: &ICalendar, w: &mut impl Write) -> Result<(), FormatError> {
        let mut formatter = Formatter::new(w, *self);
        write_icalendar(&mut formatter, calendar)
    }

    /// Convenience method to write an `ICalendar` to a `String`.
    ///
    /// # Errors
    /// Returns an error if an event is invalid or the output contains invalid
    /// UTF-8 data.
    pub fn write_to_string(&self, calendar: &ICalendar) -> Result<String, FormatError> {
        let mut buffer = Vec::new();
        self.write(calendar, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    /// Get the folding sequence for this style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Space => "\r\n ",
            Self::Tab => "\r\n\t",
        }
    }

    /// Get the length of the continuation character after CRLF.
    #[must_use]
    pub(crate) const fn continuation_len() -> usize {
        1 // Both SPACE and TAB are 1 byte
    }
}

/// Fold a content line so that no physical line exceeds `max_len` octets.
///
/// A fold (CRLF + whitespace) is inserted after the first `max_len` octets.
/// The whitespace opening a continuation line counts toward that line's
/// length, the CRLF counts toward none. Lines of at most `max_len` octets are
/// returned unchanged.
///
/// Folds may fall inside an escape sequence such as `\,`, but never inside a
/// multi-octet UTF-8 character: such a fold moves back to the start of the
/// character.
#[must_use]
pub fn fold_line(line: &str, max_len: usize, style: FoldingStyle) -> Cow<'_, str> {
    if line.len() <= max_len {
        return Cow::Borrowed(line);
    }

    let sep = style.as_str();
    let folds = line.len() / max_len.max(1) + 1;
    let mut folded = String::with_capacity(line.len() + folds * sep.len());

    let mut rest = line;
    let mut budget = max_len;
    while rest.len() > budget {
        let (head, tail) = rest.split_at(char_boundary_before(rest, budget));
        folded.push_str(head);
        folded.push_str(sep);
        rest = tail;
        budget = max_len.saturating_sub(FoldingStyle::continuation_len());
    }
    folded.push_str(rest);

    Cow::Owned(folded)
}

/// Largest char boundary at or before `index`, or the end of the first
/// character when there is none, so every fold makes progress.
fn char_boundary_before(s: &str, index: usize) -> usize {
    let mut pos = index;
    while pos > 0 && !s.is_char_boundary(pos) {
        pos -= 1;
    }
    if pos == 0 {
        pos = s.chars().next().map_or(s.len(), char::len_utf8);
    }
    pos
}

/// iCalendar formatter that writes folded, CRLF-terminated lines to any
/// `Write` implementer.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    /// The underlying writer.
    writer: W,
    /// Formatting options.
    options: FormatOptions,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub const fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write an `ICalendar` to the underlying writer.
    ///
    /// # Errors
    /// Returns an error if an event is invalid or writing fails.
    pub fn write(&mut self, calendar: &ICalendar) -> Result<(), FormatError> {
        write_icalendar(self, calendar)
    }

    /// Write a content line: fold it per the options, then terminate it with
    /// CRLF. The line is written as is, without escaping.
    pub(crate) fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self.options.folding {
            Some(max_len) => {
                let folded = fold_line(line, max_len, self.options.folding_style);
                self.writer.write_all(folded.as_bytes())?;
            }
            None => self.writer.write_all(line.as_bytes())?,
        }
        self.writeln()
    }

    /// Write pre-rendered text verbatim, no folding and no line ending added.
    pub(crate) fn write_verbatim(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    /// Write a CRLF line ending.
    fn writeln(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n")
    }
}
