// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Text escaping as defined in RFC 5545 Section 3.3.11.

/// Escape a text value for use as an iCalendar property value.
///
/// - Backslash → `\\`
/// - Semicolon → `\;`
/// - Comma → `\,`
/// - Newline → `\n`
///
/// Every other character, carriage returns included, is copied as is.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }
    result
}
