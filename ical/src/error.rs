// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

/// Errors raised while rendering a calendar.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// A property the component cannot be rendered without is unset.
    #[error("Missing required property '{property}' in {component}")]
    MissingProperty {
        /// Component being rendered
        component: &'static str,
        /// Name of the missing property
        property: &'static str,
    },

    /// A recurrence rule carries both an UNTIL and a COUNT terminator.
    #[error("Recurrence rule of event '{uid}' sets both UNTIL and COUNT")]
    ConflictingRecurrence {
        /// UID of the offending event
        uid: String,
    },

    /// The rendered output is not valid UTF-8.
    #[error("Rendered output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Writing to the underlying sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
