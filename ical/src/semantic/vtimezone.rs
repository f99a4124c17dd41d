// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timezone components (VTIMEZONE) for the zone identifiers used by Windows
//! and Outlook.
//!
//! The identifiers are the key names under
//! `HKEY_LOCAL_MACHINE\Software\Microsoft\Windows NT\CurrentVersion\Time Zones`.
//! Their VTIMEZONE bodies are static text matching what Outlook itself emits,
//! they are not derived from the tz database.

use std::collections::HashMap;
use std::sync::LazyLock;

use jiff::tz::TimeZone;

/// Time zones with a non-standard identifier understood by Outlook.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum OutlookTimeZone {
    /// Brussels, Copenhagen, Madrid, Paris
    #[strum(serialize = "Romance Standard Time")]
    RomanceStandardTime,

    /// Kuala Lumpur, Singapore
    #[strum(serialize = "Singapore Standard Time")]
    SingaporeStandardTime,

    /// Chennai, Kolkata, Mumbai, New Delhi
    #[strum(serialize = "India Standard Time")]
    IndiaStandardTime,

    /// Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius
    #[strum(serialize = "FLE Standard Time")]
    FleStandardTime,

    /// Dublin, Edinburgh, Lisbon, London
    #[strum(serialize = "GMT Standard Time")]
    GmtStandardTime,
}

impl OutlookTimeZone {
    /// The TZID, e.g. `Romance Standard Time`.
    #[must_use]
    pub fn tzid(self) -> &'static str {
        self.into()
    }

    /// The VTIMEZONE block, from `BEGIN:VTIMEZONE` to `END:VTIMEZONE`, each
    /// line terminated by CRLF.
    #[must_use]
    pub const fn vtimezone(self) -> &'static str {
        match self {
            Self::RomanceStandardTime => VTIMEZONE_ROMANCE,
            Self::SingaporeStandardTime => VTIMEZONE_SINGAPORE,
            Self::IndiaStandardTime => VTIMEZONE_INDIA,
            Self::FleStandardTime => VTIMEZONE_FLE,
            Self::GmtStandardTime => VTIMEZONE_GMT,
        }
    }

    /// The IANA zone observing the same rules, used to convert wall clock
    /// times in this zone to UTC.
    #[must_use]
    pub const fn iana_id(self) -> &'static str {
        match self {
            Self::RomanceStandardTime => "Europe/Paris",
            Self::SingaporeStandardTime => "Asia/Singapore",
            Self::IndiaStandardTime => "Asia/Kolkata",
            Self::FleStandardTime => "Europe/Helsinki",
            Self::GmtStandardTime => "Europe/London",
        }
    }

    /// Look up the Outlook zone for an IANA identifier.
    ///
    /// Only a small table of identifiers is known; this is not a general
    /// IANA to Windows mapping. Returns `None` for anything else.
    #[must_use]
    pub fn from_iana(iana_id: &str) -> Option<Self> {
        let tz = IANA_TO_OUTLOOK.get(iana_id).copied();
        if tz.is_none() {
            tracing::debug!(iana_id, "no Outlook time zone for IANA identifier");
        }
        tz
    }

    /// The tz database zone for this Outlook zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the tz database does not know [`Self::iana_id`].
    pub fn time_zone(self) -> Result<TimeZone, jiff::Error> {
        TimeZone::get(self.iana_id())
    }
}

/// Resolve a TZID, either an Outlook identifier or an IANA one, to a zone
/// usable for UTC conversion.
///
/// # Errors
///
/// Returns an error if the identifier is neither an Outlook zone nor known to
/// the tz database.
pub fn resolve_time_zone(tzid: &str) -> Result<TimeZone, jiff::Error> {
    match tzid.parse::<OutlookTimeZone>() {
        Ok(tz) => tz.time_zone(),
        Err(_) => TimeZone::get(tzid),
    }
}

static IANA_TO_OUTLOOK: LazyLock<HashMap<&'static str, OutlookTimeZone>> = LazyLock::new(|| {
    use OutlookTimeZone::{
        FleStandardTime, GmtStandardTime, IndiaStandardTime, RomanceStandardTime,
        SingaporeStandardTime,
    };

    HashMap::from([
        ("Europe/Paris", RomanceStandardTime),
        ("Europe/Brussels", RomanceStandardTime),
        ("Europe/Copenhagen", RomanceStandardTime),
        ("Europe/Madrid", RomanceStandardTime),
        ("Asia/Singapore", SingaporeStandardTime),
        ("Asia/Kuala_Lumpur", SingaporeStandardTime),
        ("Asia/Manila", SingaporeStandardTime),
        ("Asia/Kolkata", IndiaStandardTime),
        ("Asia/Calcutta", IndiaStandardTime),
        ("Europe/Helsinki", FleStandardTime),
        ("Europe/Kiev", FleStandardTime),
        ("Europe/Kyiv", FleStandardTime),
        ("Europe/Riga", FleStandardTime),
        ("Europe/Sofia", FleStandardTime),
        ("Europe/Tallinn", FleStandardTime),
        ("Europe/Vilnius", FleStandardTime),
        ("Europe/London", GmtStandardTime),
        ("Europe/Dublin", GmtStandardTime),
        ("Europe/Lisbon", GmtStandardTime),
    ])
});

const VTIMEZONE_ROMANCE: &str = "BEGIN:VTIMEZONE\r\n\
TZID:Romance Standard Time\r\n\
BEGIN:STANDARD\r\n\
DTSTART:16010101T030000\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
RRULE:FREQ=YEARLY;INTERVAL=1;BYDAY=-1SU;BYMONTH=10\r\n\
END:STANDARD\r\n\
BEGIN:DAYLIGHT\r\n\
DTSTART:16010101T020000\r\n\
TZOFFSETFROM:+0100\r\n\
TZOFFSETTO:+0200\r\n\
RRULE:FREQ=YEARLY;INTERVAL=1;BYDAY=-1SU;BYMONTH=3\r\n\
END:DAYLIGHT\r\n\
END:VTIMEZONE\r\n";

const VTIMEZONE_SINGAPORE: &str = "BEGIN:VTIMEZONE\r\n\
TZID:Singapore Standard Time\r\n\
BEGIN:STANDARD\r\n\
DTSTART:16010101T000000\r\n\
TZOFFSETFROM:+0800\r\n\
TZOFFSETTO:+0800\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n";

const VTIMEZONE_INDIA: &str = "BEGIN:VTIMEZONE\r\n\
TZID:India Standard Time\r\n\
BEGIN:STANDARD\r\n\
DTSTART:16010101T000000\r\n\
TZOFFSETFROM:+0530\r\n\
TZOFFSETTO:+0530\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n";

const VTIMEZONE_FLE: &str = "BEGIN:VTIMEZONE\r\n\
TZID:FLE Standard Time\r\n\
BEGIN:STANDARD\r\n\
DTSTART:16010101T040000\r\n\
TZOFFSETFROM:+0300\r\n\
TZOFFSETTO:+0200\r\n\
RRULE:FREQ=YEARLY;INTERVAL=1;BYDAY=-1SU;BYMONTH=10\r\n\
END:STANDARD\r\n\
BEGIN:DAYLIGHT\r\n\
DTSTART:16010101T030000\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0300\r\n\
RRULE:FREQ=YEARLY;INTERVAL=1;BYDAY=-1SU;BYMONTH=3\r\n\
END:DAYLIGHT\r\n\
END:VTIMEZONE\r\n";

const VTIMEZONE_GMT: &str = "BEGIN:VTIMEZONE\r\n\
TZID:GMT Standard Time\r\n\
BEGIN:STANDARD\r\n\
DTSTART:16010101T020000\r\n\
TZOFFSETFROM:+0100\r\n\
TZOFFSETTO:+0000\r\n\
RRULE:FREQ=YEARLY;INTERVAL=1;BYDAY=-1SU;BYMONTH=10\r\n\
END:STANDARD\r\n\
BEGIN:DAYLIGHT\r\n\
DTSTART:16010101T010000\r\n\
TZOFFSETFROM:+0000\r\n\
TZOFFSETTO:+0100\r\n\
RRULE:FREQ=YEARLY;INTERVAL=1;BYDAY=-1SU;BYMONTH=3\r\n\
END:DAYLIGHT\r\n\
END:VTIMEZONE\r\n";
