// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg};
use invitecal_ical::OutlookTimeZone;
use strum::IntoEnumIterator;

#[derive(Debug, Clone)]
pub struct CmdTimezone {
    pub iana: Option<String>,
}

impl CmdTimezone {
    pub const NAME: &str = "timezone";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("tz")
            .about("List the supported Outlook time zones, or show the one matching an IANA zone")
            .arg(arg!(iana: [IANA] "IANA zone identifier, e.g. Europe/Paris"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            iana: matches.get_one("iana").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "looking up time zones...");
        self.write(&mut io::stdout().lock())
    }

    /// Without an IANA identifier, one line per Outlook zone: its TZID and
    /// the IANA zone used for UTC conversion. Otherwise the TZID followed by
    /// the VTIMEZONE block to embed.
    pub fn write(&self, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        match &self.iana {
            None => {
                for tz in OutlookTimeZone::iter() {
                    writeln!(out, "{}\t{}", tz.tzid(), tz.iana_id())?;
                }
            }
            Some(iana) => {
                let tz = OutlookTimeZone::from_iana(iana)
                    .ok_or_else(|| format!("No Outlook time zone known for '{iana}'"))?;
                writeln!(out, "{}", tz.tzid())?;
                out.write_all(tz.vtimezone().as_bytes())?;
            }
        }
        Ok(())
    }
}
