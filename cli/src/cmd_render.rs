// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use jiff::Timestamp;
use tokio::fs;
use tokio::io::{self, AsyncWriteExt};

use crate::config::Config;
use crate::invite::Invite;

#[derive(Debug, Clone)]
pub struct CmdRender {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

impl CmdRender {
    pub const NAME: &str = "render";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Render an invitation document to an iCalendar file")
            .arg(
                arg!(input: <INVITE> "Path to the invitation document (TOML)")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-o --output <FILE> "Write the calendar to FILE instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<PathBuf>("input") {
            Some(input) => Self {
                input: input.clone(),
                output: matches.get_one("output").cloned(),
            },
            _ => unreachable!(),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "rendering invitation...");
        let content = fs::read_to_string(&self.input).await.map_err(|e| {
            format!("Failed to read invitation at {}: {e}", self.input.display())
        })?;

        let ics = render(&content, config, Timestamp::now())?;

        match &self.output {
            Some(path) => {
                fs::write(path, ics)
                    .await
                    .map_err(|e| format!("Failed to write calendar to {}: {e}", path.display()))?;
                tracing::info!(path = %path.display(), "calendar written");
            }
            None => {
                let mut stdout = io::stdout();
                stdout.write_all(ics.as_bytes()).await?;
                stdout.flush().await?;
            }
        }
        Ok(())
    }
}

/// Render an invitation document, stamping events with `now`.
pub fn render(content: &str, config: &Config, now: Timestamp) -> Result<String, Box<dyn Error>> {
    let invite: Invite = content
        .parse()
        .map_err(|e| format!("Failed to parse invitation: {e}"))?;

    let calendar = invite.into_calendar(config, now)?;
    let ics = config.format_options().write_to_string(&calendar)?;
    tracing::debug!(events = calendar.events.len(), bytes = ics.len(), "invitation rendered");
    Ok(ics)
}
