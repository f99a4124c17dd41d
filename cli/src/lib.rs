// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of invitecal: reads invitation documents and
//! renders them to iCalendar files.

mod cli;
mod cmd_render;
mod cmd_timezone;
mod config;
mod invite;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_render::CmdRender;
pub use crate::cmd_timezone::CmdTimezone;
pub use crate::config::{Config, parse_config};
pub use crate::invite::Invite;
