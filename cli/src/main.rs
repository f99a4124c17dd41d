// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! invitecal - render calendar invitations to iCalendar

use std::process::ExitCode;

use invitecal_cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}
