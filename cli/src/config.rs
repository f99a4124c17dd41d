// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use invitecal_ical::{FormatOptions, MethodType};
use tokio::fs;

use crate::invite::parsed;

pub const APP_NAME: &str = "invitecal";

const INVITECAL_CONFIG_ENV: &str = "INVITECAL_CONFIG";

/// Load the configuration.
///
/// The path comes from `--config`, then `$INVITECAL_CONFIG`, then the user
/// config directory. An explicitly given file must exist; a missing default
/// file yields the default configuration.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(INVITECAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let Some(config_dir) = get_config_dir() else {
            tracing::warn!("user config directory not found, using default configuration");
            return Ok(Config::default());
        };

        let config = config_dir.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using default configuration");
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

/// Configuration of the invitecal application.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// PRODID used when the invitation sets none
    pub product_id: Option<String>,

    /// METHOD used when the invitation sets none
    #[serde(deserialize_with = "parsed::optional")]
    pub method: Option<MethodType>,

    /// Maximum line length before folding, 0 disables folding
    pub folding: Option<usize>,
}

impl Config {
    /// Formatter options for this configuration.
    pub fn format_options(&self) -> FormatOptions {
        let options = FormatOptions::default();
        match self.folding {
            Some(0) => options.folding(None),
            Some(n) => options.folding(Some(n)),
            None => options,
        }
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir
}
