// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::dashboard;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(dashboard::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ko`, `en-US`).
    pub lang: Option<String>,
    /// Overrides `api.base_url` from the config file.
    pub api_url: Option<String>,
    /// Overrides `storage.base_url` from the config file.
    pub storage_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CHECKIN_BOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
