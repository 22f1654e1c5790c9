//! Polling cadence and window sizes.

use std::time::Duration;

use serde::Deserialize;

use crate::application::context::PollSettings;

/// Polling configuration, mapped onto [`PollSettings`].
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    /// Messages fetched per listener cycle.
    #[serde(default = "default_poll_window")]
    pub poll_window: usize,
    /// Page size when collecting today's history.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Seconds between listener cycles.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Messages fetched by `fetch`.
    #[serde(default = "default_snapshot_window")]
    pub snapshot_window: usize,
    /// Recent messages `fetch` scans for commands.
    #[serde(default = "default_snapshot_command_window")]
    pub snapshot_command_window: usize,
}

const fn default_poll_window() -> usize {
    20
}

const fn default_page_size() -> usize {
    100
}

const fn default_poll_interval_secs() -> u64 {
    10
}

const fn default_snapshot_window() -> usize {
    100
}

const fn default_snapshot_command_window() -> usize {
    10
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            poll_window: default_poll_window(),
            page_size: default_page_size(),
            poll_interval_secs: default_poll_interval_secs(),
            snapshot_window: default_snapshot_window(),
            snapshot_command_window: default_snapshot_command_window(),
        }
    }
}

impl From<&PollingConfig> for PollSettings {
    fn from(config: &PollingConfig) -> Self {
        Self {
            poll_window: config.poll_window,
            page_size: config.page_size,
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            snapshot_window: config.snapshot_window,
            snapshot_command_window: config.snapshot_command_window,
        }
    }
}
