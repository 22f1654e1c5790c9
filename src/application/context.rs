//! Explicit context threaded through the listener and the snapshot.
//!
//! Holds the two outbound ports and the polling settings. Nothing here is
//! global, so several groups or test harnesses can run side by side.

use std::sync::Arc;
use std::time::Duration;

use crate::port::{BotPoster, MessageSource};

/// Window sizes and cadence for fetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSettings {
    /// Messages fetched per listener cycle when looking for new ones.
    pub poll_window: usize,
    /// Page size used when walking back through today's messages.
    pub page_size: usize,
    /// Delay between listener cycles.
    pub poll_interval: Duration,
    /// Messages fetched by a one-shot snapshot.
    pub snapshot_window: usize,
    /// Most recent messages a snapshot scans for commands.
    pub snapshot_command_window: usize,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            poll_window: 20,
            page_size: 100,
            poll_interval: Duration::from_secs(10),
            snapshot_window: 100,
            snapshot_command_window: 10,
        }
    }
}

/// Ports plus settings for one group.
#[derive(Clone)]
pub struct BotContext {
    pub source: Arc<dyn MessageSource>,
    pub poster: Arc<dyn BotPoster>,
    pub settings: PollSettings,
}

impl BotContext {
    #[must_use]
    pub fn new(
        source: Arc<dyn MessageSource>,
        poster: Arc<dyn BotPoster>,
        settings: PollSettings,
    ) -> Self {
        Self {
            source,
            poster,
            settings,
        }
    }
}
