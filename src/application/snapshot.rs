//! One-shot "give me the board now" run.
//!
//! Unlike the listener this fetches a single larger window, counts every sale
//! in it without a date filter, answers commands only among the most recent
//! few messages, then always publishes the leaderboard once.

use tracing::{info, warn};

use super::command::{CommandProcessor, DispatchReport};
use super::context::BotContext;
use super::store::SaleStore;
use crate::error::Result;

/// Outcome of a snapshot run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotReport {
    /// Messages in the fetched window.
    pub fetched: usize,
    /// Sales found in the window.
    pub sales: usize,
    pub dispatch: DispatchReport,
    /// The leaderboard text that was published.
    pub leaderboard: String,
    /// Whether the leaderboard post was accepted.
    pub published: bool,
}

/// Fetch, tally, answer recent commands, and publish the leaderboard.
///
/// # Errors
///
/// Returns an error if the window fetch fails. Failed posts are reported in
/// the returned [`SnapshotReport`] instead.
pub async fn run_snapshot(ctx: &BotContext) -> Result<SnapshotReport> {
    let settings = &ctx.settings;
    let window = ctx
        .source
        .fetch_batch(settings.snapshot_window, None)
        .await?;
    info!(fetched = window.len(), "Fetched messages for snapshot");

    let store = SaleStore::from_messages(&window);
    let recent = &window[..window.len().min(settings.snapshot_command_window)];
    let processor = CommandProcessor::new(ctx.poster.as_ref());
    let dispatch = processor.process(recent, &store).await;

    let leaderboard = store.leaderboard().render();
    let published = match ctx.poster.post(&leaderboard).await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Failed to publish leaderboard");
            false
        }
    };

    Ok(SnapshotReport {
        fetched: window.len(),
        sales: store.len(),
        dispatch,
        leaderboard,
        published,
    })
}
