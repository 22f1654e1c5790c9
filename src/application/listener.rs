//! Continuous polling loop that answers commands as they arrive.
//!
//! Each cycle fetches a bounded window of recent messages and compares it
//! against the [`Watermark`]. When something new shows up, today's sales are
//! rebuilt from scratch and the new messages are scanned for commands.
//!
//! A failed cycle is logged and retried after the normal interval; the
//! watermark and sale set are left exactly as they were, so commands from a
//! failed cycle are picked up again on the next one.

use chrono::{NaiveDate, Utc};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::command::{CommandProcessor, DispatchReport};
use super::context::BotContext;
use super::fetcher::fetch_all_today;
use super::store::SaleStore;
use super::watermark::Watermark;
use crate::error::Result;

/// What happened in one poll cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Messages in the fetched window.
    pub fetched: usize,
    /// Messages newer than the watermark.
    pub new_messages: usize,
    /// Size of the rebuilt sale set, when a refresh happened.
    pub sales: Option<usize>,
    pub dispatch: DispatchReport,
}

impl CycleReport {
    /// True when nothing new arrived and the cycle did no work.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.new_messages == 0
    }
}

/// Owns the watermark and today's sale set between cycles.
pub struct Listener {
    ctx: BotContext,
    watermark: Watermark,
    store: SaleStore,
}

impl Listener {
    /// Capture the newest existing message as the starting watermark.
    ///
    /// Messages already in the group are never answered. A full window is
    /// fetched rather than a single message, since blank posts are dropped
    /// from a page after it is cut and a one-message page can come back empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial fetch fails.
    pub async fn start(ctx: BotContext) -> Result<Self> {
        let window = ctx
            .source
            .fetch_batch(ctx.settings.poll_window, None)
            .await?;
        let watermark = Watermark::at_newest(&window);
        info!(
            watermark = ?watermark.last_seen().map(|id| id.as_str()),
            "Listener initialised"
        );
        Ok(Self::with_watermark(ctx, watermark))
    }

    /// Build a listener at a known position without touching the network.
    #[must_use]
    pub fn with_watermark(ctx: BotContext, watermark: Watermark) -> Self {
        Self {
            ctx,
            watermark,
            store: SaleStore::default(),
        }
    }

    #[must_use]
    pub const fn watermark(&self) -> &Watermark {
        &self.watermark
    }

    /// Sale set from the most recent refresh.
    #[must_use]
    pub const fn store(&self) -> &SaleStore {
        &self.store
    }

    /// Run one cycle against the current UTC date.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching the window or today's history fails.
    pub async fn poll_once(&mut self) -> Result<CycleReport> {
        self.poll_once_on(Utc::now().date_naive()).await
    }

    /// Run one cycle treating `today` as the current UTC date.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching the window or today's history fails.
    pub async fn poll_once_on(&mut self, today: NaiveDate) -> Result<CycleReport> {
        let settings = &self.ctx.settings;
        let window = self
            .ctx
            .source
            .fetch_batch(settings.poll_window, None)
            .await?;
        let fresh = self.watermark.new_messages(&window);

        let mut report = CycleReport {
            fetched: window.len(),
            new_messages: fresh.len(),
            ..CycleReport::default()
        };
        if fresh.is_empty() {
            debug!(fetched = report.fetched, "No new messages");
            return Ok(report);
        }

        let today_messages =
            fetch_all_today(self.ctx.source.as_ref(), settings.page_size, today).await?;
        self.store = SaleStore::from_messages(&today_messages);
        report.sales = Some(self.store.len());

        report.dispatch = CommandProcessor::new(self.ctx.poster.as_ref())
            .process(fresh, &self.store)
            .await;
        self.watermark.advance(&window);

        info!(
            new_messages = report.new_messages,
            sales = self.store.len(),
            commands = report.dispatch.commands,
            replies_failed = report.dispatch.replies_failed,
            "Processed new messages"
        );
        Ok(report)
    }

    /// Poll forever, sleeping the configured interval between cycles.
    pub async fn run(&mut self) {
        let interval = self.ctx.settings.poll_interval;
        info!(
            interval_secs = interval.as_secs(),
            window = self.ctx.settings.poll_window,
            "Listening for commands"
        );

        loop {
            if let Err(e) = self.poll_once().await {
                warn!(error = %e, "Poll cycle failed, retrying after interval");
            }
            sleep(interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::context::PollSettings;
    use crate::testkit::domain::{at, date, message};
    use crate::testkit::group::FakeGroup;
    use crate::testkit::poster::RecordingPoster;

    fn context(group: &FakeGroup, poster: &RecordingPoster) -> BotContext {
        BotContext::new(
            Arc::new(group.clone()),
            Arc::new(poster.clone()),
            PollSettings {
                poll_window: 3,
                page_size: 2,
                ..PollSettings::default()
            },
        )
    }

    #[tokio::test]
    async fn start_does_not_treat_existing_messages_as_new() {
        let group = FakeGroup::with_messages(vec![message(
            "1",
            "Ana",
            "!leaderboard",
            at(2024, 6, 3, 8, 0),
        )]);
        let poster = RecordingPoster::new();

        let mut listener = Listener::start(context(&group, &poster)).await.unwrap();
        let report = listener.poll_once_on(date(2024, 6, 3)).await.unwrap();

        assert!(report.is_idle());
        assert!(poster.is_empty());
    }

    #[tokio::test]
    async fn start_skips_blank_newest_message() {
        let t = at(2024, 6, 3, 8, 0);
        let group = FakeGroup::with_messages(vec![
            message("3", "Ana", "   ", t),
            message("2", "Ana", "!leaderboard", t),
            message("1", "Ana", "!mysales", t),
        ]);
        let poster = RecordingPoster::new();

        let mut listener = Listener::start(context(&group, &poster)).await.unwrap();
        assert_eq!(listener.watermark().last_seen(), Some(&"2".into()));

        let report = listener.poll_once_on(date(2024, 6, 3)).await.unwrap();

        assert!(report.is_idle());
        assert!(poster.is_empty());
    }

    #[tokio::test]
    async fn start_on_empty_group_answers_first_command() {
        let group = FakeGroup::new();
        let poster = RecordingPoster::new();

        let mut listener = Listener::start(context(&group, &poster)).await.unwrap();
        assert_eq!(listener.watermark().last_seen(), None);

        group.push(message("1", "Ana", "!mysales", at(2024, 6, 3, 8, 0)));
        listener.poll_once_on(date(2024, 6, 3)).await.unwrap();

        assert_eq!(
            poster.posts(),
            vec!["Ana, you have no sales submitted today.".to_string()]
        );
    }

    #[tokio::test]
    async fn idle_cycle_skips_refresh() {
        let group = FakeGroup::with_messages(vec![message(
            "1",
            "Ana",
            "$5",
            at(2024, 6, 3, 8, 0),
        )]);
        let poster = RecordingPoster::new();
        let mut listener = Listener::start(context(&group, &poster)).await.unwrap();
        group.clear_calls();

        listener.poll_once_on(date(2024, 6, 3)).await.unwrap();

        // Only the window fetch; no day walk.
        assert_eq!(group.calls().len(), 1);
        assert_eq!(listener.watermark().last_seen(), Some(&"1".into()));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_watermark_for_retry() {
        let group = FakeGroup::with_messages(vec![message(
            "1",
            "Ana",
            "$5",
            at(2024, 6, 3, 8, 0),
        )]);
        let poster = RecordingPoster::new();
        let mut listener = Listener::start(context(&group, &poster)).await.unwrap();

        group.push(message("2", "Ana", "!mysales", at(2024, 6, 3, 9, 0)));
        // Window fetch succeeds, first history page fails.
        group.fail_after(1, 1);

        assert!(listener.poll_once_on(date(2024, 6, 3)).await.is_err());
        assert_eq!(listener.watermark().last_seen(), Some(&"1".into()));
        assert!(poster.is_empty());

        let report = listener.poll_once_on(date(2024, 6, 3)).await.unwrap();

        assert_eq!(report.new_messages, 1);
        assert_eq!(report.dispatch.replies_sent, 1);
        assert_eq!(
            poster.posts(),
            vec!["Ana, your total sales today: $5.00".to_string()]
        );
        assert_eq!(listener.watermark().last_seen(), Some(&"2".into()));
    }

    #[tokio::test]
    async fn window_overflow_treats_all_fetched_as_new() {
        let group = FakeGroup::with_messages(vec![message(
            "1",
            "Ana",
            "$5",
            at(2024, 6, 3, 8, 0),
        )]);
        let poster = RecordingPoster::new();
        let mut listener = Listener::start(context(&group, &poster)).await.unwrap();

        // Window is 3; five arrive while we were away, pushing "1" out of it.
        for (id, text) in [
            ("2", "!leaderboard"),
            ("3", "$7"),
            ("4", "!mysales"),
            ("5", "chat"),
            ("6", "!mysales"),
        ] {
            group.push(message(id, "Bo", text, at(2024, 6, 3, 9, 0)));
        }

        let report = listener.poll_once_on(date(2024, 6, 3)).await.unwrap();

        assert_eq!(report.fetched, 3);
        assert_eq!(report.new_messages, 3);
        assert_eq!(report.sales, Some(2));
        // "6" and "4" are in the window; "2" fell outside it.
        assert_eq!(report.dispatch.commands, 2);
        assert_eq!(listener.watermark().last_seen(), Some(&"6".into()));
    }

    #[tokio::test]
    async fn refresh_only_counts_todays_sales() {
        let group = FakeGroup::with_messages(vec![message(
            "1",
            "Ana",
            "$500",
            at(2024, 6, 2, 23, 0),
        )]);
        let poster = RecordingPoster::new();
        let mut listener = Listener::start(context(&group, &poster)).await.unwrap();

        group.push(message("2", "Ana", "$20", at(2024, 6, 3, 0, 5)));
        group.push(message("3", "Ana", "!mysales", at(2024, 6, 3, 0, 6)));
        listener.poll_once_on(date(2024, 6, 3)).await.unwrap();

        assert_eq!(
            poster.posts(),
            vec!["Ana, your total sales today: $20.00".to_string()]
        );
    }
}
