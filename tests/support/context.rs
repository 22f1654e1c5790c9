//! Wiring the in-memory doubles into a [`BotContext`].

use std::sync::Arc;

use salesboard::application::{BotContext, PollSettings};
use salesboard::testkit::group::FakeGroup;
use salesboard::testkit::poster::RecordingPoster;

/// Group, poster, and a context sharing both.
pub struct Harness {
    pub group: FakeGroup,
    pub poster: RecordingPoster,
    pub ctx: BotContext,
}

impl Harness {
    pub fn new(group: FakeGroup, settings: PollSettings) -> Self {
        let poster = RecordingPoster::new();
        let ctx = BotContext::new(
            Arc::new(group.clone()),
            Arc::new(poster.clone()),
            settings,
        );
        Self { group, poster, ctx }
    }

    pub fn with_defaults(group: FakeGroup) -> Self {
        Self::new(group, PollSettings::default())
    }
}
