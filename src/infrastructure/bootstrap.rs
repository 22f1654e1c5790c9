//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::groupme::GroupMeClient;
use crate::application::context::BotContext;
use crate::infrastructure::config::settings::Config;
use crate::port::{BotPoster, MessageSource};

/// Build the bot context for the configured group.
///
/// One HTTP client serves as both the message source and the bot poster.
#[must_use]
pub fn build_context(config: &Config) -> BotContext {
    let client = Arc::new(GroupMeClient::from_config(&config.groupme));
    let source: Arc<dyn MessageSource> = client.clone();
    let poster: Arc<dyn BotPoster> = client;

    info!(
        group_id = %config.groupme.group_id,
        bot_id = %config.groupme.bot_id,
        user_id = %config.groupme.user_id,
        "GroupMe client ready"
    );

    BotContext::new(source, poster, config.poll_settings())
}
