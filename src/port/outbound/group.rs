//! Group messaging port.
//!
//! Reading a page of messages and posting as the bot are the only two calls
//! the application makes against the outside world.

use async_trait::async_trait;

use crate::domain::{Message, MessageId};
use crate::error::Result;

/// Source of group messages, newest first.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Fetch one page of at most `limit` messages.
    ///
    /// With `before`, only messages strictly older than that id are returned.
    /// Blank messages are already filtered out, and a "not modified" answer
    /// comes back as an empty page.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected HTTP status.
    async fn fetch_batch(&self, limit: usize, before: Option<&MessageId>) -> Result<Vec<Message>>;
}

/// Outbound bot posts to the group.
#[async_trait]
pub trait BotPoster: Send + Sync {
    /// Post `text` to the group as the bot.
    ///
    /// # Errors
    ///
    /// Returns an error if the post could not be delivered.
    async fn post(&self, text: &str) -> Result<()>;
}
