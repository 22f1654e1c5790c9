//! Chat messages as fetched from the group.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::id::MessageId;

/// A user-authored message in the group.
///
/// Immutable once fetched. Batches of messages are always ordered newest
/// first, matching the order the API returns them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    text: String,
    author: String,
    created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: impl Into<MessageId>,
        text: impl Into<String>,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            author: author.into(),
            created_at,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display name of the sender.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Calendar date (UTC) the message was posted on.
    #[must_use]
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// True when the text is empty or whitespace only (joins, system events).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
