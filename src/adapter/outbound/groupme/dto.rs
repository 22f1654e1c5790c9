//! GroupMe wire types.
//!
//! Every field of the messages envelope is optional on purpose: a response
//! that is missing pieces decodes to fewer (or zero) messages rather than
//! failing the whole fetch.
//!
//! Example envelope:
//! ```json
//! {"response":{"count":2,"messages":[{"id":"171","name":"Ana","text":"$40","created_at":1717405200}]}}
//! ```

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::Message;

#[derive(Debug, Default, Deserialize)]
pub struct MessagesEnvelope {
    #[serde(default)]
    pub response: Option<MessagesPage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MessagesPage {
    #[serde(default)]
    pub messages: Option<Vec<GroupMeMessage>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupMeMessage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: i64,
}

impl GroupMeMessage {
    /// Convert to a domain [`Message`].
    ///
    /// Returns `None` for messages without an id, with blank text (joins,
    /// image-only posts, system events), or with an unrepresentable timestamp.
    #[must_use]
    pub fn into_message(self) -> Option<Message> {
        let id = self.id?;
        let text = self.text.filter(|t| !t.trim().is_empty())?;
        let created_at = DateTime::from_timestamp(self.created_at, 0)?;
        Some(Message::new(
            id,
            text,
            self.name.unwrap_or_default(),
            created_at,
        ))
    }
}

/// Decode a messages response body, newest first.
///
/// A body that is not a recognisable envelope yields no messages.
#[must_use]
pub fn decode_messages(body: &[u8]) -> Vec<Message> {
    let envelope: MessagesEnvelope = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(error = %e, "Malformed messages response, treating as empty");
            return Vec::new();
        }
    };

    let raw = envelope
        .response
        .and_then(|page| page.messages)
        .unwrap_or_default();
    let total = raw.len();
    let messages: Vec<Message> = raw
        .into_iter()
        .filter_map(GroupMeMessage::into_message)
        .collect();

    debug!(
        received = total,
        kept = messages.len(),
        "Decoded messages page"
    );
    messages
}

/// Body of `POST /bots/post`.
#[derive(Debug, Serialize)]
pub struct BotPostRequest<'a> {
    pub bot_id: &'a str,
    pub text: &'a str,
}
