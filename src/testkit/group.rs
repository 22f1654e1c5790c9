//! In-memory group that pages like the messages endpoint.
//!
//! Messages are kept newest first. `fetch_batch` slices a page of raw
//! messages and only then drops blank ones, so a page can come back shorter
//! than `limit` exactly as it does against the real API.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{Message, MessageId};
use crate::error::{Error, Result};
use crate::port::MessageSource;

/// A recorded `fetch_batch` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub limit: usize,
    pub before: Option<MessageId>,
}

#[derive(Default)]
struct GroupState {
    messages: Vec<Message>,
    failures: VecDeque<Option<Error>>,
    calls: Vec<FetchCall>,
}

/// Shared, cloneable fake message source.
#[derive(Clone, Default)]
pub struct FakeGroup {
    state: Arc<Mutex<GroupState>>,
}

impl FakeGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with messages given newest first.
    pub fn with_messages(messages: Vec<Message>) -> Self {
        let group = Self::new();
        group.state.lock().expect("lock group").messages = messages;
        group
    }

    /// Post a new message; it becomes the newest.
    pub fn push(&self, message: Message) {
        self.state
            .lock()
            .expect("lock group")
            .messages
            .insert(0, message);
    }

    /// Fail the next `count` fetches with a server error.
    pub fn fail_next(&self, count: usize) {
        self.fail_after(0, count);
    }

    /// Let `skip` fetches through, then fail the `count` after them.
    pub fn fail_after(&self, skip: usize, count: usize) {
        let mut state = self.state.lock().expect("lock group");
        state.failures.clear();
        state.failures.extend((0..skip).map(|_| None));
        state.failures.extend((0..count).map(|_| {
            Some(Error::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                url: "fake://group/messages".to_string(),
            })
        }));
    }

    /// Every fetch made so far, in order.
    pub fn calls(&self) -> Vec<FetchCall> {
        self.state.lock().expect("lock group").calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().expect("lock group").calls.clear();
    }
}

#[async_trait]
impl MessageSource for FakeGroup {
    async fn fetch_batch(&self, limit: usize, before: Option<&MessageId>) -> Result<Vec<Message>> {
        let mut state = self.state.lock().expect("lock group");
        state.calls.push(FetchCall {
            limit,
            before: before.cloned(),
        });

        if let Some(Some(err)) = state.failures.pop_front() {
            return Err(err);
        }

        let start = match before {
            None => 0,
            Some(id) => match state.messages.iter().position(|m| m.id() == id) {
                Some(index) => index + 1,
                None => return Ok(Vec::new()),
            },
        };

        Ok(state
            .messages
            .iter()
            .skip(start)
            .take(limit)
            .filter(|m| !m.is_blank())
            .cloned()
            .collect())
    }
}
