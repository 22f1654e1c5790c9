//! Recording [`BotPoster`] for assertions on outbound replies.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::port::BotPoster;

/// Thread-safe post collector.
///
/// Clones share the same log, so a test can keep one handle and give the
/// other to the code under test.
#[derive(Clone, Default)]
pub struct RecordingPoster {
    posts: Arc<Mutex<Vec<String>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingPoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent post fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Texts posted so far, oldest first. Failed posts are not recorded.
    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().expect("lock posts").clone()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().expect("lock posts").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BotPoster for RecordingPoster {
    async fn post(&self, text: &str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Io(std::io::Error::other("scripted post failure")));
        }
        self.posts.lock().expect("lock posts").push(text.to_string());
        Ok(())
    }
}
