//! Cursor marking the newest message the listener has already handled.

use crate::domain::{Message, MessageId};

/// Single authoritative position marker owned by the listener.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watermark {
    last_seen: Option<MessageId>,
}

impl Watermark {
    #[must_use]
    pub const fn new(last_seen: Option<MessageId>) -> Self {
        Self { last_seen }
    }

    /// Watermark at the newest message of `window` (unset if it is empty).
    #[must_use]
    pub fn at_newest(window: &[Message]) -> Self {
        Self::new(window.first().map(|m| m.id().clone()))
    }

    #[must_use]
    pub const fn last_seen(&self) -> Option<&MessageId> {
        self.last_seen.as_ref()
    }

    /// Messages in `window` (newest first) that are newer than the watermark.
    ///
    /// If the watermark is unset or not present in the window, more may have
    /// arrived than the window holds, so the whole window counts as new.
    #[must_use]
    pub fn new_messages<'w>(&self, window: &'w [Message]) -> &'w [Message] {
        let Some(last_seen) = &self.last_seen else {
            return window;
        };
        match window.iter().position(|m| m.id() == last_seen) {
            Some(k) => &window[..k],
            None => window,
        }
    }

    /// Move to the newest message of `window`. An empty window leaves the
    /// position unchanged.
    pub fn advance(&mut self, window: &[Message]) {
        if let Some(newest) = window.first() {
            self.last_seen = Some(newest.id().clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{at, message};

    fn window(ids: &[&str]) -> Vec<Message> {
        let t = at(2024, 6, 3, 9, 0);
        ids.iter().map(|id| message(id, "Ana", "hi", t)).collect()
    }

    fn ids(messages: &[Message]) -> Vec<&str> {
        messages.iter().map(|m| m.id().as_str()).collect()
    }

    #[test]
    fn messages_before_watermark_are_new() {
        let mark = Watermark::new(Some("3".into()));
        let w = window(&["5", "4", "3", "2"]);

        assert_eq!(ids(mark.new_messages(&w)), vec!["5", "4"]);
    }

    #[test]
    fn watermark_at_top_means_nothing_new() {
        let mark = Watermark::new(Some("5".into()));
        let w = window(&["5", "4"]);

        assert!(mark.new_messages(&w).is_empty());
    }

    #[test]
    fn missing_watermark_treats_whole_window_as_new() {
        let mark = Watermark::new(Some("1".into()));
        let w = window(&["9", "8", "7"]);

        assert_eq!(ids(mark.new_messages(&w)), vec!["9", "8", "7"]);
    }

    #[test]
    fn unset_watermark_treats_whole_window_as_new() {
        let w = window(&["2", "1"]);

        assert_eq!(ids(Watermark::default().new_messages(&w)), vec!["2", "1"]);
    }

    #[test]
    fn advance_moves_to_newest_and_ignores_empty_window() {
        let mut mark = Watermark::at_newest(&window(&["3", "2"]));
        assert_eq!(mark.last_seen(), Some(&MessageId::new("3")));

        mark.advance(&window(&["6", "5", "4"]));
        assert_eq!(mark.last_seen(), Some(&MessageId::new("6")));

        mark.advance(&[]);
        assert_eq!(mark.last_seen(), Some(&MessageId::new("6")));
    }
}
