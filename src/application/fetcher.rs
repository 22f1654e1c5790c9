//! Walking back through the group's history to collect today's messages.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::domain::{Message, MessageId};
use crate::error::Result;
use crate::port::MessageSource;

/// Collect every message posted on `today` (UTC), newest first.
///
/// Pages backwards with each batch's oldest id as the next exclusive bound.
/// Pagination is reverse-chronological, so the first batch that reaches a
/// message from an earlier day is the last one needed. An empty batch also
/// ends the walk.
///
/// # Errors
///
/// Propagates the first failed fetch; nothing collected so far is returned.
pub async fn fetch_all_today(
    source: &dyn MessageSource,
    page_size: usize,
    today: NaiveDate,
) -> Result<Vec<Message>> {
    let mut collected = Vec::new();
    let mut before: Option<MessageId> = None;
    let mut pages = 0usize;

    loop {
        let batch = source.fetch_batch(page_size, before.as_ref()).await?;
        pages += 1;

        let Some(oldest) = batch.last().map(|m| m.id().clone()) else {
            break;
        };
        let reached_earlier_day = batch.iter().any(|m| m.created_on() < today);

        debug!(
            page = pages,
            fetched = batch.len(),
            reached_earlier_day,
            "Fetched history page"
        );

        collected.extend(batch.into_iter().filter(|m| m.created_on() == today));

        if reached_earlier_day {
            break;
        }
        if before.as_ref() == Some(&oldest) {
            warn!(before = %oldest, "Pagination did not advance, stopping");
            break;
        }
        before = Some(oldest);
    }

    debug!(pages, messages = collected.len(), %today, "Collected today's messages");
    Ok(collected)
}
