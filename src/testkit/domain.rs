//! Builders for domain primitives used across tests.
//!
//! Keeps construction short so tests focus on assertions.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::{Message, Sale};

/// UTC timestamp from calendar parts.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid test timestamp")
}

/// UTC calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Create a [`Message`].
pub fn message(id: &str, author: &str, text: &str, created_at: DateTime<Utc>) -> Message {
    Message::new(id, text, author, created_at)
}

/// Create a [`Sale`].
pub fn sale(author: &str, amount: Decimal) -> Sale {
    Sale::try_new(amount, author).expect("non-negative test amount")
}
