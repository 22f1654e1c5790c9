//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`group`] - In-memory [`MessageSource`](crate::port::MessageSource)
//!   that pages like the real API: `FakeGroup`.
//! - [`poster`] - [`BotPoster`](crate::port::BotPoster) that records posts:
//!   `RecordingPoster`.
//! - [`domain`] - Builders for messages, sales, and timestamps.

pub mod domain;
pub mod group;
pub mod poster;
