//! Salesboard - a sales leaderboard bot for a GroupMe group.
//!
//! Members post sales as plain dollar amounts (`$1,250.50`). The bot keeps
//! today's totals per member and answers two chat commands: `!leaderboard`
//! posts the ranked totals and `!mysales` replies with the sender's own total.
//!
//! # Architecture
//!
//! - [`domain`] - Sales, messages, parsing, and leaderboard rendering
//! - [`port`] - Traits for reading group history and posting as the bot
//! - [`application`] - Day fetch, sale store, command dispatch, listener, snapshot
//! - [`adapter`] - GroupMe HTTP client and the command-line interface
//! - [`infrastructure`] - Configuration, logging, and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - In-memory group and poster doubles for tests
//!
//! # Example
//!
//! ```
//! use salesboard::domain::{parse_sale, Leaderboard};
//!
//! let sales: Vec<_> = [("Ana", "$10"), ("Bo", "$25.50"), ("Ana", "$5")]
//!     .into_iter()
//!     .filter_map(|(author, text)| parse_sale(text, author).into_sale())
//!     .collect();
//!
//! let board = Leaderboard::from_sales(&sales);
//! assert_eq!(board.rows()[0].author, "Bo");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
