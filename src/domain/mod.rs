//! Domain layer - pure types and rules with no I/O.
//!
//! - [`message`] - chat messages as fetched from the group
//! - [`sale`] - sale extraction from message text
//! - [`leaderboard`] - per-author aggregation and report rendering
//! - [`command`] - recognised chat commands
//! - [`money`] - currency formatting

pub mod command;
pub mod error;
pub mod id;
pub mod leaderboard;
pub mod message;
pub mod money;
pub mod sale;

pub use command::{parse_command, ChatCommand, CommandParseError};
pub use error::DomainError;
pub use id::MessageId;
pub use leaderboard::{Leaderboard, LeaderboardRow, NO_SALES_MESSAGE};
pub use message::Message;
pub use money::{add_capped, format_usd, sum_capped};
pub use sale::{parse_sale, Sale, SaleParse};
