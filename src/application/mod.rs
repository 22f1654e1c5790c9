//! Application services (use cases).
//!
//! Orchestrate domain logic over the outbound ports:
//!
//! - [`listener`] - continuous watermark-based polling loop
//! - [`snapshot`] - one-shot fetch and publish
//! - [`fetcher`] - today's history walk
//! - [`command`] - command dispatch
//! - [`store`] - today's sale set
//! - [`watermark`] - new-message cursor

pub mod command;
pub mod context;
pub mod fetcher;
pub mod listener;
pub mod snapshot;
pub mod store;
pub mod watermark;

pub use command::{reply_for, CommandProcessor, DispatchReport};
pub use context::{BotContext, PollSettings};
pub use fetcher::fetch_all_today;
pub use listener::{CycleReport, Listener};
pub use snapshot::{run_snapshot, SnapshotReport};
pub use store::SaleStore;
pub use watermark::Watermark;
