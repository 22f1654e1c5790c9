//! GroupMe integration.

mod client;
pub mod dto;
pub mod settings;

pub use client::GroupMeClient;
pub use settings::{GroupMeConfig, GroupMeHttpConfig};
