//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - operator CLI and console
//! - [`outbound`] - GroupMe REST client

pub mod inbound;
pub mod outbound;
