//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!            ┌──────────────────────┐
//!            │     Application      │
//!            │  Listener, Snapshot  │
//!            └──────────┬───────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌──────────────┐          ┌────────────┐
//!   │MessageSource │          │ BotPoster  │
//!   │   (fetch)    │          │   (send)   │
//!   └──────────────┘          └────────────┘
//! ```
//!
//! Both ports are implemented by the GroupMe adapter and by the in-memory
//! doubles in `testkit`.

pub mod outbound;

pub use outbound::group::{BotPoster, MessageSource};
