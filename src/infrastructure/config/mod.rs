//! Infrastructure configuration modules.

pub mod logging;
pub mod polling;
pub mod settings;

pub use logging::LoggingConfig;
pub use polling::PollingConfig;
pub use settings::Config;
