// ABOUTME: Logging setup shared by the tokenvars crates, built on tracing
// ABOUTME: Re-exports the tracing macros so callers depend on this crate alone

pub mod config;
pub mod layers;
pub mod performance;
pub mod subscriber;

#[cfg(test)]
mod structured_tests;

pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

pub use config::{LogLevel, LoggingConfig};
pub use performance::PerfTimer;
pub use subscriber::{LoggingGuard, init_subscriber};

use anyhow::Result;

/// Install the global subscriber described by `config`.
///
/// Keep the returned guard alive for as long as file output should be written.
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<LoggingGuard> {
    init_subscriber(config)
}
