// Spinlock acquire-barrier micro-benchmark
// Core modules
pub mod core;
pub mod engine;
pub mod lock;
pub mod report;
pub mod utils;

// Re-exports of common types
pub use crate::core::config::BenchConfig;
pub use crate::core::error::{BenchError, Result};
pub use crate::core::types::{ProcessorId, Timespec, TrialResult, NR_LOOPS};
pub use crate::engine::schedule::ScheduleController;
pub use crate::engine::timing::{Clock, MonotonicClock, TimingDriver};
pub use crate::lock::strategy::Strategy;

// Logging
pub use tracing;

use tracing_subscriber::EnvFilter;

// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the log subscriber. Logs go to stderr so stdout carries only
/// result lines. `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests;
