pub mod config;
pub mod error;
pub mod types;

pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use types::{ProcessorId, Timespec, TrialResult, HOST_NAME_MAX, NR_LOOPS};
