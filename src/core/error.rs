use thiserror::Error;

use crate::core::types::Timespec;

/// Environment faults. Every one of them aborts the run: a partial or
/// guessed measurement is worse than none.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Host name lookup failed: {0}")]
    Hostname(nix::errno::Errno),
    #[error("Processor identity unavailable: {0}")]
    ProcessorId(String),
    #[error("Monotonic clock read failed: {0}")]
    Clock(nix::errno::Errno),
    #[error("Monotonic clock went backwards: {start:?} -> {end:?}")]
    ClockWentBackwards { start: Timespec, end: Timespec },
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
    #[error("Malformed result line: {0}")]
    MalformedLine(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
