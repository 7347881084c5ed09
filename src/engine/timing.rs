use std::io::Write;

use nix::time::{clock_gettime, ClockId};
use tracing::trace;

use crate::core::error::{BenchError, Result};
use crate::core::types::{ProcessorId, Timespec, TrialResult, NANOS_PER_SEC};

/// Source of monotonic (seconds, nanoseconds) readings
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> Result<Timespec>;
}

/// `CLOCK_MONOTONIC`
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now(&self) -> Result<Timespec> {
        let ts = clock_gettime(ClockId::CLOCK_MONOTONIC).map_err(BenchError::Clock)?;
        Ok(Timespec::new(ts.tv_sec() as u64, ts.tv_nsec() as u32))
    }
}

/// `(end_s - start_s) * 1e9 + (end_ns - start_ns)`; a reading earlier than
/// `start` is an error, never a wrapped value.
pub fn elapsed_nanos(start: Timespec, end: Timespec) -> Result<u64> {
    let secs = end.secs as i128 - start.secs as i128;
    let nanos = end.nanos as i128 - start.nanos as i128;
    let elapsed = secs * NANOS_PER_SEC as i128 + nanos;
    u64::try_from(elapsed).map_err(|_| BenchError::ClockWentBackwards { start, end })
}

/// Times trials and streams one result line per trial
pub struct TimingDriver<C, W> {
    clock: C,
    out: W,
    hostname: String,
    processor_id: ProcessorId,
}

impl<C: Clock, W: Write> TimingDriver<C, W> {
    pub fn new(clock: C, out: W, hostname: String, processor_id: ProcessorId) -> Self {
        Self {
            clock,
            out,
            hostname,
            processor_id,
        }
    }

    /// Runs `job` between two clock reads and writes the result line
    /// immediately.
    pub fn time<F: FnOnce()>(&mut self, strategy: &str, job: F) -> Result<TrialResult> {
        let start = self.clock.now()?;
        job();
        let end = self.clock.now()?;

        let result = TrialResult {
            hostname: self.hostname.clone(),
            processor_id: self.processor_id,
            strategy: strategy.to_owned(),
            elapsed_ns: elapsed_nanos(start, end)?,
        };

        writeln!(self.out, "{}", result)?;
        self.out.flush()?;
        trace!(strategy, elapsed_ns = result.elapsed_ns, "trial complete");
        Ok(result)
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn processor_id(&self) -> ProcessorId {
        self.processor_id
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
