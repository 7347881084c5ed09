use std::io::Write;

use tracing::{debug, info};

use crate::core::config::BenchConfig;
use crate::core::error::Result;
use crate::engine::timing::{Clock, TimingDriver};
use crate::lock::strategy::Strategy;

const ISYNC: Strategy = Strategy::AcquireBarrier;
const LWSYNC: Strategy = Strategy::ReleaseAcquireBarrier;
const SYNC: Strategy = Strategy::FullBarrier;

/// Untimed pass run before the first round
pub const WARMUP: [Strategy; 3] = [ISYNC, LWSYNC, SYNC];

/// One round per permutation of the three strategies
pub const PERMUTATIONS: [[Strategy; 3]; 6] = [
    [ISYNC, LWSYNC, SYNC],
    [ISYNC, SYNC, LWSYNC],
    [LWSYNC, ISYNC, SYNC],
    [LWSYNC, SYNC, ISYNC],
    [SYNC, ISYNC, LWSYNC],
    [SYNC, LWSYNC, ISYNC],
];

/// Timed trials in the order they run
pub fn timed_trials() -> impl Iterator<Item = Strategy> {
    PERMUTATIONS.into_iter().flatten()
}

/// Drives the fixed experiment: warm-up, then every permutation round
pub struct ScheduleController {
    config: BenchConfig,
}

impl ScheduleController {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Executes the schedule, calling `run_trial(strategy, iterations)` for
    /// every trial. Returns the number of timed trials written.
    pub fn run<C, W, F>(&self, driver: &mut TimingDriver<C, W>, mut run_trial: F) -> Result<usize>
    where
        C: Clock,
        W: Write,
        F: FnMut(Strategy, u64),
    {
        let iterations = self.config.iterations;
        info!(
            host = driver.hostname(),
            processor_id = driver.processor_id().as_u64(),
            iterations,
            "starting lock benchmark"
        );

        if self.config.warmup {
            for strategy in WARMUP {
                debug!(%strategy, ordering = ?strategy.ordering(), "warm-up");
                run_trial(strategy, iterations);
            }
        }

        let mut emitted = 0;
        for (round, order) in PERMUTATIONS.iter().enumerate() {
            debug!(round, ?order, "starting round");
            for &strategy in order {
                driver.time(strategy.name(), || run_trial(strategy, iterations))?;
                emitted += 1;
            }
        }

        info!(trials = emitted, "lock benchmark complete");
        Ok(emitted)
    }
}
