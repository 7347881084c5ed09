use std::fmt;
use std::sync::atomic::Ordering;

use crate::engine::trial::run_trial;
use crate::lock::spin::{IsyncLock, LwsyncLock, SpinStrategy, SyncLock};

/// The three barrier strategies under measurement, as schedulable data
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Strategy {
    AcquireBarrier,
    ReleaseAcquireBarrier,
    FullBarrier,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::AcquireBarrier,
        Strategy::ReleaseAcquireBarrier,
        Strategy::FullBarrier,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::AcquireBarrier => IsyncLock::NAME,
            Strategy::ReleaseAcquireBarrier => LwsyncLock::NAME,
            Strategy::FullBarrier => SyncLock::NAME,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    pub const fn ordering(self) -> Ordering {
        match self {
            Strategy::AcquireBarrier => IsyncLock::ACQUIRE_ORDERING,
            Strategy::ReleaseAcquireBarrier => LwsyncLock::ACQUIRE_ORDERING,
            Strategy::FullBarrier => SyncLock::ACQUIRE_ORDERING,
        }
    }

    /// Runs a trial with this strategy. Dispatch happens once, outside the
    /// loop, so each flavour gets its own monomorphized hot path.
    pub fn run_trial(self, iterations: u64) {
        match self {
            Strategy::AcquireBarrier => run_trial::<IsyncLock>(iterations),
            Strategy::ReleaseAcquireBarrier => run_trial::<LwsyncLock>(iterations),
            Strategy::FullBarrier => run_trial::<SyncLock>(iterations),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
