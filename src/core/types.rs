use std::fmt;

/// Lock/unlock cycles executed by every trial
pub const NR_LOOPS: u64 = 100_000_000;

/// Upper bound on the reported host name, in bytes
pub const HOST_NAME_MAX: usize = 64;

pub const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Monotonic clock reading split into whole seconds and nanoseconds
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Timespec {
    pub secs: u64,
    pub nanos: u32,
}

impl Timespec {
    #[inline(always)]
    pub const fn new(secs: u64, nanos: u32) -> Self {
        Self { secs, nanos }
    }

    /// Splits a nanosecond count into a normalized reading
    #[inline(always)]
    pub const fn from_nanos(total: u64) -> Self {
        Self {
            secs: total / NANOS_PER_SEC,
            nanos: (total % NANOS_PER_SEC) as u32,
        }
    }
}

/// Opaque fingerprint of the processor model
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProcessorId(u64);

impl ProcessorId {
    #[inline(always)]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::LowerHex for ProcessorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Outcome of one timed trial, serialized as soon as it is produced
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TrialResult {
    pub hostname: String,
    pub processor_id: ProcessorId,
    pub strategy: String,
    pub elapsed_ns: u64,
}
