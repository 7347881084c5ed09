use std::hint::spin_loop;
use std::sync::atomic::{fence, AtomicU32, Ordering};

pub const UNLOCKED: u32 = 0;
pub const LOCKED: u32 = 1;

/// Lock word, `0` when free and `1` when held. Kept on its own cache line.
#[repr(align(64))]
#[derive(Debug, Default)]
pub struct LockWord {
    state: AtomicU32,
}

impl LockWord {
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            state: AtomicU32::new(UNLOCKED),
        }
    }

    /// Current raw value, read without ordering
    #[inline(always)]
    pub fn load(&self) -> u32 {
        self.state.load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub fn is_locked(&self) -> bool {
        self.load() != UNLOCKED
    }
}

/// A spinlock flavour. Implementors are stateless; all state lives in the
/// `LockWord`. Flavours differ only in `ACQUIRE_ORDERING`, which is applied
/// to the claiming compare-and-swap and to the fence that follows it.
pub trait SpinStrategy {
    /// Name reported in result lines
    const NAME: &'static str;
    /// Barrier issued on the success path of `try_acquire`
    const ACQUIRE_ORDERING: Ordering;

    /// Claims the word if it is free. A failed attempt has no side effect
    /// and issues no barrier.
    #[inline(always)]
    fn try_acquire(lock: &LockWord) -> bool {
        loop {
            if lock.state.load(Ordering::Relaxed) != UNLOCKED {
                return false;
            }
            // Weak CAS may fail spuriously like a lost reservation; reload and retry.
            if lock
                .state
                .compare_exchange_weak(UNLOCKED, LOCKED, Self::ACQUIRE_ORDERING, Ordering::Relaxed)
                .is_ok()
            {
                fence(Self::ACQUIRE_ORDERING);
                return true;
            }
        }
    }

    /// Busy-waits until the word is claimed. No yielding, no backoff.
    #[inline(always)]
    fn acquire(lock: &LockWord) {
        while !Self::try_acquire(lock) {
            spin_loop();
        }
    }

    /// Publishes prior writes, then frees the word. Identical for every flavour.
    #[inline(always)]
    fn release(lock: &LockWord) {
        fence(Ordering::Release);
        lock.state.store(UNLOCKED, Ordering::Relaxed);
    }
}

/// Acquire-only barrier after the claim (`isync` on POWER)
#[derive(Debug, Clone, Copy, Default)]
pub struct IsyncLock;

impl SpinStrategy for IsyncLock {
    const NAME: &'static str = "spin_isync_lock";
    const ACQUIRE_ORDERING: Ordering = Ordering::Acquire;
}

/// Combined release/acquire barrier after the claim (`lwsync` on POWER)
#[derive(Debug, Clone, Copy, Default)]
pub struct LwsyncLock;

impl SpinStrategy for LwsyncLock {
    const NAME: &'static str = "spin_lwsync_lock";
    const ACQUIRE_ORDERING: Ordering = Ordering::AcqRel;
}

/// Full sequentially consistent barrier after the claim (`sync` on POWER)
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncLock;

impl SpinStrategy for SyncLock {
    const NAME: &'static str = "spin_sync_lock";
    const ACQUIRE_ORDERING: Ordering = Ordering::SeqCst;
}
