use std::hint::black_box;

use crate::lock::spin::{LockWord, SpinStrategy};

/// Runs `iterations` acquire/release pairs on a fresh lock word
#[inline(always)]
pub fn run_trial<S: SpinStrategy>(iterations: u64) {
    let lock = LockWord::new();
    run_trial_on::<S>(&lock, iterations);
}

/// Runs `iterations` acquire/release pairs on the given lock word.
/// The word is unlocked again when this returns.
#[inline(never)]
pub fn run_trial_on<S: SpinStrategy>(lock: &LockWord, iterations: u64) {
    // Keep the word observable so the atomics cannot be folded away
    let lock = black_box(lock);
    for _ in 0..iterations {
        S::acquire(lock);
        S::release(lock);
    }
}
