pub mod spin;
pub mod strategy;

pub use spin::{IsyncLock, LockWord, LwsyncLock, SpinStrategy, SyncLock};
pub use strategy::Strategy;
