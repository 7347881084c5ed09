pub mod schedule;
pub mod timing;
pub mod trial;

pub use schedule::{ScheduleController, PERMUTATIONS, WARMUP};
pub use timing::{Clock, MonotonicClock, TimingDriver};
pub use trial::{run_trial, run_trial_on};
