use std::io;

use anyhow::{Context, Result};

use spinlock_barrier_bench::utils::{cpu, host};
use spinlock_barrier_bench::{
    init_logging, BenchConfig, MonotonicClock, ScheduleController, Strategy, TimingDriver,
};

fn main() -> Result<()> {
    init_logging();

    let hostname = host::hostname().context("reading host name")?;
    let processor_id = cpu::processor_id().context("reading processor identity")?;

    let stdout = io::stdout();
    let mut driver = TimingDriver::new(MonotonicClock, stdout.lock(), hostname, processor_id);

    ScheduleController::new(BenchConfig::default())
        .run(&mut driver, Strategy::run_trial)
        .context("running lock benchmark")?;

    Ok(())
}
