use std::cell::Cell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::atomic::Ordering;

use crate::core::config::BenchConfig;
use crate::core::error::Result;
use crate::core::types::{ProcessorId, Timespec};
use crate::engine::schedule::{ScheduleController, PERMUTATIONS};
use crate::engine::timing::{Clock, TimingDriver};
use crate::engine::trial::run_trial;
use crate::lock::spin::{IsyncLock, LockWord, LwsyncLock, SpinStrategy, SyncLock};
use crate::lock::strategy::Strategy;
use crate::report::parse_line;

const NANOS_PER_PAIR: u64 = 5;

thread_local! {
    static PAIRS: Cell<u64> = Cell::new(0);
}

/// Real flavour that also ticks the simulated clock once per released pair
struct Ticking<S>(PhantomData<S>);

impl<S: SpinStrategy> SpinStrategy for Ticking<S> {
    const NAME: &'static str = S::NAME;
    const ACQUIRE_ORDERING: Ordering = S::ACQUIRE_ORDERING;

    fn try_acquire(lock: &LockWord) -> bool {
        assert!(!lock.is_locked(), "word held outside a critical section");
        S::try_acquire(lock)
    }

    fn release(lock: &LockWord) {
        assert!(lock.is_locked());
        S::release(lock);
        assert!(!lock.is_locked());
        PAIRS.with(|p| p.set(p.get() + 1));
    }
}

/// Clock that advances a fixed amount per acquire/release pair
struct PairClock;

impl Clock for PairClock {
    fn now(&self) -> Result<Timespec> {
        Ok(Timespec::from_nanos(PAIRS.with(Cell::get) * NANOS_PER_PAIR))
    }
}

fn run_ticking(strategy: Strategy, iterations: u64) {
    match strategy {
        Strategy::AcquireBarrier => run_trial::<Ticking<IsyncLock>>(iterations),
        Strategy::ReleaseAcquireBarrier => run_trial::<Ticking<LwsyncLock>>(iterations),
        Strategy::FullBarrier => run_trial::<Ticking<SyncLock>>(iterations),
    }
}

fn run_simulated(config: BenchConfig) -> (usize, String) {
    PAIRS.with(|p| p.set(0));
    let mut driver = TimingDriver::new(PairClock, Vec::new(), "node03".to_owned(), ProcessorId::new(0x4e1200));
    let emitted = ScheduleController::new(config)
        .run(&mut driver, run_ticking)
        .unwrap();
    (emitted, String::from_utf8(driver.into_inner()).unwrap())
}

#[test]
fn test_end_to_end_fixed_cost_per_pair() {
    let (emitted, out) = run_simulated(BenchConfig::with_iterations(1000));

    assert_eq!(emitted, 18);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 18);
    for line in lines {
        let result = parse_line(line).unwrap();
        assert_eq!(result.elapsed_ns, 5000, "{}", line);
        assert_eq!(result.hostname, "node03");
        assert_eq!(result.processor_id, ProcessorId::new(0x4e1200));
    }

    // Warm-up plus 18 timed trials, 1000 pairs each
    assert_eq!(PAIRS.with(Cell::get), 21 * 1000);
}

#[test]
fn test_output_follows_schedule_order() {
    let (_, out) = run_simulated(BenchConfig::with_iterations(3));

    let names: Vec<String> = out
        .lines()
        .map(|line| parse_line(line).unwrap().strategy)
        .collect();
    let expected: Vec<&str> = PERMUTATIONS
        .iter()
        .flatten()
        .map(|s| s.name())
        .collect();
    assert_eq!(names, expected);

    let rounds: Vec<&[String]> = names.chunks(3).collect();
    for (round, order) in rounds.iter().zip(PERMUTATIONS.iter()) {
        let order: Vec<&str> = order.iter().map(|s| s.name()).collect();
        assert_eq!(*round, order.as_slice());
    }
}

#[test]
fn test_every_strategy_timed_six_times() {
    let (_, out) = run_simulated(BenchConfig::with_iterations(1));

    let mut counts: HashMap<String, usize> = HashMap::new();
    for line in out.lines() {
        *counts.entry(parse_line(line).unwrap().strategy).or_default() += 1;
    }
    assert_eq!(counts.len(), 3);
    for s in Strategy::ALL {
        assert_eq!(counts[s.name()], 6);
    }
}

#[test]
fn test_warmup_runs_once_per_strategy_untimed() {
    let mut calls: Vec<Strategy> = Vec::new();
    PAIRS.with(|p| p.set(0));
    let mut driver = TimingDriver::new(PairClock, Vec::new(), "h".to_owned(), ProcessorId::new(1));
    ScheduleController::new(BenchConfig::with_iterations(2))
        .run(&mut driver, |s, n| {
            calls.push(s);
            run_ticking(s, n);
        })
        .unwrap();

    assert_eq!(calls.len(), 21);
    assert_eq!(&calls[..3], &Strategy::ALL[..]);
    for s in Strategy::ALL {
        assert_eq!(calls.iter().filter(|&&c| c == s).count(), 7);
    }
    assert_eq!(String::from_utf8(driver.into_inner()).unwrap().lines().count(), 18);
}

#[test]
fn test_warmup_can_be_disabled() {
    let config = BenchConfig {
        iterations: 10,
        warmup: false,
    };
    let (emitted, _) = run_simulated(config);
    assert_eq!(emitted, 18);
    assert_eq!(PAIRS.with(Cell::get), 18 * 10);
}

#[test]
fn test_zero_iterations_reports_zero() {
    let (emitted, out) = run_simulated(BenchConfig::with_iterations(0));
    assert_eq!(emitted, 18);
    assert!(out.lines().all(|line| parse_line(line).unwrap().elapsed_ns == 0));
}
