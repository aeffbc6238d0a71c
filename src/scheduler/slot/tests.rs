//! Slot record tests: occupancy, due-time test and run accounting.
use super::*;
use crate::{infra::clock::ManualClock, scheduler::RUN_ONCE};

type Slot = TimerSlot<ManualClock, 4>;

fn noop(_: u8) {}

fn occupied(delay: u32, max_runs: u8, now: u32) -> Slot {
    let mut slot = Slot::EMPTY;
    slot.occupy(Callback::Plain(noop), delay, max_runs, 7, now);
    slot
}

//==================================================================================OCCUPANCY
#[test]
/// The empty slot is free and disabled.
fn test_empty_slot_is_free() {
    let slot = Slot::EMPTY;
    assert!(!slot.is_occupied());
    assert!(!slot.is_armed());
}

#[test]
/// Occupying resets the counters and arms the slot.
fn test_occupy_arms_slot() {
    let mut slot = occupied(100, 3, 40);
    slot.run_count = 2;
    slot.occupy(Callback::Plain(noop), 10, 5, 1, 900);

    assert!(slot.is_armed());
    assert_eq!(slot.delay, 10);
    assert_eq!(slot.last_fire, 900);
    assert_eq!(slot.max_runs, 5);
    assert_eq!(slot.run_count, 0);
    assert_eq!(slot.param, 1);
}

#[test]
/// Clearing frees the slot but keeps the epoch, so the next registration differs.
fn test_clear_keeps_epoch() {
    let mut slot = occupied(100, RUN_ONCE, 0);
    let first_epoch = slot.epoch;
    slot.clear();
    assert!(!slot.is_occupied());
    assert!(!slot.enabled);
    assert_eq!(slot.delay, 0);
    assert_eq!(slot.epoch, first_epoch);

    // Clearing twice is harmless.
    slot.clear();
    assert!(!slot.is_occupied());

    slot.occupy(Callback::Plain(noop), 5, RUN_ONCE, 0, 0);
    assert_ne!(slot.epoch, first_epoch);
}

//==================================================================================DUE_TEST
#[test]
/// Due exactly when the elapsed time reaches the delay.
fn test_is_due_boundary() {
    let slot = occupied(100, RUN_FOREVER, 1_000);
    assert!(!slot.is_due(1_099));
    assert!(slot.is_due(1_100));
    assert!(slot.is_due(5_000));
}

#[test]
/// A zero delay is due on the very first poll.
fn test_zero_delay_is_always_due() {
    let slot = occupied(0, RUN_FOREVER, 1_000);
    assert!(slot.is_due(1_000));
}

#[test]
/// Elapsed time is recovered across the wrap of the clock.
fn test_is_due_across_wrap() {
    let slot = occupied(20, RUN_FOREVER, u32::MAX - 9);
    // 10 ms elapsed (MAX-9 .. MAX is 9 steps, then 0).
    assert!(!slot.is_due(0));
    // 20 ms elapsed.
    assert!(slot.is_due(10));
}

//==================================================================================RUN_ACCOUNTING
#[test]
/// Forever timers never report exhaustion and never count.
fn test_forever_never_exhausts() {
    let mut slot = occupied(1, RUN_FOREVER, 0);
    for _ in 0..1_000 {
        assert_eq!(slot.record_run(), RunOutcome::Pending);
    }
    assert_eq!(slot.run_count, 0);
    assert!(slot.has_runs_left());
}

#[test]
/// A bounded timer exhausts on its last run.
fn test_bounded_exhausts_on_last_run() {
    let mut slot = occupied(1, 3, 0);
    assert_eq!(slot.record_run(), RunOutcome::Pending);
    assert_eq!(slot.record_run(), RunOutcome::Pending);
    assert!(slot.has_runs_left());
    assert_eq!(slot.record_run(), RunOutcome::Exhausted);
    assert_eq!(slot.run_count, 3);
    assert!(!slot.has_runs_left());
}
