//! Test doubles to record timer firings and drive a simulated control loop.
use slot_timer::{ManualClock, TimerTable};
use std::cell::RefCell;

thread_local! {
    // One log per test thread: `(clock reading, param)` for every firing.
    static FIRINGS: RefCell<Vec<(u32, u8)>> = const { RefCell::new(Vec::new()) };
    static NOW: RefCell<u32> = const { RefCell::new(0) };
}

#[allow(dead_code)]
/// Plain callback appending `(now, param)` to the thread's log.
pub fn record(param: u8) {
    let now = NOW.with(|now| *now.borrow());
    FIRINGS.with(|log| log.borrow_mut().push((now, param)));
}

#[allow(dead_code)]
/// Every firing recorded so far on this thread.
pub fn firings() -> Vec<(u32, u8)> {
    FIRINGS.with(|log| log.borrow().clone())
}

#[allow(dead_code)]
/// Parameters of every firing recorded so far on this thread.
pub fn params() -> Vec<u8> {
    firings().into_iter().map(|(_, param)| param).collect()
}

#[allow(dead_code)]
/// Host loop stand-in: advance the clock by `step` ms and poll, `ticks` times.
pub fn drive<const N: usize>(
    table: &mut TimerTable<&ManualClock, N>,
    clock: &ManualClock,
    step: u32,
    ticks: u32,
) {
    for _ in 0..ticks {
        let now = clock.advance(step);
        NOW.with(|cell| *cell.borrow_mut() = now);
        table.run();
    }
}
