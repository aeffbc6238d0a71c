//! `slot-timer` library: fixed-capacity software timers for `no_std`
//! targets. A [`TimerTable`](scheduler::table::TimerTable) owns a static pool
//! of slots and dispatches due callbacks every time the host control loop
//! polls it. No allocation, no interrupts, no executor.
#![no_std]
//==================================================================================
/// Errors returned by timer registration.
pub mod error;
/// Millisecond clock sources consumed by the scheduler.
pub mod infra;
/// Timer slots and the dispatch table.
pub mod scheduler;
//==================================================================================

pub use error::TimerError;
pub use infra::clock::{Clock, EmbassyClock, ManualClock};
pub use scheduler::{
    slot::Callback, table::TimerTable, TimerId, MAX_TIMERS, RUN_FOREVER, RUN_ONCE,
};
