//! Cooperative timer scheduling: slot records and the table that dispatches
//! them from the host control loop.
//!
//! ## Run counts
//!
//! Every registration carries a `max_runs` byte. Two values have a name:
//!
//! - [`RUN_FOREVER`] (`0`): periodic timer, never deleted by the scheduler.
//! - [`RUN_ONCE`] (`1`): one-shot timer, freed right after it fires.
//!
//! Any other value `n` fires exactly `n` times before the slot is freed.

pub mod slot;
pub mod table;

/// Index of a slot in a [`TimerTable`](table::TimerTable).
///
/// Returned at registration and stable until the slot is deleted.
pub type TimerId = u8;

/// Default number of slots in a table.
pub const MAX_TIMERS: usize = 10;

/// `max_runs` sentinel: the timer fires on every due poll, indefinitely.
pub const RUN_FOREVER: u8 = 0;

/// `max_runs` for a one-shot timer.
pub const RUN_ONCE: u8 = 1;
