//! Millisecond clock abstraction.
//!
//! The scheduler only ever asks "what time is it now?" and compares two
//! readings with wrapping subtraction. Any source that increases
//! monotonically and wraps at `u32::MAX` can drive a table:
//!
//! * [`EmbassyClock`] reads the `embassy-time` driver of the board;
//! * [`ManualClock`] is a software counter for host simulation and tests;
//! * any `&T` where `T: Clock`, so the owner can keep a handle on the clock
//!   it lends to a table.
use core::cell::Cell;

use embassy_time::Instant;

//==================================================================================CLOCK
/// Source of the current time in milliseconds.
///
/// Readings must be non-decreasing except for the wrap from `u32::MAX` back
/// to `0`. The scheduler never assumes wall-clock semantics.
pub trait Clock {
    /// Current reading, in milliseconds.
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    #[inline]
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

//==================================================================================EMBASSY_CLOCK
/// Clock backed by the `embassy-time` driver.
///
/// The 64-bit embassy instant is truncated to its low 32 bits, which makes
/// the reading wrap every 2^32 ms (about 49.7 days).
///
/// # Example
///
/// ```rust,ignore
/// use slot_timer::{EmbassyClock, TimerTable};
///
/// let mut timers: TimerTable<EmbassyClock> = TimerTable::new(EmbassyClock);
/// loop {
///     timers.run();
/// }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    #[inline]
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

//==================================================================================MANUAL_CLOCK
/// Software clock advanced by hand.
///
/// Time only moves when [`set`](Self::set) or [`advance`](Self::advance) is
/// called, which makes dispatch fully deterministic. Arithmetic wraps at
/// `u32::MAX` exactly like a hardware millisecond counter.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    /// Create a clock frozen at `start` milliseconds.
    pub const fn new(start: u32) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Jump to an absolute reading.
    #[inline]
    pub fn set(&self, millis: u32) {
        self.now.set(millis);
    }

    /// Move forward by `millis`, wrapping past `u32::MAX`.
    /// Returns the new reading.
    #[inline]
    pub fn advance(&self, millis: u32) -> u32 {
        let next = self.now.get().wrapping_add(millis);
        self.now.set(next);
        next
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
