//! Timer slot record: one fixed position of the table, either free or bound
//! to a single registration.
use core::fmt;

use super::{table::TimerTable, RUN_FOREVER};

//==================================================================================Enums and Structs
/// Action dispatched when a timer fires.
///
/// Both variants are plain function pointers so a slot stays `Copy` and the
/// table never allocates. The byte argument is the slot's `param`.
pub enum Callback<K, const N: usize = { super::MAX_TIMERS }> {
    /// Receives only the parameter byte.
    Plain(fn(u8)),
    /// Receives the table as well, so the action can register, delete,
    /// reschedule or toggle timers (including its own slot) while the
    /// dispatch pass is running.
    Table(fn(&mut TimerTable<K, N>, u8)),
}

impl<K, const N: usize> Clone for Callback<K, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, const N: usize> Copy for Callback<K, N> {}

impl<K, const N: usize> fmt::Debug for Callback<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Plain(_) => f.write_str("Callback::Plain"),
            Callback::Table(_) => f.write_str("Callback::Table"),
        }
    }
}

/// Bookkeeping result after a bounded timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum RunOutcome {
    /// More runs remain (or the timer runs forever).
    Pending,
    /// `run_count` reached `max_runs`; the slot must be freed in this pass.
    Exhausted,
}

/// One entry of the timer table.
///
/// Only `callback` decides occupancy. Every other field is meaningful only
/// while the slot is occupied, except `epoch`, which survives deletion so a
/// new registration in the same slot can be told apart from the old one.
pub(crate) struct TimerSlot<K, const N: usize> {
    pub(crate) callback: Option<Callback<K, N>>,
    pub(crate) delay: u32,
    pub(crate) last_fire: u32,
    pub(crate) max_runs: u8,
    pub(crate) run_count: u8,
    pub(crate) param: u8,
    pub(crate) enabled: bool,
    pub(crate) epoch: u16,
}

impl<K, const N: usize> Clone for TimerSlot<K, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, const N: usize> Copy for TimerSlot<K, N> {}

impl<K, const N: usize> fmt::Debug for TimerSlot<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerSlot")
            .field("callback", &self.callback)
            .field("delay", &self.delay)
            .field("last_fire", &self.last_fire)
            .field("max_runs", &self.max_runs)
            .field("run_count", &self.run_count)
            .field("param", &self.param)
            .field("enabled", &self.enabled)
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl<K, const N: usize> TimerSlot<K, N> {
    /// A free, disabled slot.
    pub(crate) const EMPTY: Self = Self {
        callback: None,
        delay: 0,
        last_fire: 0,
        max_runs: 0,
        run_count: 0,
        param: 0,
        enabled: false,
        epoch: 0,
    };

    #[inline]
    pub(crate) fn is_occupied(&self) -> bool {
        self.callback.is_some()
    }

    /// Occupied and enabled: the only slots the scheduler looks at.
    #[inline]
    pub(crate) fn is_armed(&self) -> bool {
        self.is_occupied() && self.enabled
    }

    #[inline]
    pub(crate) fn runs_forever(&self) -> bool {
        self.max_runs == RUN_FOREVER
    }

    /// `now - last_fire >= delay`, computed with wrapping subtraction so the
    /// test holds across a clock wrap.
    #[inline]
    pub(crate) fn is_due(&self, now: u32) -> bool {
        now.wrapping_sub(self.last_fire) >= self.delay
    }

    /// Bind the slot to a new registration.
    pub(crate) fn occupy(
        &mut self,
        callback: Callback<K, N>,
        delay: u32,
        max_runs: u8,
        param: u8,
        now: u32,
    ) {
        self.callback = Some(callback);
        self.delay = delay;
        self.last_fire = now;
        self.max_runs = max_runs;
        self.run_count = 0;
        self.param = param;
        self.enabled = true;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Return the slot to the free state. Safe to call on a free slot.
    pub(crate) fn clear(&mut self) {
        self.callback = None;
        self.enabled = false;
        self.delay = 0;
    }

    /// Whether a bounded timer still has runs left. Always true for forever timers.
    #[inline]
    pub(crate) fn has_runs_left(&self) -> bool {
        self.runs_forever() || self.run_count < self.max_runs
    }

    /// Account for one completed firing of a bounded timer.
    pub(crate) fn record_run(&mut self) -> RunOutcome {
        if self.runs_forever() {
            return RunOutcome::Pending;
        }
        self.run_count = self.run_count.saturating_add(1);
        if self.run_count >= self.max_runs {
            RunOutcome::Exhausted
        } else {
            RunOutcome::Pending
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
