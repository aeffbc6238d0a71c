//! Fixed-capacity timer table polled from the host control loop.
//!
//! The table owns `N` slots and a [`Clock`]. Timers are registered into the
//! first free slot and identified by that slot's index afterwards. Each call
//! to [`TimerTable::poll_once`] scans every slot in index order, fires the
//! due ones inline, and frees the timers that just ran for the last time.
//!
//! # Clock wraparound
//!
//! Elapsed time is `now.wrapping_sub(last_fire)`, which stays correct when the
//! millisecond counter wraps at `u32::MAX`, as long as the host polls at least
//! once every 2^32 ms.
//!
//! # Drift
//!
//! A periodic timer is re-armed from the reading at which it was *observed*
//! due, not from its theoretical deadline. Late polls therefore push every
//! later firing back by the same amount.
//!
//! # Re-entrant callbacks
//!
//! A [`Callback::Table`] action receives the table while the scan is running.
//! The scan re-reads each slot when it reaches it, so:
//!
//! * deleting or disabling a later slot prevents it from firing in this pass;
//! * a timer registered into a later free slot with a zero delay may fire in
//!   this pass;
//! * if an action deletes (or deletes and re-registers) its own slot, the run
//!   accounting of the old registration is dropped and the new one is left
//!   untouched.
use crate::{
    error::TimerError,
    infra::clock::Clock,
    scheduler::{
        slot::{Callback, RunOutcome, TimerSlot},
        TimerId, MAX_TIMERS, RUN_FOREVER, RUN_ONCE,
    },
};

/// Table of `N` software timers driven by the clock `K`.
///
/// # Example
///
/// ```
/// use slot_timer::{Callback, ManualClock, TimerTable};
///
/// fn blink(led: u8) {
///     let _ = led;
/// }
///
/// let clock = ManualClock::new(0);
/// let mut timers: TimerTable<&ManualClock> = TimerTable::new(&clock);
///
/// let id = timers.set_interval(500, Callback::Plain(blink)).unwrap();
/// assert!(timers.is_enabled(id));
///
/// clock.advance(500);
/// timers.run();
/// assert_eq!(timers.count_active(), 1);
/// ```
#[derive(Debug)]
pub struct TimerTable<K, const N: usize = MAX_TIMERS> {
    slots: [TimerSlot<K, N>; N],
    clock: K,
}

impl<K: Default + Clock, const N: usize> Default for TimerTable<K, N> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

impl<K: Clock, const N: usize> TimerTable<K, N> {
    /// Indices and counts are reported as `u8`.
    const CAPACITY_FITS_U8: () = assert!(N <= u8::MAX as usize, "timer table too large");

    /// Create a table with every slot free.
    pub const fn new(clock: K) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_FITS_U8;
        Self {
            slots: [TimerSlot::EMPTY; N],
            clock,
        }
    }

    //==================================================================================Registration
    /// Register a timer firing every `delay` ms, `max_runs` times
    /// ([`RUN_FOREVER`] for unbounded). The callback receives the slot index.
    ///
    /// Returns the index of the allocated slot.
    ///
    /// # Errors
    ///
    /// [`TimerError::CapacityExceeded`] when every slot is occupied.
    pub fn register_timer(
        &mut self,
        delay: u32,
        callback: Callback<K, N>,
        max_runs: u8,
    ) -> Result<TimerId, TimerError> {
        let index = self.free_slot()?;
        self.occupy(index, delay, callback, max_runs, index);
        Ok(index)
    }

    /// Same as [`register_timer`](Self::register_timer) but the callback
    /// receives `param` instead of the slot index.
    pub fn register_timer_with_param(
        &mut self,
        delay: u32,
        callback: Callback<K, N>,
        max_runs: u8,
        param: u8,
    ) -> Result<TimerId, TimerError> {
        let index = self.free_slot()?;
        self.occupy(index, delay, callback, max_runs, param);
        Ok(index)
    }

    /// Call `callback` every `delay` ms until deleted.
    pub fn set_interval(
        &mut self,
        delay: u32,
        callback: Callback<K, N>,
    ) -> Result<TimerId, TimerError> {
        self.register_timer(delay, callback, RUN_FOREVER)
    }

    /// Call `callback` once, `delay` ms from now.
    pub fn set_timeout(
        &mut self,
        delay: u32,
        callback: Callback<K, N>,
    ) -> Result<TimerId, TimerError> {
        self.register_timer(delay, callback, RUN_ONCE)
    }

    /// First-fit search. Capacity is decided by occupancy alone: a disabled
    /// timer still holds its slot.
    fn free_slot(&self) -> Result<TimerId, TimerError> {
        match self.slots.iter().position(|slot| !slot.is_occupied()) {
            Some(index) => Ok(index as TimerId),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("No free timer slot ({} occupied)", N);
                Err(TimerError::CapacityExceeded { capacity: N })
            }
        }
    }

    fn occupy(
        &mut self,
        index: TimerId,
        delay: u32,
        callback: Callback<K, N>,
        max_runs: u8,
        param: u8,
    ) {
        let now = self.clock.now_ms();
        self.slots[index as usize].occupy(callback, delay, max_runs, param, now);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Timer {} registered: delay {} ms, max runs {}, param {}",
            index,
            delay,
            max_runs,
            param
        );
    }

    //==================================================================================Dispatch
    /// Poll with the table's own clock.
    #[inline]
    pub fn run(&mut self) {
        let now = self.clock.now_ms();
        self.poll_once(now);
    }

    /// Fire every enabled timer that is due at `now`, in slot order.
    ///
    /// Bounded timers are freed inside this call, right after their last run,
    /// so their slot can be reused before the next poll.
    pub fn poll_once(&mut self, now: u32) {
        for index in 0..N {
            let slot = &mut self.slots[index];
            if !slot.is_armed() || !slot.is_due(now) {
                continue;
            }

            slot.last_fire = now;
            if !slot.has_runs_left() {
                continue;
            }

            let (callback, param, epoch) = match slot.callback {
                Some(callback) => (callback, slot.param, slot.epoch),
                None => continue,
            };

            #[cfg(feature = "defmt")]
            defmt::trace!("Timer {} fired at {} ms", index, now);

            self.invoke(callback, param);

            // The action may have deleted or replaced this registration.
            let slot = &mut self.slots[index];
            if slot.epoch != epoch || !slot.is_occupied() {
                continue;
            }

            if slot.record_run() == RunOutcome::Exhausted {
                #[cfg(feature = "defmt")]
                defmt::trace!("Timer {} exhausted after {} runs", index, slot.run_count);
                self.delete_slot(index as TimerId);
            }
        }
    }

    fn invoke(&mut self, callback: Callback<K, N>, param: u8) {
        match callback {
            Callback::Plain(action) => action(param),
            Callback::Table(action) => action(self, param),
        }
    }

    //==================================================================================Slot control
    /// Free the slot at `index`. Out-of-range or already free indices are ignored,
    /// and nothing is touched while the table holds no timer at all.
    pub fn delete_slot(&mut self, index: TimerId) {
        if index as usize >= N || self.count_occupied() == 0 {
            return;
        }
        let slot = &mut self.slots[index as usize];
        if slot.is_occupied() {
            #[cfg(feature = "defmt")]
            defmt::debug!("Timer {} deleted", index);
        }
        slot.clear();
    }

    /// Whether the slot at `index` is enabled. `false` when out of range.
    pub fn is_enabled(&self, index: TimerId) -> bool {
        self.slots
            .get(index as usize)
            .map(|slot| slot.enabled)
            .unwrap_or(false)
    }

    /// Let the scheduler consider the slot again.
    pub fn enable(&mut self, index: TimerId) {
        if let Some(slot) = self.slots.get_mut(index as usize) {
            slot.enabled = true;
        }
    }

    /// Skip the slot while keeping its state.
    pub fn disable(&mut self, index: TimerId) {
        if let Some(slot) = self.slots.get_mut(index as usize) {
            slot.enabled = false;
        }
    }

    /// Flip the enabled flag of the slot.
    pub fn toggle(&mut self, index: TimerId) {
        if let Some(slot) = self.slots.get_mut(index as usize) {
            slot.enabled = !slot.enabled;
        }
    }

    /// Change the delay of a slot and restart its countdown from the current
    /// clock reading. Run counts are untouched.
    pub fn reschedule(&mut self, index: TimerId, new_delay: u32) {
        let now = self.clock.now_ms();
        if let Some(slot) = self.slots.get_mut(index as usize) {
            slot.delay = new_delay;
            slot.last_fire = now;
        }
    }

    //==================================================================================Queries
    /// Number of slots that are both occupied and enabled.
    pub fn count_active(&self) -> u8 {
        self.slots.iter().filter(|slot| slot.is_armed()).count() as u8
    }

    /// Number of occupied slots, enabled or not.
    pub fn count_occupied(&self) -> u8 {
        self.slots.iter().filter(|slot| slot.is_occupied()).count() as u8
    }

    /// Whether a registration currently holds the slot at `index`.
    pub fn is_occupied(&self, index: TimerId) -> bool {
        self.slots
            .get(index as usize)
            .map(|slot| slot.is_occupied())
            .unwrap_or(false)
    }

    /// Number of slots in the table.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn clock(&self) -> &K {
        &self.clock
    }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut K {
        &mut self.clock
    }
}
