//! Error definitions for the timer table.
//! Only registration can fail; every index-based operation silently ignores
//! out-of-range indices instead of reporting them.
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while registering a timer.
pub enum TimerError {
    /// Every slot of the table is occupied.
    #[error("Timer capacity exceeded: all {capacity} slots are occupied")]
    CapacityExceeded { capacity: usize },
}
