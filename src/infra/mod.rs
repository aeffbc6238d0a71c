//! Infrastructure consumed by the scheduler: the millisecond clock
//! abstraction and its stock implementations.
pub mod clock;
