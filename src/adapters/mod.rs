//! Concrete implementations of the traits in [`crate::traits`].

pub mod clock;

pub use clock::{FixedClock, SystemClock};
