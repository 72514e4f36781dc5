//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`Clock`] - Current date, read by the dashboard

pub mod clock;

pub use clock::Clock;
