//! Command handlers for executing commands.
//!
//! This module contains handler functions organized by category:
//! - [`navigation`] - View switching and table actions
//! - [`form`] - Typing, focus and save/cancel inside a record form
//! - [`confirm`] - Answering a delete confirmation

pub mod confirm;
pub mod form;
pub mod navigation;

pub use confirm::*;
pub use form::*;
pub use navigation::*;
