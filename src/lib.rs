//! hrm - a terminal UI for hospital records
//!
//! Patients, doctors and appointments live in an in-memory [`store`]. The
//! [`app`] module owns that store together with all UI state; [`input`]
//! turns keys into commands, [`ui`] draws the screen and turns clicks into
//! actions. This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod forms;
pub mod input;
pub mod logging;
pub mod models;
pub mod store;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
