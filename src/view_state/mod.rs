//! View-only projections of the record store.
//!
//! UI rendering is a pure function of these values: the `ui` module never
//! reads the store directly. Projections are recomputed from the live store
//! on every frame, so a mutation is visible as soon as the next frame is
//! drawn.
//!
//! ```text
//! RecordStore ──▶ TableProjection / DashboardSummary ──▶ ui::render
//! ```
//!
//! ## Components
//!
//! - [`TableProjection`]: header plus one row per record, or an empty message
//! - [`DashboardSummary`]: totals and the upcoming-appointments list

mod dashboard;
mod tables;

pub use dashboard::{DashboardSummary, UpcomingAppointment, NO_UPCOMING_MESSAGE, UPCOMING_LIMIT};
pub use tables::{appointment_table, doctor_table, patient_table, table_for, TableProjection, TableRow};
