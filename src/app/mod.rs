//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`View`] - Which view is currently displayed
//! - [`ViewRouter`] - Switching between views
//! - [`PendingDelete`] - A delete waiting for confirmation
//! - [`RowAction`] - Per-row Edit/Delete buttons
//!
//! `App` owns the record store and every piece of UI state. Input handlers
//! borrow it mutably, the renderer borrows it to draw, and nothing else
//! holds on to it.

mod actions;
mod navigation;
mod router;
mod types;

pub use router::ViewRouter;
pub use types::{PendingDelete, RowAction, View};

use chrono::NaiveDate;

use crate::adapters::{FixedClock, SystemClock};
use crate::config::AppConfig;
use crate::forms::{AppointmentForm, DoctorForm, FormController, PatientForm};
use crate::models::EntityKind;
use crate::store::RecordStore;
use crate::traits::Clock;
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::{table_for, DashboardSummary, TableProjection};

/// Row cursor of each table view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSelection {
    pub patients: usize,
    pub doctors: usize,
    pub appointments: usize,
}

impl TableSelection {
    pub fn get(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Patient => self.patients,
            EntityKind::Doctor => self.doctors,
            EntityKind::Appointment => self.appointments,
        }
    }

    pub fn get_mut(&mut self, kind: EntityKind) -> &mut usize {
        match kind {
            EntityKind::Patient => &mut self.patients,
            EntityKind::Doctor => &mut self.doctors,
            EntityKind::Appointment => &mut self.appointments,
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Patients, doctors and appointments
    pub store: RecordStore,
    /// Active view
    pub router: ViewRouter,
    pub patient_form: PatientForm,
    pub doctor_form: DoctorForm,
    pub appointment_form: AppointmentForm,
    /// Delete awaiting a yes/no answer
    pub confirm: Option<PendingDelete>,
    /// Selected row per table
    pub selection: TableSelection,
    /// Source of "today" for the dashboard
    pub clock: Box<dyn Clock>,
    /// Clickable regions registered during the last render
    pub hit_registry: HitAreaRegistry,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Whether the next loop iteration should draw a frame
    pub needs_redraw: bool,
    /// Terminal width in columns
    pub terminal_width: u16,
    /// Terminal height in rows
    pub terminal_height: u16,
    /// Tick counter, advanced by the event loop
    pub tick_count: u64,
    /// Date shown by the last drawn frame
    pub rendered_day: Option<NaiveDate>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Seeded store, system clock.
    pub fn new() -> Self {
        Self::with_store(RecordStore::seeded(), SystemClock::new())
    }

    /// Build from runtime configuration.
    pub fn with_config(config: &AppConfig) -> Self {
        let store = if config.seed {
            RecordStore::seeded()
        } else {
            RecordStore::new()
        };
        match config.today {
            Some(today) => Self::with_store(store, FixedClock::new(today)),
            None => Self::with_store(store, SystemClock::new()),
        }
    }

    pub fn with_store(store: RecordStore, clock: impl Clock + 'static) -> Self {
        Self {
            store,
            router: ViewRouter::new(),
            patient_form: PatientForm::new(),
            doctor_form: DoctorForm::new(),
            appointment_form: AppointmentForm::new(),
            confirm: None,
            selection: TableSelection::default(),
            clock: Box::new(clock),
            hit_registry: HitAreaRegistry::new(),
            should_quit: false,
            needs_redraw: true,
            terminal_width: 80,
            terminal_height: 24,
            tick_count: 0,
            rendered_day: None,
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the tick counter. Redraws once the date moves past the one on
    /// screen, so the nav date and the upcoming list roll over at midnight.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.rendered_day.is_some_and(|day| day != self.today()) {
            tracing::debug!(today = %self.today(), "date changed");
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    pub fn active_view(&self) -> View {
        self.router.active()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Dashboard numbers for the current store and date.
    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::compute(&self.store, self.today())
    }

    /// Table projection for `kind`.
    pub fn table(&self, kind: EntityKind) -> TableProjection {
        table_for(&self.store, kind)
    }

    pub fn form(&self, kind: EntityKind) -> &dyn FormController {
        match kind {
            EntityKind::Patient => &self.patient_form,
            EntityKind::Doctor => &self.doctor_form,
            EntityKind::Appointment => &self.appointment_form,
        }
    }

    pub fn form_mut(&mut self, kind: EntityKind) -> &mut dyn FormController {
        match kind {
            EntityKind::Patient => &mut self.patient_form,
            EntityKind::Doctor => &mut self.doctor_form,
            EntityKind::Appointment => &mut self.appointment_form,
        }
    }

    /// Kind of the form currently shown, if any.
    pub fn open_form_kind(&self) -> Option<EntityKind> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| self.form(*kind).is_open())
    }

    pub fn open_form(&self) -> Option<&dyn FormController> {
        self.open_form_kind().map(|kind| self.form(kind))
    }
}
