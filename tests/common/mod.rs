//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! use common::{TestAppBuilder, press, type_text};
//!
//! let mut app = TestAppBuilder::new().view(View::Patients).build();
//! press(&mut app, KeyCode::Char('a'));
//! type_text(&mut app, "Carol");
//! ```

#![allow(dead_code)]

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hrm::adapters::FixedClock;
use hrm::app::{App, View};
use hrm::input::CommandRegistry;
use hrm::store::RecordStore;
use hrm::ui;
use ratatui::{backend::TestBackend, Terminal};

/// "Today" used by tests unless overridden: before both seeded appointments.
pub const TEST_TODAY: (i32, u32, u32) = (2025, 10, 1);

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builder for test `App` instances.
pub struct TestAppBuilder {
    store: RecordStore,
    today: NaiveDate,
    view: View,
    size: (u16, u16),
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        let (y, m, d) = TEST_TODAY;
        Self {
            store: RecordStore::seeded(),
            today: date(y, m, d),
            view: View::Dashboard,
            size: (120, 40),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start without the sample records.
    pub fn empty(mut self) -> Self {
        self.store = RecordStore::new();
        self
    }

    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.size = (width, height);
        self
    }

    pub fn build(self) -> App {
        let mut app = App::with_store(self.store, FixedClock::new(self.today));
        app.switch_view(self.view);
        app.update_terminal_dimensions(self.size.0, self.size.1);
        app
    }
}

/// Seeded app on the dashboard.
pub fn test_app() -> App {
    TestAppBuilder::new().build()
}

/// Dispatch a key press through the default keybindings.
pub fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let context = app.build_input_context();
    if let Some(cmd) = CommandRegistry::new().dispatch(KeyEvent::new(code, modifiers), &context) {
        app.execute_command(cmd);
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

/// Type each character of `text` into whatever has focus.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Render the app into a `TestBackend` of the app's terminal size.
pub fn render(app: &mut App) -> Terminal<TestBackend> {
    let mut terminal =
        Terminal::new(TestBackend::new(app.terminal_width, app.terminal_height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal
}

/// Buffer contents, one line per row.
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// Render and return the screen as text.
pub fn render_text(app: &mut App) -> String {
    screen_text(&render(app))
}

/// Screen position of the first occurrence of `needle`, as (column, row).
pub fn find_on_screen(text: &str, needle: &str) -> Option<(u16, u16)> {
    text.lines().enumerate().find_map(|(row, line)| {
        line.find(needle).map(|byte| {
            let column = line[..byte].chars().count();
            (column as u16, row as u16)
        })
    })
}
