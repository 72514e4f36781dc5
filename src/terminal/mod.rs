//! Terminal lifecycle with RAII cleanup.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen with mouse capture, and puts everything back when dropped. The
//! panic hook from [`setup_panic_hook`] covers the paths where `Drop` never
//! runs.
//!
//! ```no_run
//! use hrm::terminal::TerminalManager;
//!
//! fn main() -> hrm::error::HrmResult<()> {
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     manager.restore()
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Size, Terminal};
use std::io::{self, Stdout};

use crate::error::{HrmResult, UiError};

/// Restores the terminal exactly once, on `cleanup` or on drop.
struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn cleanup(&mut self) {
        if std::mem::replace(&mut self.cleaned_up, true) {
            return;
        }
        leave_tui_mode(&mut io::stdout());
        tracing::debug!("terminal restored");
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the UI.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and start capturing the
    /// mouse and pasted text.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::TerminalInitFailed`] if any terminal command fails.
    /// Whatever was already switched on is switched off again before
    /// returning.
    pub fn new() -> HrmResult<Self> {
        Self::init().map_err(|err| {
            tracing::error!(error = %err, "terminal setup failed");
            UiError::terminal_init(err).into()
        })
    }

    fn init() -> io::Result<Self> {
        let guard = TerminalGuard { cleaned_up: false };

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        tracing::debug!("terminal ready");

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn size(&self) -> HrmResult<Size> {
        self.terminal
            .size()
            .map_err(|err| UiError::terminal_init(err).into())
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> HrmResult<()> {
        self.guard.cleanup();
        self.terminal
            .show_cursor()
            .map_err(|err| UiError::terminal_restore(err).into())
    }
}
