//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use std::io::{self, Write};

const WINDOW_TITLE: &str = "Hospital Records";

/// Switch to the alternate screen and enable mouse capture and bracketed
/// paste. Raw mode is enabled separately by the caller.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(
        writer,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture,
        SetTitle(WINDOW_TITLE)
    )
}

/// Undo [`enter_tui_mode`] and raw mode. Errors are ignored so this is safe
/// to call from drop and panic paths, and more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(
        writer,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    );
    let _ = writer.flush();
}

/// Restore stdout without a `TerminalManager` at hand.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
