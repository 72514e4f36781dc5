//! Terminal and rendering errors.

use std::fmt;

/// Errors raised while driving the terminal.
#[derive(Debug, Clone)]
pub enum UiError {
    /// Raw mode or the alternate screen could not be entered.
    TerminalInitFailed { message: String },

    /// The terminal could not be put back into its original state.
    TerminalRestoreFailed { message: String },

    /// Drawing a frame failed.
    RenderFailed { component: String, message: String },

    /// The input event stream ended or returned an error.
    EventStreamFailed { message: String },
}

impl UiError {
    pub fn terminal_init(err: impl fmt::Display) -> Self {
        UiError::TerminalInitFailed {
            message: err.to_string(),
        }
    }

    pub fn terminal_restore(err: impl fmt::Display) -> Self {
        UiError::TerminalRestoreFailed {
            message: err.to_string(),
        }
    }

    /// Drawing `component` failed.
    pub fn render(component: &str, err: impl fmt::Display) -> Self {
        UiError::RenderFailed {
            component: component.to_string(),
            message: err.to_string(),
        }
    }

    pub fn event_stream(err: impl fmt::Display) -> Self {
        UiError::EventStreamFailed {
            message: err.to_string(),
        }
    }

    /// Whether the TUI can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UiError::RenderFailed { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "Failed to initialize the terminal. Please check your terminal settings.".to_string()
            }
            UiError::TerminalRestoreFailed { .. } => {
                "Failed to restore terminal. You may need to run `reset`.".to_string()
            }
            UiError::RenderFailed { component, .. } => {
                format!("Failed to draw the {}.", component)
            }
            UiError::EventStreamFailed { .. } => {
                "Lost keyboard input. Please restart hrm.".to_string()
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed { .. } => "E_UI_TERM_INIT",
            UiError::TerminalRestoreFailed { .. } => "E_UI_TERM_RESTORE",
            UiError::RenderFailed { .. } => "E_UI_RENDER",
            UiError::EventStreamFailed { .. } => "E_UI_EVENTS",
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::TerminalInitFailed { message } => {
                write!(f, "Terminal initialization failed: {}", message)
            }
            UiError::TerminalRestoreFailed { message } => {
                write!(f, "Terminal restore failed: {}", message)
            }
            UiError::RenderFailed { component, message } => {
                write!(f, "Render failed for '{}': {}", component, message)
            }
            UiError::EventStreamFailed { message } => {
                write!(f, "Event stream failed: {}", message)
            }
        }
    }
}

impl std::error::Error for UiError {}
