//! Active-view tracking.

use super::types::View;

/// Tracks which view is displayed. Starts on the dashboard and keeps no
/// history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewRouter {
    active: View,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> View {
        self.active
    }

    /// Make `view` the active one. Switching to the active view is allowed
    /// and still counts as a switch.
    pub fn switch(&mut self, view: View) {
        if self.active != view {
            tracing::debug!(from = ?self.active, to = ?view, "view switched");
        }
        self.active = view;
    }

    /// Advance to the next view, wrapping after the last.
    pub fn next(&mut self) {
        let index = (self.active.index() + 1) % View::ALL.len();
        self.switch(View::ALL[index]);
    }

    /// Go back to the previous view, wrapping before the first.
    pub fn previous(&mut self) {
        let len = View::ALL.len();
        let index = (self.active.index() + len - 1) % len;
        self.switch(View::ALL[index]);
    }
}
