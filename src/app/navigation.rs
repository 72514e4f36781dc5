//! Navigation methods for the App.

use super::{App, View};
use crate::models::EntityKind;

impl App {
    /// Show `view` and redraw.
    pub fn switch_view(&mut self, view: View) {
        self.router.switch(view);
        if let Some(kind) = view.entity() {
            self.clamp_selection(kind);
        }
        self.mark_dirty();
    }

    pub fn next_view(&mut self) {
        let mut router = self.router;
        router.next();
        self.switch_view(router.active());
    }

    pub fn previous_view(&mut self) {
        let mut router = self.router;
        router.previous();
        self.switch_view(router.active());
    }

    /// Selected row index in the table of `kind`.
    pub fn selected_index(&self, kind: EntityKind) -> usize {
        self.selection.get(kind)
    }

    /// Id of the selected row in the table of `kind`.
    pub fn selected_id(&self, kind: EntityKind) -> Option<u32> {
        self.store.ids_of(kind).get(self.selection.get(kind)).copied()
    }

    /// Move the cursor of the active table down one row.
    pub fn select_next(&mut self) {
        let Some(kind) = self.active_view().entity() else {
            return;
        };
        let len = self.store.len_of(kind);
        let index = self.selection.get_mut(kind);
        if len > 0 && *index + 1 < len {
            *index += 1;
        }
    }

    /// Move the cursor of the active table up one row.
    pub fn select_previous(&mut self) {
        let Some(kind) = self.active_view().entity() else {
            return;
        };
        let index = self.selection.get_mut(kind);
        *index = index.saturating_sub(1);
    }

    /// Point the cursor of `kind` at the row holding `id`.
    pub fn select_id(&mut self, kind: EntityKind, id: u32) {
        if let Some(index) = self.store.ids_of(kind).iter().position(|&row| row == id) {
            *self.selection.get_mut(kind) = index;
        }
    }

    /// Keep the cursor of `kind` inside the table after rows disappear.
    pub fn clamp_selection(&mut self, kind: EntityKind) {
        let len = self.store.len_of(kind);
        let index = self.selection.get_mut(kind);
        *index = (*index).min(len.saturating_sub(1));
    }
}
