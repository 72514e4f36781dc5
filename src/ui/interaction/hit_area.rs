//! Hit area system for mouse interactions.
//!
//! Components register hit areas during rendering, and the event loop
//! queries the registry to decide what a mouse event does.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::app::{RowAction, View};
use crate::models::EntityKind;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    // Navigation
    /// Show a view (nav tab)
    SwitchView(View),
    /// Open the add form of an entity ("+ Add" button)
    AddRecord(EntityKind),

    // Table rows
    /// Move the row cursor to a record
    SelectRow { kind: EntityKind, id: u32 },
    /// Edit or Delete button of a row
    Row {
        kind: EntityKind,
        id: u32,
        action: RowAction,
    },

    // Form dialog
    /// Focus a form field by index
    FocusField(usize),
    /// Save button
    SaveForm,
    /// Cancel button
    CancelForm,

    // Confirmation dialog
    ConfirmYes,
    ConfirmNo,

    // Modal plumbing
    /// Click outside a dialog, on the backdrop
    DismissModal,
    /// Click inside a dialog that hit nothing else
    ModalBody,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of each
/// render cycle. Later registrations sit on top of earlier ones. The last
/// pointer position survives `clear`, so areas registered in the next frame
/// pick up their hover state as they are added.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    hovered: Option<usize>,
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas and reset hover state.
    ///
    /// Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a new hit area.
    ///
    /// Areas registered later take priority over earlier ones for overlapping
    /// regions (z-order: later = on top).
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        let area = HitArea {
            rect,
            action,
            hover_style,
        };
        if let Some((x, y)) = self.pointer {
            if area.contains(x, y) {
                self.hovered = Some(self.areas.len());
            }
        }
        self.areas.push(area);
    }

    /// Returns the action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action)
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hover state changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let hovered = self.find_index(x, y);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    /// Hover style for `rect` if it is the hovered area.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        let area = self.areas.get(self.hovered?)?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Registered areas, bottom to top.
    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(Rect::new(10, 10, 20, 10), ClickAction::SaveForm);

        assert!(area.contains(10, 10));
        assert!(area.contains(29, 19));
        assert!(!area.contains(30, 10));
        assert!(!area.contains(10, 20));
        assert!(!area.contains(9, 10));
    }

    #[test]
    fn test_hit_area_zero_size() {
        let area = HitArea::new(Rect::new(5, 5, 0, 0), ClickAction::SaveForm);
        assert!(!area.contains(5, 5));
    }

    #[test]
    fn test_later_areas_sit_on_top() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 80, 24), ClickAction::DismissModal, None);
        registry.register(Rect::new(20, 5, 40, 10), ClickAction::ModalBody, None);
        registry.register(Rect::new(22, 12, 8, 1), ClickAction::SaveForm, None);

        assert_eq!(registry.hit_test(1, 1), Some(ClickAction::DismissModal));
        assert_eq!(registry.hit_test(30, 6), Some(ClickAction::ModalBody));
        assert_eq!(registry.hit_test(25, 12), Some(ClickAction::SaveForm));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), ClickAction::ConfirmYes, None);
        registry.update_hover(1, 0);
        assert!(registry.is_hovering());

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.is_hovering());
        assert_eq!(registry.hit_test(1, 0), None);
    }

    #[test]
    fn test_update_hover_reports_changes() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), ClickAction::ConfirmYes, None);
        registry.register(Rect::new(20, 0, 10, 1), ClickAction::ConfirmNo, None);

        assert!(registry.update_hover(5, 0));
        assert!(!registry.update_hover(6, 0));
        assert!(registry.update_hover(25, 0));
        assert!(registry.update_hover(50, 50));
        assert!(!registry.update_hover(60, 60));
    }

    #[test]
    fn test_hover_carries_over_to_next_frame() {
        let style = Style::default().fg(Color::Yellow);
        let button = Rect::new(0, 0, 8, 1);
        let mut registry = HitAreaRegistry::new();
        registry.register(button, ClickAction::SaveForm, Some(style));
        registry.update_hover(2, 0);

        registry.clear();
        registry.register(button, ClickAction::SaveForm, Some(style));
        assert_eq!(registry.get_hover_style(button), Some(style));
    }

    #[test]
    fn test_hover_style_only_for_hovered_rect() {
        let mut registry = HitAreaRegistry::new();
        let style = Style::default().fg(Color::Yellow);
        let button = Rect::new(0, 0, 8, 1);
        registry.register(button, ClickAction::SaveForm, Some(style));

        assert_eq!(registry.get_hover_style(button), None);
        registry.update_hover(2, 0);
        assert_eq!(registry.get_hover_style(button), Some(style));
        assert_eq!(registry.get_hover_style(Rect::new(0, 0, 4, 1)), None);
    }
}
