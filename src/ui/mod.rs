//! UI rendering for the hospital records manager
//!
//! The screen is split into three bands:
//! - Navigation bar with the app title, today's date and the view tabs
//! - Body: the dashboard or one of the record tables
//! - Footer with keybind hints for the current context
//!
//! Open forms and the delete confirmation are drawn on top.
//!
//! ## Responsive Layout System
//!
//! Every render function receives a `LayoutContext` built from the frame
//! size. Narrow terminals get abbreviated tabs, hints and buttons; short
//! terminals get single-line form fields.
//!
//! ## Mouse
//!
//! Rendering also fills the app's `HitAreaRegistry` so clicks can be mapped
//! back to the element drawn under the pointer.

pub mod components;
mod confirm_dialog;
mod dashboard;
mod form_dialog;
mod hints;
pub mod interaction;
mod layout;
mod nav;
mod tables;
mod theme;

pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR,
    COLOR_HEADER, COLOR_INPUT_BG, COLOR_LINK, COLOR_SELECTED_BG,
};

pub use layout::{breakpoints, LayoutContext, SizeCategory};

pub use confirm_dialog::render_confirm_dialog;
pub use dashboard::render_dashboard;
pub use form_dialog::render_form_dialog;
pub use hints::build_keybind_hints;
pub use nav::{render_nav, NAV_HEIGHT};
pub use tables::{add_button_label, fit_to_width, render_table};

use ratatui::{
    backend::Backend,
    layout::{Constraint, Layout},
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::app::App;
use crate::error::UiError;
use crate::models::format_short_date;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Draw a frame if the app asked for one, then clear the request.
///
/// A failed draw leaves `needs_redraw` set so the next loop iteration
/// tries again.
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), UiError> {
    if !app.needs_redraw {
        return Ok(());
    }
    terminal
        .draw(|frame| render(frame, app))
        .map_err(|err| UiError::render("screen", err))?;
    app.needs_redraw = false;
    Ok(())
}

/// Draw the whole screen and rebuild the app's hit areas.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let mut registry = std::mem::take(&mut app.hit_registry);
    registry.clear();

    let [nav_area, body, footer] = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let view = app.active_view();
    let day = app.today();
    app.rendered_day = Some(day);
    let today = format_short_date(day);
    render_nav(frame, nav_area, view, &today, &ctx, &mut registry);

    match view.entity() {
        None => render_dashboard(frame, body, &app.dashboard(), &ctx),
        Some(kind) => render_table(
            frame,
            body,
            &app.table(kind),
            app.selected_index(kind),
            &ctx,
            &mut registry,
        ),
    }

    frame.render_widget(Paragraph::new(build_keybind_hints(app, &ctx)), footer);

    if let Some(form) = app.open_form() {
        render_form_dialog(frame, area, form, &ctx, &mut registry);
    }
    if let Some(pending) = app.confirm {
        render_confirm_dialog(frame, area, &pending, &ctx, &mut registry);
    }

    app.hit_registry = registry;
}
