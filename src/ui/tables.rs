//! Table views for patients, doctors and appointments.
//!
//! Rows are laid out by hand rather than with `ratatui::widgets::Table` so
//! the Edit and Delete buttons land on known columns and can be registered
//! as hit areas.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::components::{Button, ButtonKind};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG};
use crate::app::{RowAction, View};
use crate::models::EntityKind;
use crate::view_state::{TableProjection, TableRow};

/// Gutter holding the selection marker.
const MARKER_WIDTH: u16 = 2;

const ACTIONS_HEADER: &str = "Actions";

/// Label of the add button above each table.
pub fn add_button_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Patient => "+ Add Patient",
        EntityKind::Doctor => "+ Add Doctor",
        EntityKind::Appointment => "+ Schedule Appointment",
    }
}

/// Fit `text` into `width` columns: pad with spaces, or cut and end with `…`.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn row_buttons(ctx: &LayoutContext) -> (&'static str, &'static str) {
    if ctx.should_show_full_buttons() {
        ("Edit", "Delete")
    } else {
        ("E", "D")
    }
}

/// Column rects for a row at `row`: one per header, then the actions column.
fn column_rects(row: Rect, headers: usize, ctx: &LayoutContext) -> Vec<Rect> {
    let (edit, delete) = row_buttons(ctx);
    let actions_width = (edit.width() + delete.width() + 5).max(ACTIONS_HEADER.len()) as u16;

    let body = Rect {
        x: row.x + MARKER_WIDTH,
        width: row.width.saturating_sub(MARKER_WIDTH),
        ..row
    };
    let constraints = (0..headers)
        .map(|_| Constraint::Fill(1))
        .chain(std::iter::once(Constraint::Length(actions_width)));

    Layout::horizontal(constraints)
        .spacing(1)
        .split(body)
        .to_vec()
}

/// First row index to draw so that `selected` stays visible.
fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        selected.saturating_sub(visible - 1)
    }
}

/// Render a table view with its add button, header and rows.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    table: &TableProjection,
    selected: usize,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    let title = format!(" {} ({}) ", View::for_entity(table.kind).title(), table.len());
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 3 {
        return;
    }

    let [button_row, _, header_row, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    Button::new(
        add_button_label(table.kind),
        ClickAction::AddRecord(table.kind),
    )
    .kind(ButtonKind::Primary)
    .padded()
    .render(frame, inner, (button_row.x + MARKER_WIDTH, button_row.y), registry);

    render_header(frame, header_row, table, ctx);

    if table.is_empty() {
        let message = Paragraph::new(Span::styled(
            format!("  {}", table.empty_message),
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(message, Rect { height: 1, ..body });
        return;
    }

    let visible = body.height as usize;
    let offset = scroll_offset(selected, visible);
    for (slot, (index, row)) in table
        .rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let row_area = Rect {
            y: body.y + slot as u16,
            height: 1,
            ..body
        };
        render_row(frame, row_area, table.kind, row, index == selected, ctx, registry);
    }
}

fn render_header(frame: &mut Frame, area: Rect, table: &TableProjection, ctx: &LayoutContext) {
    let style = Style::default()
        .fg(COLOR_DIM)
        .add_modifier(Modifier::BOLD);
    let columns = column_rects(area, table.headers.len(), ctx);
    let labels = table.headers.iter().copied().chain([ACTIONS_HEADER]);

    for (rect, label) in columns.iter().zip(labels) {
        let text = fit_to_width(label, rect.width as usize);
        frame.render_widget(Paragraph::new(Span::styled(text, style)), *rect);
    }
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    kind: EntityKind,
    row: &TableRow,
    is_selected: bool,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    registry.register(area, ClickAction::SelectRow { kind, id: row.id }, None);

    let style = if is_selected {
        frame.render_widget(
            Block::default().style(Style::default().bg(COLOR_SELECTED_BG)),
            area,
        );
        Style::default().fg(COLOR_HEADER).bg(COLOR_SELECTED_BG)
    } else {
        Style::default().fg(ratatui::style::Color::Gray)
    };

    if is_selected {
        let marker = Rect {
            width: MARKER_WIDTH.min(area.width),
            ..area
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                "\u{25B6} ",
                Style::default().fg(COLOR_ACTIVE).bg(COLOR_SELECTED_BG),
            )),
            marker,
        );
    }

    let columns = column_rects(area, row.cells.len(), ctx);
    for (rect, cell) in columns.iter().zip(&row.cells) {
        let text = fit_to_width(cell, rect.width as usize);
        frame.render_widget(Paragraph::new(Span::styled(text, style)), *rect);
    }

    let Some(actions) = columns.last() else {
        return;
    };
    let (edit_label, delete_label) = row_buttons(ctx);
    let edit = Button::new(
        edit_label,
        ClickAction::Row {
            kind,
            id: row.id,
            action: RowAction::Edit,
        },
    )
    .kind(ButtonKind::Link);
    let delete = Button::new(
        delete_label,
        ClickAction::Row {
            kind,
            id: row.id,
            action: RowAction::Delete,
        },
    )
    .kind(ButtonKind::Danger);

    let edit_rect = edit.render(frame, *actions, (actions.x, actions.y), registry);
    delete.render(
        frame,
        *actions,
        (edit_rect.right() + 1, actions.y),
        registry,
    );
}
