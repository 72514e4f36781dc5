//! Navigation bar: app title and the view tabs.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{render_tab_selector, tab_positions, TabItem};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::View;

const TITLE: &str = "Hospital Records";

/// Rows taken by the navigation bar.
pub const NAV_HEIGHT: u16 = 3;

fn tab_items() -> [TabItem<'static>; 4] {
    View::ALL.map(|view| match view {
        View::Appointments => TabItem::with_short_label(view.title(), "Appts"),
        View::Dashboard => TabItem::with_short_label(view.title(), "Home"),
        _ => TabItem::new(view.title()),
    })
}

/// Render the title row and the tab row; each tab is clickable.
pub fn render_nav(
    frame: &mut Frame,
    area: Rect,
    active: View,
    today: &str,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let mut title = vec![Span::styled(
        format!("  {TITLE}"),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    if !ctx.is_narrow() {
        title.push(Span::styled(format!("   {today}"), Style::default().fg(COLOR_DIM)));
    }
    let title_row = Rect { height: 1, ..inner };
    frame.render_widget(Paragraph::new(Line::from(title)), title_row);

    if inner.height < 2 {
        return;
    }
    let tab_row = Rect {
        y: inner.y + 1,
        height: 1,
        ..inner
    };
    let items = tab_items();
    frame.render_widget(
        Paragraph::new(render_tab_selector(&items, active.index(), true, ctx)),
        tab_row,
    );

    for (view, (offset, width)) in View::ALL.into_iter().zip(tab_positions(&items, ctx)) {
        let rect = Rect {
            x: tab_row.x.saturating_add(offset),
            y: tab_row.y,
            width,
            height: 1,
        }
        .intersection(tab_row);
        if !rect.is_empty() {
            registry.register(rect, ClickAction::SwitchView(view), None);
        }
    }
}
