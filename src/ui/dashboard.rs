//! Dashboard view: stat cards plus the upcoming appointments list.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::layout::LayoutContext;
use super::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_LINK};
use crate::view_state::{DashboardSummary, UpcomingAppointment};

/// Rows taken by one stat card.
const CARD_HEIGHT: u16 = 3;

fn stat_cards(summary: &DashboardSummary) -> [(&'static str, usize); 4] {
    [
        ("Total Patients", summary.totals.patients),
        ("Total Doctors", summary.totals.doctors),
        ("Total Appointments", summary.totals.appointments),
        ("Upcoming", summary.upcoming_count),
    ]
}

pub fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    summary: &DashboardSummary,
    ctx: &LayoutContext,
) {
    let per_row = ctx.stat_cards_per_row();
    let card_rows = stat_cards(summary).len().div_ceil(per_row) as u16;

    let [cards_area, list_area] = Layout::vertical([
        Constraint::Length(card_rows * CARD_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);

    render_stat_cards(frame, cards_area, summary, per_row);
    render_upcoming(frame, list_area, summary, ctx);
}

fn render_stat_cards(frame: &mut Frame, area: Rect, summary: &DashboardSummary, per_row: usize) {
    let cards = stat_cards(summary);
    let rows = Layout::vertical(
        cards
            .chunks(per_row)
            .map(|_| Constraint::Length(CARD_HEIGHT)),
    )
    .split(area);

    for (row_area, chunk) in rows.iter().zip(cards.chunks(per_row)) {
        let columns =
            Layout::horizontal(chunk.iter().map(|_| Constraint::Fill(1))).split(*row_area);

        for (card_area, (label, value)) in columns.iter().zip(chunk) {
            let block = Block::default()
                .title(Span::styled(format!(" {label} "), Style::default().fg(COLOR_DIM)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER));
            let number = Paragraph::new(Line::from(Span::styled(
                format!(" {value}"),
                Style::default()
                    .fg(COLOR_ACTIVE)
                    .add_modifier(Modifier::BOLD),
            )))
            .block(block);
            frame.render_widget(number, *card_area);
        }
    }
}

fn upcoming_lines(item: &UpcomingAppointment, compact: bool) -> Vec<Line<'static>> {
    let who = Span::styled(
        format!("  {} \u{2192} {}", item.patient, item.doctor),
        Style::default().fg(COLOR_HEADER),
    );
    let when = Span::styled(
        format!("  {} at {}", item.date_label, item.time_label),
        Style::default().fg(COLOR_LINK),
    );
    let reason = Span::styled(format!("  {}", item.reason), Style::default().fg(COLOR_DIM));

    if compact {
        vec![Line::from(vec![who, when])]
    } else {
        vec![Line::from(vec![who, when]), Line::from(reason), Line::default()]
    }
}

fn render_upcoming(frame: &mut Frame, area: Rect, summary: &DashboardSummary, ctx: &LayoutContext) {
    let block = Block::default()
        .title(Span::styled(
            " Upcoming Appointments ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines: Vec<Line> = if summary.has_upcoming() {
        summary
            .upcoming
            .iter()
            .flat_map(|item| upcoming_lines(item, ctx.is_short()))
            .collect()
    } else {
        vec![Line::from(Span::styled(
            format!("  {}", summary.empty_message()),
            Style::default().fg(COLOR_DIM),
        ))]
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_text(summary: &DashboardSummary, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let ctx = LayoutContext::new(width, height);
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_dashboard(frame, area, summary, &ctx);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_seeded_dashboard_lists_both_appointments() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let summary = DashboardSummary::compute(&RecordStore::seeded(), today);
        let text = render_to_text(&summary, 100, 30);

        assert!(text.contains("Total Patients"));
        assert!(text.contains("John Doe \u{2192} Dr. Alice Brown"));
        assert!(text.contains("Oct 30, 2025 at 10:00"));
        assert!(text.contains("Knee Pain"));
    }

    #[test]
    fn test_empty_dashboard_shows_message() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let summary = DashboardSummary::compute(&RecordStore::new(), today);
        let text = render_to_text(&summary, 70, 20);

        assert!(text.contains("No upcoming appointments"));
    }
}
