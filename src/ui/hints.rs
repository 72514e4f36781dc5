//! Footer keybind hints.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::app::App;
use crate::input::ModalType;

/// One hint: key, full description, abbreviated description, and whether
/// it survives on extra small terminals.
struct Hint {
    key: &'static str,
    label: &'static str,
    short: &'static str,
    essential: bool,
}

const fn hint(key: &'static str, label: &'static str, short: &'static str, essential: bool) -> Hint {
    Hint {
        key,
        label,
        short,
        essential,
    }
}

fn hints_for(app: &App) -> Vec<Hint> {
    let context = app.build_input_context();
    match context.modal {
        ModalType::Confirm => vec![
            hint("[y]", "delete", "yes", true),
            hint("[n/Esc]", "keep", "no", true),
        ],
        ModalType::Form => {
            let mut hints = vec![hint("[Tab]", "next field", "next", false)];
            if context.focused_is_choice {
                hints.push(hint("[\u{2190}/\u{2192}]", "choose", "pick", true));
            }
            hints.push(hint("[Enter]", "save", "save", true));
            hints.push(hint("[Esc]", "cancel", "cancel", true));
            hints
        }
        ModalType::None if context.is_table_view() => vec![
            hint("[\u{2191}/\u{2193}]", "select", "sel", false),
            hint("[a]", "add", "add", true),
            hint("[e]", "edit", "edit", true),
            hint("[d]", "delete", "del", true),
            hint("[Tab]", "next view", "view", false),
            hint("[q]", "quit", "quit", true),
        ],
        ModalType::None => vec![
            hint("[1-4]", "switch view", "view", false),
            hint("[Tab]", "next view", "next", true),
            hint("[q]", "quit", "quit", true),
        ],
    }
}

/// Keybind hints for the current state, abbreviated on narrow terminals.
pub fn build_keybind_hints(app: &App, ctx: &LayoutContext) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    let hints = hints_for(app);

    let visible = hints
        .iter()
        .filter(|hint| hint.essential || !ctx.is_extra_small());
    for (i, hint) in visible.enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(COLOR_ACCENT)));
        let label = if ctx.is_narrow() { hint.short } else { hint.label };
        spans.push(Span::styled(format!(" {label}"), Style::default().fg(COLOR_DIM)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedClock;
    use crate::app::View;
    use crate::models::EntityKind;
    use crate::store::RecordStore;

    fn app() -> App {
        App::with_store(RecordStore::seeded(), FixedClock::ymd(2025, 10, 1))
    }

    fn hint_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_dashboard_hints() {
        let line = build_keybind_hints(&app(), &LayoutContext::new(120, 40));
        let text = hint_text(&line);
        assert!(text.contains("[1-4] switch view"));
        assert!(!text.contains("[a]"));
    }

    #[test]
    fn test_table_hints_include_row_actions() {
        let mut app = app();
        app.switch_view(View::Doctors);
        let text = hint_text(&build_keybind_hints(&app, &LayoutContext::new(120, 40)));
        assert!(text.contains("[a] add"));
        assert!(text.contains("[d] delete"));
    }

    #[test]
    fn test_form_hints_mention_picker_only_on_choice() {
        let mut app = app();
        app.open_record_form(EntityKind::Appointment, None);
        let text = hint_text(&build_keybind_hints(&app, &LayoutContext::new(120, 40)));
        assert!(text.contains("choose"));

        app.close_form();
        app.open_record_form(EntityKind::Doctor, None);
        let text = hint_text(&build_keybind_hints(&app, &LayoutContext::new(120, 40)));
        assert!(!text.contains("choose"));
        assert!(text.contains("[Esc] cancel"));
    }

    #[test]
    fn test_extra_small_keeps_essentials() {
        let mut app = app();
        app.switch_view(View::Patients);
        let text = hint_text(&build_keybind_hints(&app, &LayoutContext::new(50, 20)));
        assert!(text.contains("[q] quit"));
        assert!(!text.contains("[Tab]"));
    }
}
