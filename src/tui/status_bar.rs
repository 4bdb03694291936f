//! Status bar widget for counts, messages, and contextual help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus};

/// Render the status bar.
///
/// Always leads with the "Showing X of Y routes" count; an error message
/// displaces the status message, and the last line carries key hints for
/// the focused panel.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut lines: Vec<Line> = Vec::with_capacity(3);

    // Count line, plus the selected route when there is one
    let mut count_spans = vec![Span::styled(
        format!(
            "Showing {} of {} routes",
            state.filtered.len(),
            state.catalog.len()
        ),
        Style::default().fg(theme.text),
    )];
    if let Some(route) = state.selected_route() {
        count_spans.push(Span::styled(
            format!("  ·  {} ({})", route.name, route.grade_label()),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(count_spans));

    if let Some(error) = &state.error_message {
        lines.push(Line::from(vec![
            Span::styled("ERROR: ", Style::default().fg(theme.error)),
            Span::styled(error.clone(), Style::default().fg(theme.text)),
        ]));
    } else if !state.status_message.is_empty() {
        lines.push(Line::from(Span::styled(
            state.status_message.clone(),
            Style::default().fg(theme.text_secondary),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(hints_line(state));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.surface)),
    );
    f.render_widget(widget, area);
}

/// Key hints for the focused panel.
fn hints_line(state: &AppState) -> Line<'static> {
    let hints = match state.focus {
        Focus::Search => "type to search · Enter results · Esc clear query · Tab next panel",
        Focus::GradeRange | Focus::AscentRange => {
            "←/→ lower bound · ↑/↓ upper bound · r reset · Tab next panel"
        }
        Focus::Results => "↑/↓ move · Enter select · c clear · ? help · q quit",
        Focus::Embedding => "←/→ step points · Enter select · click to pick · ? help · q quit",
    };

    Line::from(Span::styled(
        hints.to_string(),
        Style::default().fg(state.theme.text_muted),
    ))
}
