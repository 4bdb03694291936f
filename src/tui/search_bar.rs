//! Live name-search input.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus};

/// Render the search input box.
///
/// Queries shorter than the configured threshold are shown but not applied;
/// the box hints at the remaining characters needed.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Focus::Search;

    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };

    let mut spans = vec![
        Span::styled(" / ", Style::default().fg(theme.text_muted)),
        Span::styled(
            state.filter.query.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ];
    if focused {
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let below_threshold = !state.filter.query.trim().is_empty()
        && state.filter.query.trim().chars().count() < state.config.ui.search_min_chars;
    if below_threshold {
        spans.push(Span::styled(
            format!("  (type {}+ chars)", state.config.ui.search_min_chars),
            Style::default().fg(theme.text_muted),
        ));
    }

    let search = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(search, area);
}
