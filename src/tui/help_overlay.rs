//! Keybinding reference overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::AppState;

const BINDINGS: [(&str, &str); 13] = [
    ("Tab / Shift-Tab", "Cycle panel focus"),
    ("type in Search", "Live name filter (case-insensitive)"),
    ("←/→  ↑/↓", "Adjust range bounds in a range panel"),
    ("r", "Reset ranges to the data bounds"),
    ("↑/↓, j/k", "Move through results"),
    ("←/→, h/l", "Step through embedding points"),
    ("Enter", "Select the route under the cursor"),
    ("mouse click", "Pick a result entry or plot point"),
    ("c", "Clear the selection"),
    ("Esc", "Clear query, then selection"),
    ("y", "Copy selected route name and id"),
    ("? / F1", "Toggle this help"),
    ("q / Ctrl-C", "Quit"),
];

/// Render the help overlay over the whole screen.
pub fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let area = centered_rect(60, 70, f.area());

    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (keys, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {keys:<18}"),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(action, Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(theme.text_muted),
        ))
        .alignment(Alignment::Center),
    );

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Keybindings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );
    f.render_widget(help, area);
}

/// Centered sub-rectangle by percentage of the full area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
