//! Filtered result list with pickable entries.

use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::{AppState, Focus};

/// Render the result list window around the cursor.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Focus::Results;

    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };

    let routes = state.catalog.routes();
    let len = state.filtered.len();
    let visible = visible_rows(area);
    let offset = window_offset(len, state.results_cursor, visible);

    let items: Vec<ListItem> = state
        .filtered
        .iter(routes)
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(position, route)| {
            let is_cursor = position == state.results_cursor;
            let is_selected = state.selection.is_selected(&route.id);

            let marker = if is_selected { "◉ " } else { "  " };
            let style = if is_cursor {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.text)
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(format!("{:<20.20}", route.name), style),
                Span::styled(
                    format!(" {:>5}", route.grade_label()),
                    Style::default().fg(theme.text_secondary),
                ),
            ]))
        })
        .collect();

    let title = if len == 0 {
        " Results (none) ".to_string()
    } else {
        format!(" Results ({len}) ")
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(list, area);
}

/// Number of list rows that fit inside the bordered area.
fn visible_rows(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}

/// First visible snapshot position for the given cursor.
fn window_offset(len: usize, cursor: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        0
    } else if cursor >= visible {
        (cursor + 1 - visible).min(len - visible)
    } else {
        0
    }
}

/// Maps a mouse row inside the list area onto a snapshot position.
#[must_use]
pub fn row_at(area: Rect, len: usize, cursor: usize, row: u16) -> Option<usize> {
    let inner = area.inner(Margin::new(1, 1));
    if row < inner.y || row >= inner.y + inner.height {
        return None;
    }

    let visible = visible_rows(area);
    let offset = window_offset(len, cursor, visible);
    let position = offset + (row - inner.y) as usize;
    if position < len {
        Some(position)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_offset_fits_without_scrolling() {
        assert_eq!(window_offset(5, 4, 10), 0);
    }

    #[test]
    fn test_window_offset_follows_cursor() {
        assert_eq!(window_offset(20, 10, 5), 6);
        // Never scrolls past the end
        assert_eq!(window_offset(20, 19, 5), 15);
    }

    #[test]
    fn test_row_at_maps_rows_to_positions() {
        let area = Rect::new(0, 10, 30, 8);
        // Inner rows are 11..17
        assert_eq!(row_at(area, 4, 0, 11), Some(0));
        assert_eq!(row_at(area, 4, 0, 13), Some(2));
        // Row past the data is no pick
        assert_eq!(row_at(area, 2, 0, 14), None);
        // Border row is no pick
        assert_eq!(row_at(area, 4, 0, 10), None);
    }

    #[test]
    fn test_row_at_respects_scroll_offset() {
        let area = Rect::new(0, 0, 30, 6);
        // 4 visible rows, cursor at 9 of 20: offset 6
        assert_eq!(row_at(area, 20, 9, 1), Some(6));
        assert_eq!(row_at(area, 20, 9, 4), Some(9));
    }
}
