//! Route detail panel: board diagram plus summary.
//!
//! Renders the selected route's holds over the faint background geometry of
//! its board layout. Both layers are optional: missing geometry skips the
//! background, a missing hold list leaves the background only. Holds with a
//! role outside the known set are excluded from rendering.

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::models::{Hold, HoldRole, Route};

use super::theme::role_color;
use super::AppState;

/// Rows reserved above the canvas for summary and legend.
const HEADER_ROWS: u16 = 2;

/// Render the detail panel for a route resolved from the full table.
pub fn render(f: &mut Frame, area: Rect, state: &AppState, route: &Route) {
    let theme = &state.theme;

    let block = Block::default()
        .title(format!(" Route Detail — {} ", route.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    f.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));
    if inner.height <= HEADER_ROWS || inner.width < 4 {
        return;
    }

    let header = Rect::new(inner.x, inner.y, inner.width, HEADER_ROWS);
    let canvas_rect = Rect::new(
        inner.x,
        inner.y + HEADER_ROWS,
        inner.width,
        inner.height - HEADER_ROWS,
    );

    let holds = state.catalog.holds_for(&route.id);
    let board = state.catalog.board_for_route(route);

    render_header(f, header, state, route, holds);

    let known_holds: Vec<Hold> = holds
        .unwrap_or_default()
        .iter()
        .filter(|h| h.role.is_known())
        .copied()
        .collect();
    let board_points: Vec<(f64, f64)> = board
        .unwrap_or_default()
        .iter()
        .map(|p| (p.x, p.y))
        .collect();

    if known_holds.is_empty() && board_points.is_empty() {
        let empty = Paragraph::new("No board data for this route")
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Center);
        f.render_widget(empty, canvas_rect);
        return;
    }

    let ((x_min, x_max), (y_min, y_max)) = board_bounds(&known_holds, &board_points);

    // One coordinate group per known role, in legend order
    let role_groups: Vec<(ratatui::style::Color, Vec<(f64, f64)>)> = HoldRole::KNOWN
        .iter()
        .filter_map(|&role| {
            let coords: Vec<(f64, f64)> = known_holds
                .iter()
                .filter(|h| h.role == role)
                .map(|h| (h.x, h.y))
                .collect();
            if coords.is_empty() {
                None
            } else {
                role_color(role).map(|color| (color, coords))
            }
        })
        .collect();

    let muted = theme.point_muted;
    let canvas = Canvas::default()
        .marker(Marker::Dot)
        .x_bounds([x_min, x_max])
        .y_bounds([y_min, y_max])
        .paint(move |ctx| {
            if !board_points.is_empty() {
                ctx.draw(&Points {
                    coords: &board_points,
                    color: muted,
                });
            }
            for (color, coords) in &role_groups {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
        });
    f.render_widget(canvas, canvas_rect);
}

/// Summary line plus role legend.
fn render_header(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    route: &Route,
    holds: Option<&[Hold]>,
) {
    let theme = &state.theme;

    let summary = Line::from(vec![
        Span::styled(
            route.name.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {}  ★{:.1}  {} ascents  ·  set by {}",
                route.grade_label(),
                route.quality,
                route.ascents,
                route.setter
            ),
            Style::default().fg(theme.text_secondary),
        ),
    ]);

    let legend = match holds {
        None => Line::from(Span::styled(
            "No hold data in this export · c clear selection",
            Style::default().fg(theme.text_muted),
        )),
        Some(holds) => {
            let mut spans: Vec<Span> = Vec::new();
            for role in HoldRole::KNOWN {
                if holds.iter().any(|h| h.role == role) {
                    if let Some(color) = role_color(role) {
                        spans.push(Span::styled("● ", Style::default().fg(color)));
                        spans.push(Span::styled(
                            format!("{}  ", role.label()),
                            Style::default().fg(theme.text_secondary),
                        ));
                    }
                }
            }
            spans.push(Span::styled(
                "· c clear · y copy",
                Style::default().fg(theme.text_muted),
            ));
            Line::from(spans)
        }
    };

    f.render_widget(Paragraph::new(vec![summary, legend]), area);
}

/// Bounds covering holds and background with a 5% margin.
fn board_bounds(holds: &[Hold], board: &[(f64, f64)]) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for (x, y) in holds
        .iter()
        .map(|h| (h.x, h.y))
        .chain(board.iter().copied())
    {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    let expand = |min: f64, max: f64| {
        let span = max - min;
        if span <= f64::EPSILON {
            (min - 1.0, max + 1.0)
        } else {
            (min - span * 0.05, max + span * 0.05)
        }
    };

    (expand(x_min, x_max), expand(y_min, y_max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_bounds_cover_both_layers() {
        let holds = vec![Hold {
            x: 5.0,
            y: 5.0,
            role: HoldRole::Hand,
        }];
        let board = vec![(0.0, 0.0), (10.0, 20.0)];
        let ((x_min, x_max), (y_min, y_max)) = board_bounds(&holds, &board);
        assert!(x_min < 0.0 && x_max > 10.0);
        assert!(y_min < 0.0 && y_max > 20.0);
    }

    #[test]
    fn test_board_bounds_single_point() {
        let holds = vec![Hold {
            x: 3.0,
            y: 7.0,
            role: HoldRole::Start,
        }];
        let ((x_min, x_max), (y_min, y_max)) = board_bounds(&holds, &[]);
        assert_eq!((x_min, x_max), (2.0, 4.0));
        assert_eq!((y_min, y_max), (6.0, 8.0));
    }
}
