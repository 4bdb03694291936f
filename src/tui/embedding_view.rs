//! Embedding scatter plot of the filtered routes.
//!
//! Encoding rules: with no selection every point is colored by the
//! continuous grade ramp and a gradient legend is shown; with a selection
//! the selected point is drawn large in the accent color, every other point
//! in one muted color, and the legend is dropped. The keyboard cursor
//! carries a local tooltip with the route's name, grade, quality, and
//! ascent count.

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};
use std::collections::HashMap;

use crate::models::Route;
use crate::services::FilteredRoutes;

use super::{AppState, Focus};

/// Rows reserved under the canvas for legend and tooltip.
const INFO_ROWS: u16 = 2;

/// Hit radius for mouse picks, in terminal cells.
const PICK_RADIUS: f64 = 2.5;

/// Render the embedding panel.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Focus::Embedding;

    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };
    let block = Block::default()
        .title(format!(" Embedding Space ({} routes) ", state.filtered.len()))
        .borders(Borders::ALL)
        .border_style(border_style);
    f.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));
    if inner.height <= INFO_ROWS || inner.width < 4 {
        return;
    }
    let canvas_rect = canvas_area(area);
    let info_rect = Rect::new(
        inner.x,
        canvas_rect.y + canvas_rect.height,
        inner.width,
        INFO_ROWS,
    );

    if state.filtered.is_empty() {
        let empty = Paragraph::new("No routes match the current filters")
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Center);
        f.render_widget(empty, canvas_rect);
        render_info(f, info_rect, state);
        return;
    }

    let routes = state.catalog.routes();
    let ((x_min, x_max), (y_min, y_max)) = plot_bounds(routes, &state.filtered);

    let selected_id = state.selected_route().map(|r| r.id.clone());
    let selection_mode = selected_id.is_some();

    // Group point coordinates by their marker color up front; the paint
    // closure only borrows the prepared groups.
    let mut groups: Vec<(ratatui::style::Color, Vec<(f64, f64)>)> = Vec::new();
    if selection_mode {
        let muted: Vec<(f64, f64)> = state
            .filtered
            .iter(routes)
            .filter(|r| Some(&r.id) != selected_id.as_ref())
            .map(Route::embedding)
            .collect();
        groups.push((theme.point_muted, muted));
    } else {
        let mut by_color: HashMap<(u8, u8, u8), Vec<(f64, f64)>> = HashMap::new();
        for route in state.filtered.iter(routes) {
            let color =
                super::theme::grade_color(route.grade, state.bounds.grade_min, state.bounds.grade_max);
            let key = match color {
                ratatui::style::Color::Rgb(r, g, b) => (r, g, b),
                _ => (255, 255, 255),
            };
            by_color.entry(key).or_default().push(route.embedding());
        }
        for ((r, g, b), coords) in by_color {
            groups.push((ratatui::style::Color::Rgb(r, g, b), coords));
        }
    }

    let selected_point = selected_id
        .as_ref()
        .and_then(|id| state.catalog.get(id))
        .filter(|r| state.filtered.contains(routes, &r.id))
        .map(Route::embedding);
    let cursor_point = state
        .embedding_cursor
        .and_then(|pos| state.filtered.route_at(routes, pos))
        .map(Route::embedding);

    let accent = theme.accent;
    let highlight_radius = (x_max - x_min) * 0.02;

    let canvas = Canvas::default()
        .marker(Marker::Dot)
        .x_bounds([x_min, x_max])
        .y_bounds([y_min, y_max])
        .paint(move |ctx| {
            for (color, coords) in &groups {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
            if let Some((x, y)) = selected_point {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: highlight_radius,
                    color: accent,
                });
                ctx.print(
                    x,
                    y,
                    Line::from(Span::styled(
                        "◉",
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    )),
                );
            }
            if let Some((x, y)) = cursor_point {
                ctx.print(
                    x,
                    y,
                    Line::from(Span::styled("✦", Style::default().fg(accent))),
                );
            }
        });
    f.render_widget(canvas, canvas_rect);

    render_info(f, info_rect, state);
}

/// Legend line plus cursor tooltip line.
fn render_info(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut lines: Vec<Line> = Vec::with_capacity(2);

    if state.selected_route().is_some() {
        lines.push(Line::from(vec![
            Span::styled("◉ selected", Style::default().fg(theme.accent)),
            Span::styled("  · others", Style::default().fg(theme.point_muted)),
        ]));
    } else {
        // Gradient legend from low to high grade
        let steps = 16usize;
        let mut spans: Vec<Span> = vec![Span::styled(
            format!("V{:.0} ", state.bounds.grade_min),
            Style::default().fg(theme.text_secondary),
        )];
        for i in 0..steps {
            let t = i as f64 / (steps - 1) as f64;
            let grade =
                state.bounds.grade_min + t * (state.bounds.grade_max - state.bounds.grade_min);
            let color = super::theme::grade_color(
                grade,
                state.bounds.grade_min,
                state.bounds.grade_max,
            );
            spans.push(Span::styled("■", Style::default().fg(color)));
        }
        spans.push(Span::styled(
            format!(" V{:.0}", state.bounds.grade_max),
            Style::default().fg(theme.text_secondary),
        ));
        lines.push(Line::from(spans));
    }

    let tooltip = state
        .embedding_cursor
        .and_then(|pos| state.filtered.route_at(state.catalog.routes(), pos));
    if let Some(route) = tooltip {
        lines.push(Line::from(vec![
            Span::styled("▸ ", Style::default().fg(theme.accent)),
            Span::styled(
                route.name.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {}  ★{:.1}  {} ascents",
                    route.grade_label(),
                    route.quality,
                    route.ascents
                ),
                Style::default().fg(theme.text_secondary),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            "←/→ step through points · Enter select · click to pick",
            Style::default().fg(theme.text_muted),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// The canvas sub-rectangle of the embedding panel.
pub(crate) fn canvas_area(area: Rect) -> Rect {
    let inner = area.inner(Margin::new(1, 1));
    Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(INFO_ROWS),
    )
}

/// Data-space bounds for the current snapshot with a 5% margin.
///
/// Degenerate spans (single point, or identical coordinates) widen to ±1 so
/// the canvas mapping stays well-defined.
pub(crate) fn plot_bounds(
    routes: &[Route],
    filtered: &FilteredRoutes,
) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for route in filtered.iter(routes) {
        let (x, y) = route.embedding();
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if filtered.is_empty() {
        return ((-1.0, 1.0), (-1.0, 1.0));
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

/// Maps a mouse click onto the nearest filtered point within the pick
/// radius, returning its snapshot position.
///
/// Uses the same linear cell mapping as the canvas, so resolution happens
/// against the snapshot rendered at the moment of the click.
#[must_use]
pub fn hit_test(
    area: Rect,
    routes: &[Route],
    filtered: &FilteredRoutes,
    column: u16,
    row: u16,
) -> Option<usize> {
    let canvas = canvas_area(area);
    if canvas.width == 0 || canvas.height == 0 || filtered.is_empty() {
        return None;
    }

    let ((x_min, x_max), (y_min, y_max)) = plot_bounds(routes, filtered);
    let width = f64::from(canvas.width.saturating_sub(1).max(1));
    let height = f64::from(canvas.height.saturating_sub(1).max(1));

    let mut best: Option<(usize, f64)> = None;
    for (position, route) in filtered.iter(routes).enumerate() {
        let (x, y) = route.embedding();
        let cell_x = f64::from(canvas.x) + (x - x_min) / (x_max - x_min) * width;
        let cell_y = f64::from(canvas.y) + (1.0 - (y - y_min) / (y_max - y_min)) * height;

        let dx = cell_x - f64::from(column);
        let dy = cell_y - f64::from(row);
        let distance = dx.hypot(dy);

        if distance <= PICK_RADIUS && best.map_or(true, |(_, d)| distance < d) {
            best = Some((position, distance));
        }
    }

    best.map(|(position, _)| position)
}
