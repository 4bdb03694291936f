//! Grade and ascent range controls.
//!
//! Both ranges are seeded from the observed data bounds and rendered as a
//! labeled bar with the active window drawn solid between the two handles.

use ratatui::{
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus};

/// Render the grade range control.
pub fn render_grade(f: &mut Frame, area: Rect, state: &AppState) {
    let bounds = state.bounds;
    let span = bounds.grade_max - bounds.grade_min;
    let (lo_frac, hi_frac) = if span > f64::EPSILON {
        (
            (state.filter.grade.min - bounds.grade_min) / span,
            (state.filter.grade.max - bounds.grade_min) / span,
        )
    } else {
        (0.0, 1.0)
    };

    render_range(
        f,
        area,
        state,
        Focus::GradeRange,
        " Grade ",
        &format!(
            "V{:.1} – V{:.1}",
            state.filter.grade.min, state.filter.grade.max
        ),
        lo_frac,
        hi_frac,
    );
}

/// Render the ascent-count range control.
pub fn render_ascents(f: &mut Frame, area: Rect, state: &AppState) {
    let bounds = state.bounds;
    let span = f64::from(bounds.ascents_max.saturating_sub(bounds.ascents_min));
    let (lo_frac, hi_frac) = if span > 0.0 {
        (
            f64::from(state.filter.ascents.min.saturating_sub(bounds.ascents_min)) / span,
            f64::from(state.filter.ascents.max.saturating_sub(bounds.ascents_min)) / span,
        )
    } else {
        (0.0, 1.0)
    };

    render_range(
        f,
        area,
        state,
        Focus::AscentRange,
        " Ascents ",
        &format!(
            "{} – {}",
            state.filter.ascents.min, state.filter.ascents.max
        ),
        lo_frac,
        hi_frac,
    );
}

#[allow(clippy::too_many_arguments)]
fn render_range(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    focus: Focus,
    title: &str,
    label: &str,
    lo_frac: f64,
    hi_frac: f64,
) {
    let theme = &state.theme;
    let focused = state.focus == focus;

    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    f.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let bar_color = if focused { theme.accent } else { theme.primary };
    let lines = vec![
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            range_bar(inner.width as usize, lo_frac, hi_frac),
            Style::default().fg(bar_color),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

/// Draws a `width`-character bar with the selected window solid.
///
/// Fractions are clamped into [0, 1]; the handles are always visible even
/// for a collapsed window.
pub(crate) fn range_bar(width: usize, lo_frac: f64, hi_frac: f64) -> String {
    if width == 0 {
        return String::new();
    }
    let lo = lo_frac.clamp(0.0, 1.0);
    let hi = hi_frac.clamp(lo, 1.0);

    let last = width - 1;
    let lo_cell = (lo * last as f64).round() as usize;
    let hi_cell = (hi * last as f64).round() as usize;

    (0..width)
        .map(|cell| {
            if cell == lo_cell || cell == hi_cell {
                '┃'
            } else if cell > lo_cell && cell < hi_cell {
                '━'
            } else {
                '─'
            }
        })
        .collect()
}
