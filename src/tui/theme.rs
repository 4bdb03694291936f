//! Theme system for consistent UI colors across dark and light modes.
//!
//! Besides the semantic UI palette this module owns the two data-driven
//! color encodings: the continuous grade ramp used by the embedding view
//! and the fixed per-role colors used by the board view.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::HoldRole;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations
    pub success: Color,
    /// Error state color
    pub error: Color,
    /// Warning state color
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels
    pub text_secondary: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels and elevated elements
    pub surface: Color,

    /// Color for non-selected points when a selection highlight is active
    pub point_muted: Color,
}

/// Theme variant selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Dark theme optimized for dark terminal backgrounds
    Dark,
    /// Light theme optimized for light terminal backgrounds
    Light,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Light => Self::light(),
            // Fall back to dark theme for dark mode or unspecified
            dark_light::Mode::Dark | dark_light::Mode::Default => Self::dark(),
        }
    }

    /// Resolves a configured theme mode into a concrete theme.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),

            point_muted: Color::Rgb(110, 110, 110),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),

            point_muted: Color::Rgb(170, 170, 170),
        }
    }

    /// Returns the theme variant for the current theme.
    #[must_use]
    pub const fn variant(&self) -> ThemeVariant {
        match self.background {
            Color::White | Color::Rgb(255, 255, 255) | Color::Rgb(245, 245, 245) => {
                ThemeVariant::Light
            }
            _ => ThemeVariant::Dark,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

/// Anchor stops of the low-to-high grade ramp.
///
/// Perceptually ordered dark-purple → teal → yellow, matching the scale the
/// export pipeline uses for its own previews.
const GRADE_RAMP: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Maps a grade onto the continuous ramp between the observed bounds.
///
/// A degenerate range (min == max) lands on the middle stop.
#[must_use]
pub fn grade_color(grade: f64, min: f64, max: f64) -> Color {
    let t = if max > min {
        ((grade - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.5
    };

    let scaled = t * (GRADE_RAMP.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(GRADE_RAMP.len() - 1);
    let frac = scaled - lower as f64;

    let (r0, g0, b0) = GRADE_RAMP[lower];
    let (r1, g1, b1) = GRADE_RAMP[upper];
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;

    Color::Rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Fixed marker color per hold role.
///
/// Unknown roles have no color because they are never rendered.
#[must_use]
pub const fn role_color(role: HoldRole) -> Option<Color> {
    match role {
        HoldRole::Start => Some(Color::Green),
        HoldRole::Hand => Some(Color::Cyan),
        HoldRole::Finish => Some(Color::Magenta),
        HoldRole::Foot => Some(Color::Rgb(255, 165, 0)),
        HoldRole::Unknown => None,
    }
}
