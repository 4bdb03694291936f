//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui. Every user action triggers one full
//! synchronous re-evaluation of the filter → embedding → detail pipeline;
//! there is no incremental update and no background work.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod board_view;
pub mod embedding_view;
pub mod filter_panel;
pub mod help_overlay;
pub mod results_list;
pub mod search_bar;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::data::RouteCatalog;
use crate::models::{DataBounds, FilterParams, Route, RouteId, Selection};
use crate::services::{filter_routes, FilteredRoutes};

pub use theme::Theme;

/// Which panel receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Name search input
    Search,
    /// Grade range control
    GradeRange,
    /// Ascent-count range control
    AscentRange,
    /// Filtered result list
    Results,
    /// Embedding scatter plot
    Embedding,
}

impl Focus {
    /// Next panel in Tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::GradeRange,
            Self::GradeRange => Self::AscentRange,
            Self::AscentRange => Self::Results,
            Self::Results => Self::Embedding,
            Self::Embedding => Self::Search,
        }
    }

    /// Previous panel in Tab order.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Search => Self::Embedding,
            Self::GradeRange => Self::Search,
            Self::AscentRange => Self::GradeRange,
            Self::Results => Self::AscentRange,
            Self::Embedding => Self::Results,
        }
    }
}

/// Popup types that can be displayed over the main UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Keybinding reference overlay
    Help,
}

/// Application state - single source of truth.
///
/// All UI components read from this state immutably. Only event handlers
/// modify state explicitly. The catalog is read-only for the process
/// lifetime; `filter` and `selection` are the session's only mutable data.
pub struct AppState {
    // Core data
    /// Loaded route catalog (immutable after startup)
    pub catalog: RouteCatalog,
    /// Observed data bounds the range controls are seeded from
    pub bounds: DataBounds,
    /// Application configuration
    pub config: Config,

    // Session state
    /// Current filter parameters (as edited in the UI)
    pub filter: FilterParams,
    /// Snapshot of routes passing the current filter, in table order
    pub filtered: FilteredRoutes,
    /// Current route selection
    pub selection: Selection,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Panel receiving keyboard input
    pub focus: Focus,
    /// Cursor position in the result list (snapshot position)
    pub results_cursor: usize,
    /// Cursor over the filtered embedding points (snapshot position)
    pub embedding_cursor: Option<usize>,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the initial session state for a loaded catalog.
    #[must_use]
    pub fn new(catalog: RouteCatalog, config: Config) -> Self {
        let bounds = catalog.bounds();
        let filter = FilterParams::from_bounds(&bounds);
        let filtered = filter_routes(catalog.routes(), &filter);
        let theme = Theme::from_mode(config.ui.theme_mode);
        let status_message = format!("Loaded {} routes", catalog.len());

        Self {
            catalog,
            bounds,
            config,
            filter,
            filtered,
            selection: Selection::new(),
            theme,
            focus: Focus::Search,
            results_cursor: 0,
            embedding_cursor: None,
            active_popup: None,
            status_message,
            error_message: None,
            should_quit: false,
        }
    }

    /// The filter that is actually applied: identical to `filter` except
    /// that a query shorter than the live-search threshold is ignored.
    #[must_use]
    pub fn effective_params(&self) -> FilterParams {
        let mut params = self.filter.clone();
        if params.query.trim().chars().count() < self.config.ui.search_min_chars {
            params.query.clear();
        }
        params
    }

    /// Rebuilds the filtered snapshot from the current parameters.
    ///
    /// This is the single place the snapshot changes. Every cursor that
    /// indexes into it is clamped here, so a position captured before a
    /// filter change can never be dereferenced after it.
    pub fn apply_filters(&mut self) {
        self.filter.clamp_to(&self.bounds);
        self.filtered = filter_routes(self.catalog.routes(), &self.effective_params());

        let len = self.filtered.len();
        if len == 0 {
            self.results_cursor = 0;
            self.embedding_cursor = None;
        } else {
            self.results_cursor = self.results_cursor.min(len - 1);
            self.embedding_cursor = self.embedding_cursor.map(|c| c.min(len - 1));
        }
    }

    /// Records a query edit and re-runs the pipeline.
    pub fn set_query(&mut self, query: String) {
        self.filter.query = query;
        if self.config.ui.clear_selection_on_search {
            self.selection.clear();
        }
        self.apply_filters();
    }

    /// Selects a route by id, unconditionally.
    pub fn select_route(&mut self, id: RouteId) {
        if let Some(route) = self.catalog.get(&id) {
            self.status_message = format!("Selected {} ({})", route.name, route.grade_label());
        } else {
            self.status_message = format!("Selected unknown route {id}");
        }
        self.selection.select(id);
    }

    /// Resolves a snapshot position into a route id and selects it.
    ///
    /// Resolution happens against the snapshot that is current right now;
    /// only the id is stored.
    pub fn select_filtered_position(&mut self, position: usize) {
        if let Some(id) = self.filtered.id_at(self.catalog.routes(), position) {
            self.select_route(id);
        }
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.status_message = "Selection cleared".to_string();
    }

    /// The selected route resolved against the full table.
    ///
    /// An id that no longer resolves is treated as no selection.
    #[must_use]
    pub fn selected_route(&self) -> Option<&Route> {
        self.selection
            .selected()
            .and_then(|id| self.catalog.get(id))
    }

    /// Copies the selected route's name and id to the system clipboard.
    pub fn yank_selected(&mut self) {
        let Some(route) = self.selected_route() else {
            self.status_message = "Nothing selected to copy".to_string();
            return;
        };
        let name = route.name.clone();
        let text = format!("{} ({})", route.name, route.id);

        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
            Ok(()) => self.status_message = format!("Copied {name}"),
            Err(e) => self.error_message = Some(format!("Clipboard unavailable: {e}")),
        }
    }

    /// Moves the embedding cursor by `delta` over the filtered points,
    /// wrapping at both ends.
    pub fn move_embedding_cursor(&mut self, delta: isize) {
        let len = self.filtered.len();
        if len == 0 {
            self.embedding_cursor = None;
            return;
        }
        let current = self.embedding_cursor.unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        self.embedding_cursor = Some(next);
    }

    /// Step size for grade range adjustments.
    #[must_use]
    pub fn grade_step(&self) -> f64 {
        0.5
    }

    /// Step size for ascent range adjustments, scaled to the data.
    #[must_use]
    pub fn ascent_step(&self) -> u32 {
        (self.bounds.ascents_max / 50).max(1)
    }
}

/// Initialize terminal for TUI.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse_event(state, mouse, area);
                }
                // Terminal resized, will re-render on next loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Top-level screen regions.
pub(crate) struct ScreenChunks {
    /// Title bar
    pub title: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar
    pub status: Rect,
}

pub(crate) fn screen_chunks(area: Rect) -> ScreenChunks {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Status bar
        ])
        .split(area);

    ScreenChunks {
        title: chunks[0],
        main: chunks[1],
        status: chunks[2],
    }
}

/// Main content regions: sidebar plus one or two plot panels.
pub(crate) struct MainChunks {
    /// Search input
    pub search: Rect,
    /// Grade range control
    pub grade: Rect,
    /// Ascent range control
    pub ascents: Rect,
    /// Result list
    pub results: Rect,
    /// Embedding scatter panel
    pub embedding: Rect,
    /// Route detail panel (present only with a resolvable selection)
    pub detail: Option<Rect>,
}

pub(crate) fn main_chunks(area: Rect, show_detail: bool) -> MainChunks {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(30)])
        .split(area);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search
            Constraint::Length(4), // Grade range
            Constraint::Length(4), // Ascent range
            Constraint::Min(5),    // Results
        ])
        .split(columns[0]);

    let (embedding, detail) = if show_detail {
        let plots = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);
        (plots[0], Some(plots[1]))
    } else {
        (columns[1], None)
    };

    MainChunks {
        search: sidebar[0],
        grade: sidebar[1],
        ascents: sidebar[2],
        results: sidebar[3],
        embedding,
        detail,
    }
}

/// Render the UI from current state.
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let screen = screen_chunks(f.area());
    render_title_bar(f, screen.title, state);

    let selected = state.selected_route();
    let main = main_chunks(screen.main, selected.is_some());

    search_bar::render(f, main.search, state);
    filter_panel::render_grade(f, main.grade, state);
    filter_panel::render_ascents(f, main.ascents, state);
    results_list::render(f, main.results, state);
    embedding_view::render(f, main.embedding, state);

    if let (Some(route), Some(detail_area)) = (selected, main.detail) {
        board_view::render(f, detail_area, state, route);
    }

    status_bar::render(f, screen.status, state);

    if state.active_popup == Some(PopupType::Help) {
        help_overlay::render(f, state);
    }
}

/// Render title bar with app name and archive provenance.
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let provenance = state
        .catalog
        .manifest()
        .map(|m| format!("  ·  export {}", m.exported_at.format("%Y-%m-%d")))
        .unwrap_or_default();

    let title = format!(
        " {} v{} — Route Explorer{} ",
        APP_NAME,
        env!("CARGO_PKG_VERSION"),
        provenance
    );

    let widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

/// Handle a keyboard event. Returns `true` when the user quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    // Any new input clears a sticky error message
    state.error_message = None;

    // Popup swallows input until dismissed
    if state.active_popup.is_some() {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1)
        ) {
            state.active_popup = None;
        }
        return Ok(false);
    }

    // Global bindings
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
        KeyCode::Tab => {
            state.focus = state.focus.next();
            return Ok(false);
        }
        KeyCode::BackTab => {
            state.focus = state.focus.previous();
            return Ok(false);
        }
        KeyCode::F(1) => {
            state.active_popup = Some(PopupType::Help);
            return Ok(false);
        }
        KeyCode::Esc => {
            if state.focus == Focus::Search && !state.filter.query.is_empty() {
                state.set_query(String::new());
            } else if !state.selection.is_empty() {
                state.clear_selection();
            }
            return Ok(false);
        }
        _ => {}
    }

    // Single-letter shortcuts apply only outside the text input
    if state.focus != Focus::Search {
        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('?') => {
                state.active_popup = Some(PopupType::Help);
                return Ok(false);
            }
            KeyCode::Char('c') => {
                state.clear_selection();
                return Ok(false);
            }
            KeyCode::Char('y') => {
                state.yank_selected();
                return Ok(false);
            }
            KeyCode::Char('r') => {
                state.filter = FilterParams::from_bounds(&state.bounds);
                state.apply_filters();
                state.status_message = "Filters reset".to_string();
                return Ok(false);
            }
            _ => {}
        }
    }

    match state.focus {
        Focus::Search => handle_search_key(state, key),
        Focus::GradeRange => handle_grade_key(state, key),
        Focus::AscentRange => handle_ascent_key(state, key),
        Focus::Results => handle_results_key(state, key),
        Focus::Embedding => handle_embedding_key(state, key),
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut query = state.filter.query.clone();
            query.push(c);
            state.set_query(query);
        }
        KeyCode::Backspace => {
            let mut query = state.filter.query.clone();
            query.pop();
            state.set_query(query);
        }
        KeyCode::Enter => {
            // Jump to the results to pick a match
            state.focus = Focus::Results;
        }
        _ => {}
    }
    Ok(false)
}

fn handle_grade_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let step = state.grade_step();
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => state.filter.grade.min -= step,
        KeyCode::Right | KeyCode::Char('l') => state.filter.grade.min += step,
        KeyCode::Down | KeyCode::Char('j') => state.filter.grade.max -= step,
        KeyCode::Up | KeyCode::Char('k') => state.filter.grade.max += step,
        _ => return Ok(false),
    }
    state.apply_filters();
    Ok(false)
}

fn handle_ascent_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let step = state.ascent_step();
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            state.filter.ascents.min = state.filter.ascents.min.saturating_sub(step);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.filter.ascents.min = state.filter.ascents.min.saturating_add(step);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.filter.ascents.max = state.filter.ascents.max.saturating_sub(step);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.filter.ascents.max = state.filter.ascents.max.saturating_add(step);
        }
        _ => return Ok(false),
    }
    state.apply_filters();
    Ok(false)
}

fn handle_results_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let len = state.filtered.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.results_cursor = state.results_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if len > 0 {
                state.results_cursor = (state.results_cursor + 1).min(len - 1);
            }
        }
        KeyCode::Home => state.results_cursor = 0,
        KeyCode::End => state.results_cursor = len.saturating_sub(1),
        KeyCode::Enter => {
            if len > 0 {
                state.select_filtered_position(state.results_cursor);
            }
        }
        _ => {}
    }
    Ok(false)
}

fn handle_embedding_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
            state.move_embedding_cursor(-1);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            state.move_embedding_cursor(1);
        }
        KeyCode::Home => {
            if !state.filtered.is_empty() {
                state.embedding_cursor = Some(0);
            }
        }
        KeyCode::End => {
            if !state.filtered.is_empty() {
                state.embedding_cursor = Some(state.filtered.len() - 1);
            }
        }
        KeyCode::Enter => {
            if let Some(position) = state.embedding_cursor {
                state.select_filtered_position(position);
            }
        }
        _ => {}
    }
    Ok(false)
}

/// Handle a mouse event against the layout for the current terminal size.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || state.active_popup.is_some() {
        return;
    }

    let screen = screen_chunks(area);
    let main = main_chunks(screen.main, state.selected_route().is_some());
    let (column, row) = (mouse.column, mouse.row);

    if main.results.contains(ratatui::layout::Position { x: column, y: row }) {
        state.focus = Focus::Results;
        if let Some(position) =
            results_list::row_at(main.results, state.filtered.len(), state.results_cursor, row)
        {
            state.results_cursor = position;
            state.select_filtered_position(position);
        }
    } else if main
        .embedding
        .contains(ratatui::layout::Position { x: column, y: row })
    {
        state.focus = Focus::Embedding;
        let hit = embedding_view::hit_test(
            main.embedding,
            state.catalog.routes(),
            &state.filtered,
            column,
            row,
        );
        if let Some(position) = hit {
            state.embedding_cursor = Some(position);
            state.select_filtered_position(position);
        }
    }
}
