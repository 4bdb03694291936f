//! Explorer startup orchestration.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::data;
use crate::tui;

/// Loads the route archive and runs the explorer TUI to completion.
///
/// The archive is loaded before the terminal enters the alternate screen, so
/// a broken export fails with a readable error instead of a corrupted
/// terminal. The terminal is restored even when the run loop errors.
pub fn launch_explorer(config: Config, archive_path: &Path) -> Result<()> {
    let catalog = data::load_archive(archive_path).with_context(|| {
        format!(
            "Could not load route data from {}",
            archive_path.display()
        )
    })?;

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(catalog, config);

    let result = tui::run_tui(&mut state, &mut terminal);

    tui::restore_terminal(terminal)?;

    result
}
