//! Betaboard - Terminal explorer for climbing-board routes
//!
//! This application renders a precomputed 2-D embedding of climbing routes,
//! lets the user filter by grade and ascent count, search by name, and view
//! a selected route's holds on its board layout. Subcommands give headless,
//! scriptable access to the same data for automation and CI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use betaboard::app;
use betaboard::cli;
use betaboard::config::Config;
use betaboard::constants::{APP_BINARY_NAME, APP_NAME, DEFAULT_ARCHIVE_NAME};

/// Betaboard - Terminal explorer for climbing-board routes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the route data archive (zip)
    #[arg(value_name = "ARCHIVE")]
    archive: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List routes passing a grade/ascent/name filter
    Routes(cli::RoutesArgs),
    /// Show one route's summary and its holds grouped by role
    Inspect(cli::InspectArgs),
    /// Check a route data archive for integrity issues
    Validate(cli::ValidateArgs),
}

/// Diagnostics for headless commands go to stderr so `--json` output on
/// stdout stays machine-readable.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        init_tracing();
        let result = match command {
            Command::Routes(args) => args.execute(),
            Command::Inspect(args) => args.execute(),
            Command::Validate(args) => args.execute(),
        };
        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
        return;
    }

    if let Err(e) = run_explorer(cli.archive) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Resolves the archive path and launches the interactive explorer.
fn run_explorer(archive: Option<PathBuf>) -> anyhow::Result<()> {
    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Terminal explorer for climbing-board routes");
    println!();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e}");
        eprintln!();
        Config::default()
    });

    let path = match archive.or_else(|| config.paths.data_archive.clone()) {
        Some(path) => path,
        None => {
            eprintln!("Error: No route data archive specified.");
            eprintln!();
            eprintln!("Pass the archive produced by the export pipeline as an argument:");
            eprintln!("  {APP_BINARY_NAME} {DEFAULT_ARCHIVE_NAME}");
            eprintln!("  {APP_BINARY_NAME} path/to/{DEFAULT_ARCHIVE_NAME}");
            eprintln!();
            eprintln!("Or set it once in the config file:");
            if let Ok(config_path) = Config::config_file_path() {
                eprintln!("  # {}", config_path.display());
            }
            eprintln!("  [paths]");
            eprintln!("  data_archive = \"/path/to/{DEFAULT_ARCHIVE_NAME}\"");
            eprintln!();
            eprintln!("For more options, run:");
            eprintln!("  {APP_BINARY_NAME} --help");
            std::process::exit(1);
        }
    };

    if !path.exists() {
        eprintln!("Error: Data archive not found: {}", path.display());
        eprintln!();
        eprintln!("Check the path, or validate the archive with:");
        eprintln!(
            "  {APP_BINARY_NAME} validate --archive {}",
            path.display()
        );
        std::process::exit(1);
    }

    app::launch_explorer(config, &path)
}
