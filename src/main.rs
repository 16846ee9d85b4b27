//! devotion-tui - Terminal devotion planner
//!
//! Draws the devotion constellations in the terminal and drives a devotion
//! planner backend over HTTP: unlock and lock stars, blink-unlock whole paths
//! and page through the accumulated bonuses.

mod catalog;
mod clipboard;
mod config;
mod core;
mod data;
mod frontend;
mod network;
mod protocol;
mod widgets;

use anyhow::Result;
use clap::{Parser as ClapParser, Subcommand};
use frontend::Frontend;
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "devotion-tui")]
#[command(about = "Terminal devotion planner", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Backend base URL (overrides connection.base_url)
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Custom data directory (default: ~/.devotion-tui)
    /// Can also be set via DEVOTION_TUI_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Star catalog file (default: stars.toml in the data directory)
    #[arg(long, value_name = "FILE")]
    stars: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a star catalog
    ValidateStars {
        /// Catalog file to validate
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("devotion-tui.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set custom data directory if specified (via CLI or environment variable)
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DATA_DIR_ENV, data_dir);
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var(config::DATA_DIR_ENV) {
        tracing::info!("Using data directory from {}: {}", config::DATA_DIR_ENV, env_dir);
    }

    // Handle subcommands
    if let Some(Commands::ValidateStars { file }) = cli.command {
        let code = validate_stars(file.or(cli.stars));
        std::process::exit(code);
    }

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => config::Config::load_from_path(path)?,
        None => config::Config::load()?,
    };
    if let Some(url) = cli.url {
        config.connection.base_url = url;
    }

    let catalog = match &cli.stars {
        Some(path) => catalog::StarCatalog::load_from_file(path)?,
        None => catalog::StarCatalog::load()?,
    };
    let validation = catalog::validator::validate_catalog(&catalog);
    for issue in &validation.issues {
        tracing::warn!("Star catalog: {}", issue.message());
    }

    run_tui(config, catalog)
}

/// Print a catalog summary; returns the process exit code
fn validate_stars(file: Option<PathBuf>) -> i32 {
    let loaded = match &file {
        Some(path) => {
            println!("Validating star catalog: {:?}", path);
            catalog::StarCatalog::load_from_file(path)
        }
        None => {
            println!("Validating default star catalog");
            catalog::StarCatalog::load()
        }
    };

    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("✗ Failed to load star catalog: {:#}", e);
            return 1;
        }
    };

    let (cols, rows) = catalog.grid_size();
    println!("✓ Star catalog loaded successfully");
    println!(
        "  {} stars in {} constellations ({}x{} grid)",
        catalog.len(),
        catalog.constellations().len(),
        cols,
        rows
    );

    let result = catalog::validator::validate_catalog(&catalog);
    for error in result.errors() {
        eprintln!("✗ Error: {}", error.message());
    }
    for warning in result.warnings() {
        println!("⚠ Warning: {}", warning.message());
    }

    if result.issues.is_empty() {
        println!("✓ Star catalog is valid with no issues");
        0
    } else if result.has_errors() {
        eprintln!("\n✗ Found {} error(s)", result.errors().len());
        1
    } else {
        println!("⚠ Found {} warning(s)", result.warnings().len());
        2
    }
}

/// Run TUI frontend
fn run_tui(config: config::Config, catalog: catalog::StarCatalog) -> Result<()> {
    // Use tokio runtime for async network I/O
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_run_tui(config, catalog))
}

/// Async TUI main loop with network support
async fn async_run_tui(config: config::Config, catalog: catalog::StarCatalog) -> Result<()> {
    use core::AppCore;
    use frontend::{FrontendEvent, TuiFrontend};
    use network::{ApiRequest, BackendConnection, ServerMessage};
    use tokio::sync::mpsc;

    // Create channels for network communication
    let (server_tx, mut server_rx) = mpsc::unbounded_channel::<ServerMessage>();
    let (request_tx, request_rx) = mpsc::unbounded_channel::<ApiRequest>();

    let connection = config.connection.clone();
    let poll_interval = std::time::Duration::from_millis(config.ui.poll_interval_ms);

    // Create core application state
    let mut app_core = AppCore::new(config, catalog, request_tx);

    // Create TUI frontend
    let mut frontend = TuiFrontend::new()?;
    frontend.set_poll_timeout(poll_interval);

    // Spawn network connection task
    let network_handle = tokio::spawn(async move {
        if let Err(e) = BackendConnection::start(connection, server_tx, request_rx).await {
            tracing::error!(error = ?e, "Backend connection error");
        }
    });

    // Main event loop
    while app_core.running {
        // Poll for frontend events (keyboard, mouse, resize)
        for event in frontend.poll_events()? {
            match event {
                FrontendEvent::Key { code, modifiers } => {
                    tracing::debug!("Key event: code={:?}, modifiers={:?}", code, modifiers);
                    app_core.handle_key(crossterm::event::KeyEvent::new(code, modifiers));
                }
                FrontendEvent::Mouse { kind, x, y, .. } => {
                    app_core.handle_mouse(kind, x, y);
                }
                FrontendEvent::Resize { width, height } => {
                    tracing::debug!("Resize: {}x{}", width, height);
                    app_core.needs_render = true;
                }
            }
        }

        // Poll for server messages (non-blocking)
        while let Ok(msg) = server_rx.try_recv() {
            app_core.handle_server_message(msg);
        }

        // Render if needed
        if app_core.needs_render {
            frontend.render(&mut app_core)?;
            app_core.needs_render = false;
        }

        // The poll timeout bounds the frame rate, but yield so the backend task runs
        tokio::task::yield_now().await;
    }

    // Cleanup
    frontend.cleanup()?;

    // Stop the backend task
    network_handle.abort();
    let _ = network_handle.await;

    Ok(())
}
