//! Tic-tac-toe - terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use strictly_tictactoe::{Cli, GameStateEngine, MoveOutcome, TuiConfig, tui};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if cli.snapshot {
        init_stderr_tracing();
    } else {
        init_file_tracing(config.log_file())?;
    }

    let engine = replay(&cli, &config)?;

    if cli.snapshot {
        println!("{}", engine.view().to_json()?);
        return Ok(());
    }

    tui::run(engine, &config)
}

/// Builds the starting engine from config and the `--moves` list.
fn replay(cli: &Cli, config: &TuiConfig) -> Result<GameStateEngine> {
    let mut engine = GameStateEngine::new();
    if *config.reversed() {
        engine.toggle_order();
    }

    for position in cli.positions()? {
        if let MoveOutcome::Ignored(reason) = engine.apply_move(position) {
            warn!(%position, %reason, "Replayed move ignored");
        }
    }

    info!(
        moves = engine.history_len() - 1,
        status = %engine.status(),
        "Game ready"
    );
    Ok(engine)
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs go to a file while the terminal belongs to the view.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .init();
}
