//! Command-line interface for the tic-tac-toe binary.

use crate::config::{ConfigError, TuiConfig};
use crate::games::tictactoe::Position;
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Show the move list newest first (overrides config)
    #[arg(long)]
    pub reversed: bool,

    /// Moves to replay before starting, as cell indices (0-8) or labels
    #[arg(short, long, value_delimiter = ',')]
    pub moves: Vec<String>,

    /// Print the game snapshot as JSON and exit
    #[arg(long)]
    pub snapshot: bool,
}

impl Cli {
    /// Loads the config file, if any, and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => TuiConfig::from_file(path)?,
            None => TuiConfig::default(),
        };

        if self.reversed {
            config = config.with_reversed(true);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        Ok(config)
    }

    /// Parses the `--moves` list.
    pub fn positions(&self) -> Result<Vec<Position>, ConfigError> {
        self.moves
            .iter()
            .map(|m| {
                Position::from_label_or_number(m)
                    .ok_or_else(|| ConfigError::new(format!("Invalid move: {:?}", m)))
            })
            .collect()
    }
}
