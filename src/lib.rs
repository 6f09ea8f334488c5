//! Strictly tic-tac-toe - game state engine with time travel
//!
//! A tic-tac-toe engine that keeps every board since game start, lets the
//! player jump back to any of them, and branches history when a move is
//! made from the past.
//!
//! # Architecture
//!
//! - **Engine**: [`GameStateEngine`] owns history, cursor and turn tracking
//! - **Rules**: pure win and draw detection over a [`Board`]
//! - **View**: [`GameView`] snapshots rendered by the terminal view in [`tui`]
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameStateEngine, Position, Status, Player};
//!
//! let mut engine = GameStateEngine::new();
//! let _ = engine.apply_move(Position::Center);
//! let _ = engine.apply_move(Position::TopLeft);
//!
//! // Go back to the first move and play a different reply.
//! engine.jump_to(1).unwrap();
//! let _ = engine.apply_move(Position::BottomRight);
//!
//! assert_eq!(engine.history_len(), 3);
//! assert_eq!(engine.status(), Status::NextPlayer(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod games;
pub mod tui;

// Crate-level exports - Configuration
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, EngineError, GameStateEngine, GameView, IgnoreReason, MAX_HISTORY, MoveEntry,
    MoveOutcome, MoveRecord, Placement, Player, Position, Square, Status, WinningLine,
};
