//! Tic-tac-toe with move history and time travel.

mod engine;
mod error;
mod position;
mod record;
mod status;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use engine::{GameStateEngine, IgnoreReason, MAX_HISTORY, MoveOutcome};
pub use error::EngineError;
pub use position::Position;
pub use record::{MoveRecord, Placement};
pub use rules::WinningLine;
pub use status::Status;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry};
