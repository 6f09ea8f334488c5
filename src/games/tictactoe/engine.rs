//! Game state engine: move history, time travel and history ordering.
//!
//! The engine owns every record produced since game start. A View reads
//! snapshots from it and forwards user input through three operations:
//! [`apply_move`](GameStateEngine::apply_move),
//! [`jump_to`](GameStateEngine::jump_to) and
//! [`toggle_order`](GameStateEngine::toggle_order).
//!
//! Records are stored in display order. When the order is reversed the
//! newest record comes first and the game-start record is last. The cursor
//! (`step_number`) is always a *logical* index, where 0 is game start, so
//! toggling the order never changes which move is current.

use super::error::EngineError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::record::{MoveRecord, Placement};
use super::rules::{self, WinningLine};
use super::status::Status;
use super::{Player, Position};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

/// Maximum history length: game start plus nine moves.
pub const MAX_HISTORY: usize = 10;

/// Why a move was dropped without changing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The current board already has a winner.
    #[display("game is already won")]
    GameOver,
    /// The target square is filled.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of [`GameStateEngine::apply_move`].
///
/// Ignored moves are part of normal play, not failures. Views may discard
/// this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoveOutcome {
    /// A new record was created.
    Applied(Placement),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move produced a new record.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

/// Tic-tac-toe engine with full move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStateEngine {
    /// Records in display order.
    pub(crate) history: Vec<MoveRecord>,
    /// Logical index of the current record.
    pub(crate) step_number: usize,
    /// True iff X moves next.
    pub(crate) x_is_next: bool,
    /// True when history is displayed newest first.
    pub(crate) reversed: bool,
}

impl GameStateEngine {
    /// Creates an engine holding only the game-start record.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![MoveRecord::initial()],
            step_number: 0,
            x_is_next: true,
            reversed: false,
        }
    }

    /// Starts a new game, keeping the current history order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let reversed = self.reversed;
        *self = Self::new();
        self.reversed = reversed;
        info!(reversed, "New game");
    }

    /// Number of records, including game start.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Logical index of the current record.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// True iff X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// True when history is displayed newest first.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Player to move on the current board.
    pub fn to_move(&self) -> Player {
        Player::from_x_is_next(self.x_is_next)
    }

    /// Translates between display and logical indices.
    ///
    /// The mapping is its own inverse.
    pub fn flip_index(&self, index: usize) -> usize {
        if self.reversed {
            self.history.len() - 1 - index
        } else {
            index
        }
    }

    /// Records in display order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Record at a logical index.
    pub fn record(&self, logical: usize) -> Option<&MoveRecord> {
        if logical < self.history.len() {
            self.history.get(self.flip_index(logical))
        } else {
            None
        }
    }

    /// Records in logical order, game start first.
    pub fn logical_records(&self) -> impl DoubleEndedIterator<Item = &MoveRecord> + '_ {
        (0..self.history.len()).map(move |i| &self.history[self.flip_index(i)])
    }

    /// The record under the cursor.
    pub fn current(&self) -> &MoveRecord {
        &self.history[self.flip_index(self.step_number)]
    }

    /// Places the current player's mark at `position`.
    ///
    /// Moves on a won board or onto a filled square are ignored and leave
    /// the state unchanged. Otherwise every record after the cursor is
    /// discarded, the new record becomes current and the turn passes.
    #[instrument(skip(self), fields(step = self.step_number, reversed = self.reversed))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        let current = *self.current();

        if rules::winning_line(current.squares()).is_some() {
            debug!(%position, "Ignoring move on a won board");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !current.squares().is_empty(position) {
            debug!(%position, "Ignoring move onto an occupied square");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(position));
        }

        let player = self.to_move();
        let next = current.successor(player, position);
        let keep = self.step_number + 1;
        let discarded = self.history.len() - keep;

        if self.reversed {
            self.history.drain(..discarded);
            self.history.insert(0, next);
        } else {
            self.history.truncate(keep);
            self.history.push(next);
        }
        self.step_number = keep;
        self.x_is_next = !self.x_is_next;

        info!(%player, %position, step = keep, discarded, "Move applied");
        self.check_invariants();

        MoveOutcome::Applied(Placement::new(player, position))
    }

    /// Places a mark by raw cell index (0-8, row-major).
    pub fn apply_move_at(&mut self, cell: usize) -> Result<MoveOutcome, EngineError> {
        let position = Position::from_index(cell).ok_or_else(|| {
            warn!(cell, "Rejecting out-of-range cell");
            EngineError::CellOutOfRange(cell)
        })?;
        Ok(self.apply_move(position))
    }

    /// Moves the cursor to the record at display index `step`.
    ///
    /// History is not modified; later records stay until the next move.
    #[instrument(skip(self), fields(reversed = self.reversed))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Rejecting jump outside history");
            return Err(EngineError::StepOutOfRange { step, len });
        }

        let logical = self.flip_index(step);
        self.step_number = logical;
        self.x_is_next = logical % 2 == 0;

        debug!(logical, "Jumped");
        self.check_invariants();
        Ok(())
    }

    /// Reverses the display order of the whole history.
    ///
    /// The game-start record moves with the others. The current move is
    /// unchanged.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.history.reverse();
        self.reversed = !self.reversed;

        debug!(reversed = self.reversed, "History order toggled");
        self.check_invariants();
    }

    /// Completed line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self.current().squares())
    }

    /// Status of the current board.
    ///
    /// A draw is reported once the history holds all nine moves and the
    /// current board has no winner.
    pub fn status(&self) -> Status {
        if let Some(line) = self.winning_line() {
            Status::Winner(line.player)
        } else if self.history.len() == MAX_HISTORY {
            Status::Draw
        } else {
            Status::NextPlayer(self.to_move())
        }
    }

    /// Move-list label of the record at a logical index.
    pub fn describe_move(&self, logical: usize) -> Option<String> {
        self.record(logical).map(|record| record.describe(logical))
    }

    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let result = EngineInvariants::check_all(self);
        if let Err(violations) = &result {
            for violation in violations {
                error!(invariant = %violation.description, "Engine invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "engine invariants violated: {:?}", result);
    }
}

impl Default for GameStateEngine {
    fn default() -> Self {
        Self::new()
    }
}
