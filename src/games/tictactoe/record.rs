//! History records: one immutable board snapshot per move.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// A mark placed by a player: the event that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// The player who moved.
    pub player: Player,
    /// The square that was filled.
    pub position: Position,
}

impl Placement {
    /// Column of the filled square (0-2).
    pub fn column(&self) -> usize {
        self.position.column()
    }

    /// Row of the filled square (0-2).
    pub fn row(&self) -> usize {
        self.position.row()
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} moved to ({}, {})", self.player, self.column(), self.row())
    }
}

/// Snapshot of the board after a move.
///
/// The initial record of every history has an empty board and no placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    squares: Board,
    placement: Option<Placement>,
}

impl MoveRecord {
    /// The game-start record.
    pub fn initial() -> Self {
        Self {
            squares: Board::new(),
            placement: None,
        }
    }

    /// Derives the record that follows `self` when `player` fills `position`.
    ///
    /// The caller checks that the square is empty.
    pub(crate) fn successor(&self, player: Player, position: Position) -> Self {
        Self {
            squares: self.squares.with_mark(position, player),
            placement: Some(Placement::new(player, position)),
        }
    }

    /// Board after this move.
    pub fn squares(&self) -> &Board {
        &self.squares
    }

    /// The mark that produced this record, `None` for game start.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Player who moved, `None` for game start.
    pub fn player(&self) -> Option<Player> {
        self.placement.map(|p| p.player)
    }

    /// Column of the filled square, `None` for game start.
    pub fn column(&self) -> Option<usize> {
        self.placement.map(|p| p.column())
    }

    /// Row of the filled square, `None` for game start.
    pub fn row(&self) -> Option<usize> {
        self.placement.map(|p| p.row())
    }

    /// Returns true for the game-start record.
    pub fn is_initial(&self) -> bool {
        self.placement.is_none()
    }

    /// Label for the move list entry of this record.
    pub fn describe(&self, move_number: usize) -> String {
        match self.placement {
            None => "Go to game start".to_string(),
            Some(placement) => format!("Go to move #{} where {}", move_number, placement),
        }
    }
}

impl Default for MoveRecord {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_record() {
        let record = MoveRecord::initial();
        assert!(record.is_initial());
        assert_eq!(record.column(), None);
        assert_eq!(record.row(), None);
        assert_eq!(record.player(), None);
        assert_eq!(record.describe(0), "Go to game start");
    }

    #[test]
    fn test_successor_fills_one_square() {
        let start = MoveRecord::initial();
        let next = start.successor(Player::X, Position::MiddleRight);
        assert_eq!(next.squares().occupied_count(), 1);
        assert_eq!(next.column(), Some(2));
        assert_eq!(next.row(), Some(1));
        assert!(start.squares().is_empty(Position::MiddleRight));
    }

    #[test]
    fn test_describe_move() {
        let record = MoveRecord::initial()
            .successor(Player::X, Position::Center)
            .successor(Player::O, Position::BottomLeft);
        assert_eq!(record.describe(2), "Go to move #2 where O moved to (0, 2)");
    }
}
