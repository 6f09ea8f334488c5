//! Derived game status shown above the move list.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status of the record under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player has three in a row.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// All nine squares were filled without a winner.
    #[display("Draw!")]
    Draw,
    /// The game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true if no further moves are accepted on the current board.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Draw.to_string(), "Draw!");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_finished() {
        assert!(Status::Draw.is_finished());
        assert!(!Status::NextPlayer(Player::X).is_finished());
        assert_eq!(Status::Winner(Player::O).winner(), Some(Player::O));
    }
}
