//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameStateEngine, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The record at logical index `k` was placed by X when `k` is odd and by
/// O when `k` is even. The stored turn flag agrees with the cursor parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameStateEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameStateEngine) -> bool {
        let alternates = engine
            .logical_records()
            .enumerate()
            .skip(1)
            .all(|(k, record)| {
                let expected = if k % 2 == 1 { Player::X } else { Player::O };
                record.player() == Some(expected)
            });

        alternates && engine.x_is_next() == (engine.step_number() % 2 == 0)
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{MoveRecord, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameStateEngine::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = GameStateEngine::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ] {
            let _ = engine.apply_move(pos);
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.to_move(), Player::X);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut engine = GameStateEngine::new();
        let _ = engine.apply_move(Position::TopLeft);
        let twice = engine.history[1].successor(Player::X, Position::Center);
        engine.history.push(twice);
        engine.step_number = 2;
        engine.x_is_next = true;
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_stale_turn_flag_violates() {
        let mut engine = GameStateEngine::new();
        engine.history = vec![
            MoveRecord::initial(),
            MoveRecord::initial().successor(Player::X, Position::Center),
        ];
        engine.step_number = 1;
        engine.x_is_next = true;
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
