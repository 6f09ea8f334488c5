//! Read-only snapshot handed to a View on each render.

use super::{Board, GameStateEngine, Position, Status};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_new::new)]
pub struct MoveEntry {
    /// Button label, e.g. "Go to move #2 where O moved to (0, 0)".
    pub description: String,
    /// Index to pass to [`GameStateEngine::jump_to`].
    pub display_step: usize,
    /// Move number counted from game start.
    pub logical_step: usize,
    /// True for the record under the cursor.
    pub is_current: bool,
}

/// Everything a View needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Board of the current record.
    board: Board,
    /// Squares to highlight when the current board is won.
    winning_line: Option<[Position; 3]>,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Derived status.
    status: Status,
    /// Status rendered for the status line.
    status_line: String,
    /// True when the move list is newest first.
    reversed: bool,
}

impl GameView {
    /// Builds a snapshot of `engine`.
    #[instrument(skip(engine), fields(step = engine.step_number(), len = engine.history_len()))]
    pub fn from_engine(engine: &GameStateEngine) -> Self {
        let moves = engine
            .records()
            .iter()
            .enumerate()
            .map(|(display_step, record)| {
                let logical_step = engine.flip_index(display_step);
                MoveEntry::new(
                    record.describe(logical_step),
                    display_step,
                    logical_step,
                    logical_step == engine.step_number(),
                )
            })
            .collect();
        let status = engine.status();

        Self {
            board: *engine.current().squares(),
            winning_line: engine.winning_line().map(|line| line.cells),
            moves,
            status,
            status_line: status.to_string(),
            reversed: engine.is_reversed(),
        }
    }

    /// True if `pos` belongs to the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.winning_line
            .is_some_and(|cells| cells.contains(&pos))
    }

    /// Display index of the current entry.
    pub fn current_display_step(&self) -> Option<usize> {
        self.moves
            .iter()
            .find(|entry| entry.is_current)
            .map(|entry| entry.display_step)
    }

    /// Serializes the snapshot as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl GameStateEngine {
    /// Snapshot for rendering.
    pub fn view(&self) -> GameView {
        GameView::from_engine(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(moves: &[Position]) -> GameStateEngine {
        let mut engine = GameStateEngine::new();
        for pos in moves {
            let _ = engine.apply_move(*pos);
        }
        engine
    }

    #[test]
    fn test_move_list_in_order() {
        let view = engine_with(&[Position::Center, Position::TopLeft]).view();
        let labels: Vec<&str> = view.moves().iter().map(|m| m.description.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Go to game start",
                "Go to move #1 where X moved to (1, 1)",
                "Go to move #2 where O moved to (0, 0)",
            ]
        );
        assert_eq!(view.current_display_step(), Some(2));
        assert_eq!(view.status_line(), "Next player: X");
    }

    #[test]
    fn test_move_list_reversed() {
        let mut engine = engine_with(&[Position::Center, Position::TopLeft]);
        engine.toggle_order();
        let view = engine.view();
        let steps: Vec<usize> = view.moves().iter().map(|m| m.logical_step).collect();
        assert_eq!(steps, [2, 1, 0]);
        assert_eq!(view.moves()[2].description, "Go to game start");
        assert_eq!(view.current_display_step(), Some(0));
        assert!(*view.reversed());
    }

    #[test]
    fn test_winning_squares_highlighted() {
        let view = engine_with(&[
            Position::TopLeft,
            Position::Center,
            Position::MiddleLeft,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .view();
        assert_eq!(view.status_line(), "Winner: X");
        assert!(view.is_winning_square(Position::MiddleLeft));
        assert!(!view.is_winning_square(Position::Center));
    }

    #[test]
    fn test_json_snapshot() {
        let view = engine_with(&[Position::Center]).view();
        let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();
        assert_eq!(json["status_line"], "Next player: O");
        assert_eq!(json["moves"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["moves"][1]["is_current"], true);
    }
}
