//! History consistency invariant: cursor and orientation agree with storage.

use super::super::{GameStateEngine, MAX_HISTORY};
use super::Invariant;

/// Invariant: the cursor addresses a stored record and the game-start
/// record sits at the end implied by the order flag.
///
/// History holds between 1 and 10 records. The game-start record is first
/// in display order, or last when the order is reversed.
pub struct HistoryConsistentInvariant;

impl Invariant<GameStateEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameStateEngine) -> bool {
        let records = engine.records();
        let len = records.len();

        if len == 0 || len > MAX_HISTORY || engine.step_number() >= len {
            return false;
        }

        let start = if engine.is_reversed() {
            &records[len - 1]
        } else {
            &records[0]
        };
        start.is_initial()
    }

    fn description() -> &'static str {
        "Cursor is within history and game start is at the ordered end"
    }
}
