//! Monotonic board invariant: each record fills exactly one empty square.

use super::super::{GameStateEngine, MoveRecord};
use super::Invariant;

/// Invariant: every record derives from its logical predecessor.
///
/// The game-start record has an empty board and no placement. Record `k`
/// equals record `k - 1` with only the placement square changed from
/// Empty to the mover's mark.
pub struct MonotonicBoardInvariant;

fn follows(prev: &MoveRecord, next: &MoveRecord) -> bool {
    match next.placement() {
        None => false,
        Some(placement) => {
            prev.squares().is_empty(placement.position)
                && *next.squares() == prev.squares().with_mark(placement.position, placement.player)
        }
    }
}

impl Invariant<GameStateEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameStateEngine) -> bool {
        let records: Vec<&MoveRecord> = engine.logical_records().collect();

        let Some(start) = records.first() else {
            return false;
        };
        if !start.is_initial() || start.squares().occupied_count() != 0 {
            return false;
        }

        records.windows(2).all(|pair| follows(pair[0], pair[1]))
    }

    fn description() -> &'static str {
        "Each record fills exactly one previously empty square"
    }
}
