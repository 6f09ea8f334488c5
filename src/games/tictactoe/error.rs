//! Errors returned by the game engine.

use derive_more::{Display, Error};

/// Invalid argument passed to the engine.
///
/// Illegal moves (occupied square, finished game) are not errors; they are
/// reported as [`MoveOutcome::Ignored`](super::MoveOutcome::Ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A history step outside the recorded history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested display step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// A cell index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::StepOutOfRange { step: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Step 7 is out of range (history has 3 entries)"
        );
        assert_eq!(
            EngineError::CellOutOfRange(9).to_string(),
            "Cell 9 is out of range (must be 0-8)"
        );
    }
}
