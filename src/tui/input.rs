//! Key mapping and cursor movement for keyboard navigation.

use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor or the move-list selection.
    Navigate(Direction),
    /// Place at the cursor, or jump to the selected move.
    Activate,
    /// Place directly on a square.
    PlaceAt(Position),
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Reverse the move list.
    ToggleOrder,
    /// Start over.
    NewGame,
    /// Leave the application.
    Quit,
}

/// Decodes a key event. Releases and repeats are ignored.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(Action::Navigate(Direction::Up)),
        KeyCode::Down => Some(Action::Navigate(Direction::Down)),
        KeyCode::Left => Some(Action::Navigate(Direction::Left)),
        KeyCode::Right => Some(Action::Navigate(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Char('t') => Some(Action::ToggleOrder),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        // Keys 1-9 map to squares 0-8.
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(Action::PlaceAt),
        _ => None,
    }
}

/// Moves the board cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (col, row) = (cursor.column(), cursor.row());
    let (col, row) = match direction {
        Direction::Up => (col, row.saturating_sub(1)),
        Direction::Down => (col, (row + 1).min(2)),
        Direction::Left => (col.saturating_sub(1), row),
        Direction::Right => ((col + 1).min(2), row),
    };
    Position::from_column_row(col, row).unwrap_or(cursor)
}
