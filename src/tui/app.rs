//! Application state and logic.

use crate::config::TuiConfig;
use crate::games::tictactoe::{GameStateEngine, GameView, MoveOutcome, Position};
use tracing::{debug, info, warn};

use super::input::{Action, Direction, move_cursor};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    History,
}

/// Main application state.
///
/// Holds the engine and the view-only state around it: board cursor,
/// move-list selection and focus. All game changes go through the engine.
pub struct App {
    engine: GameStateEngine,
    view: GameView,
    cursor: Position,
    selected: usize,
    focus: Focus,
    highlight_winner: bool,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the application around an existing engine.
    pub fn new(engine: GameStateEngine, config: &TuiConfig) -> Self {
        let view = engine.view();
        let selected = view.current_display_step().unwrap_or(0);
        Self {
            engine,
            view,
            cursor: Position::Center,
            selected,
            focus: Focus::default(),
            highlight_winner: *config.highlight_winner(),
            message: None,
            should_quit: false,
        }
    }

    /// Latest snapshot of the engine.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Selected move-list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether winning squares are highlighted.
    pub fn highlight_winner(&self) -> bool {
        self.highlight_winner
    }

    /// Feedback for the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The engine behind the view.
    pub fn engine(&self) -> &GameStateEngine {
        &self.engine
    }

    /// Applies a user action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, focus = ?self.focus, "Handling action");
        self.message = None;

        match action {
            Action::Navigate(direction) => self.navigate(direction),
            Action::Activate => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump(self.selected),
            },
            Action::PlaceAt(position) => {
                self.cursor = position;
                self.place(position);
            }
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            Action::ToggleOrder => {
                self.engine.toggle_order();
                self.refresh();
            }
            Action::NewGame => {
                self.engine.reset();
                info!("Game restarted from the terminal");
                self.refresh();
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::History => {
                let last = self.view.moves().len().saturating_sub(1);
                self.selected = match direction {
                    Direction::Up | Direction::Left => self.selected.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.selected + 1).min(last),
                };
            }
        }
    }

    fn place(&mut self, position: Position) {
        match self.engine.apply_move(position) {
            MoveOutcome::Applied(_) => self.refresh(),
            MoveOutcome::Ignored(reason) => {
                self.message = Some(format!("Move ignored: {}", reason));
            }
        }
    }

    fn jump(&mut self, step: usize) {
        match self.engine.jump_to(step) {
            Ok(()) => self.refresh(),
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    fn refresh(&mut self) {
        self.view = self.engine.view();
        self.selected = self.view.current_display_step().unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square, Status};

    fn app() -> App {
        App::new(GameStateEngine::new(), &TuiConfig::default())
    }

    #[test]
    fn test_place_at_cursor() {
        let mut app = app();
        app.handle(Action::Activate);
        assert_eq!(app.view().board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_ignored_move_sets_message() {
        let mut app = app();
        app.handle(Action::PlaceAt(Position::Center));
        app.handle(Action::PlaceAt(Position::Center));
        assert_eq!(
            app.message(),
            Some("Move ignored: square Center is already occupied")
        );
        assert_eq!(app.engine().history_len(), 2);
    }

    #[test]
    fn test_jump_from_history_panel() {
        let mut app = app();
        app.handle(Action::PlaceAt(Position::TopLeft));
        app.handle(Action::PlaceAt(Position::Center));
        app.handle(Action::SwitchFocus);
        app.handle(Action::Navigate(Direction::Up));
        app.handle(Action::Navigate(Direction::Up));
        app.handle(Action::Activate);
        assert_eq!(app.engine().step_number(), 0);
        assert_eq!(*app.view().status(), Status::NextPlayer(Player::X));
        assert_eq!(app.engine().history_len(), 3);
    }

    #[test]
    fn test_toggle_follows_current_move() {
        let mut app = app();
        app.handle(Action::PlaceAt(Position::TopLeft));
        app.handle(Action::ToggleOrder);
        assert!(app.engine().is_reversed());
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
