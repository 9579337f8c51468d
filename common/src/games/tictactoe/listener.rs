use super::board::BoardState;
use super::types::{Mark, Position, Winner, WinningLine};

/// Hooks the driving side implements to render and react to a game.
pub trait GameListener {
    fn on_game_started(&mut self) {}

    fn on_mark_placed(&mut self, _position: Position, _mark: Mark, _board: &BoardState) {}

    /// Fired once per game, when the first terminal state is reached.
    fn on_game_over(&mut self, _winner: Winner, _winning_line: Option<WinningLine>) {}

    /// The AI is to move; the driver decides when to call `play_ai_turn`.
    fn on_ai_turn_pending(&mut self) {}
}

impl GameListener for () {}
