use crate::games::SessionRng;
use super::board::BoardState;
use super::bot_controller::{BotInput, BotMove, calculate_move};
use super::types::{GameOutcome, Mark, MoveResult, Position, Side, WinningLine};
use super::win_detector::{check_win_with_line, evaluate_outcome};

/// Board plus turn flag for one human-vs-AI game.
///
/// The outcome is never stored: it is recomputed from the board, and every
/// mutation is refused once it is terminal.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: BoardState,
    player_mark: Mark,
    ai_mark: Mark,
    is_player_turn: bool,
    last_move: Option<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(Side::Player)
    }
}

impl TicTacToeGameState {
    pub fn new(first_side: Side) -> Self {
        Self {
            board: BoardState::new(),
            player_mark: Mark::X,
            ai_mark: Mark::O,
            is_player_turn: first_side == Side::Player,
            last_move: None,
        }
    }

    pub fn initialize(&mut self, first_side: Side) {
        self.board.clear();
        self.is_player_turn = first_side == Side::Player;
        self.last_move = None;
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn player_mark(&self) -> Mark {
        self.player_mark
    }

    pub fn ai_mark(&self) -> Mark {
        self.ai_mark
    }

    pub fn is_player_turn(&self) -> bool {
        self.is_player_turn
    }

    pub fn current_side(&self) -> Side {
        if self.is_player_turn { Side::Player } else { Side::Ai }
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn outcome(&self) -> GameOutcome {
        evaluate_outcome(&self.board, self.player_mark, self.ai_mark)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome() {
            GameOutcome::PlayerWin => check_win_with_line(&self.board, self.player_mark),
            GameOutcome::OpponentWin => check_win_with_line(&self.board, self.ai_mark),
            _ => None,
        }
    }

    /// Ignored when it is not the player's turn or the cell is taken.
    pub fn player_move(&mut self, x: usize, y: usize) -> MoveResult {
        if !self.is_player_turn {
            return MoveResult::Ignored;
        }
        self.place(x, y, self.player_mark)
    }

    /// Ignored when the cell is taken. The turn is not checked here: the
    /// driver only applies a move it computed for the AI turn.
    pub fn apply_ai_move(&mut self, x: usize, y: usize) -> MoveResult {
        self.place(x, y, self.ai_mark)
    }

    pub fn compute_ai_move(&self, rng: &mut SessionRng) -> Option<BotMove> {
        if self.outcome().is_terminal() {
            return None;
        }
        calculate_move(&BotInput::from_game_state(self), rng)
    }

    fn place(&mut self, x: usize, y: usize, mark: Mark) -> MoveResult {
        if self.outcome().is_terminal() {
            return MoveResult::Ignored;
        }

        if !self.board.place_mark(x, y, mark) {
            return MoveResult::Ignored;
        }

        let position = Position::new(x, y);
        self.last_move = Some(position);

        let outcome = self.outcome();
        if !outcome.is_terminal() {
            self.is_player_turn = !self.is_player_turn;
        }

        MoveResult::Placed { position, mark, outcome }
    }
}
