mod board;
mod bot_controller;
mod game_state;
mod listener;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::BoardState;
pub use bot_controller::{BotInput, BotMove, BotRule, calculate_move, find_column_block, find_row_block};
pub use game_state::TicTacToeGameState;
pub use listener::GameListener;
pub use session::TicTacToeSession;
pub use settings::TicTacToeSessionSettings;
pub use types::{
    BOARD_SIZE, FirstPlayerMode, GameOutcome, Mark, MoveResult, Position, Side, Winner, WinningLine,
};
pub use win_detector::{LINES, check_win, check_win_with_line, evaluate_outcome};
