//! Greedy opponent: block a player row, else block a player column, else
//! play a random empty cell.
//!
//! Diagonal threats are never blocked, the bot never looks for its own
//! winning line and it does not search past the current move. Those gaps
//! are part of how this opponent plays.

use crate::games::SessionRng;
use super::board::BoardState;
use super::game_state::TicTacToeGameState;
use super::types::{BOARD_SIZE, Mark, Position};

pub struct BotInput {
    pub board: BoardState,
    pub defend_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board().clone(),
            defend_mark: state.player_mark(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotRule {
    RowBlock,
    ColumnBlock,
    Random,
}

impl std::fmt::Display for BotRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BotRule::RowBlock => "row block",
            BotRule::ColumnBlock => "column block",
            BotRule::Random => "random",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotMove {
    pub position: Position,
    pub rule: BotRule,
}

/// `None` only when the board has no empty cell left.
pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Option<BotMove> {
    if let Some(position) = find_row_block(&input.board, input.defend_mark) {
        return Some(BotMove { position, rule: BotRule::RowBlock });
    }

    if let Some(position) = find_column_block(&input.board, input.defend_mark) {
        return Some(BotMove { position, rule: BotRule::ColumnBlock });
    }

    calculate_random_move(&input.board, rng).map(|position| BotMove {
        position,
        rule: BotRule::Random,
    })
}

pub fn find_row_block(board: &BoardState, defend_mark: Mark) -> Option<Position> {
    (0..BOARD_SIZE).find_map(|y| {
        let cells = (0..BOARD_SIZE).map(|x| Position::new(x, y));
        find_gap(board, defend_mark, cells)
    })
}

pub fn find_column_block(board: &BoardState, defend_mark: Mark) -> Option<Position> {
    (0..BOARD_SIZE).find_map(|x| {
        let cells = (0..BOARD_SIZE).map(|y| Position::new(x, y));
        find_gap(board, defend_mark, cells)
    })
}

/// The single empty cell of a line holding exactly two `mark`s.
fn find_gap(
    board: &BoardState,
    mark: Mark,
    cells: impl Iterator<Item = Position>,
) -> Option<Position> {
    let mut count = 0;
    let mut gap = None;

    for pos in cells {
        let cell = board.get(pos.x, pos.y);
        if cell == mark {
            count += 1;
        } else if cell == Mark::Empty {
            gap = Some(pos);
        }
    }

    if count == 2 { gap } else { None }
}

fn calculate_random_move(board: &BoardState, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}
