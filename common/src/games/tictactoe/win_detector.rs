use super::board::BoardState;
use super::types::{GameOutcome, Mark, Position, WinningLine};

/// Rows top to bottom, columns left to right, then both diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

pub fn check_win(board: &BoardState, mark: Mark) -> bool {
    check_win_with_line(board, mark).is_some()
}

pub fn check_win_with_line(board: &BoardState, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    LINES
        .iter()
        .find(|line| line.iter().all(|&(x, y)| board.get(x, y) == mark))
        .map(|line| {
            let (start_x, start_y) = line[0];
            let (end_x, end_y) = line[2];
            WinningLine::new(mark, Position::new(start_x, start_y), Position::new(end_x, end_y))
        })
}

/// Both win checks always run, player first, so a move that completes a
/// line on the last empty cell is a win and never a draw.
pub fn evaluate_outcome(board: &BoardState, player_mark: Mark, ai_mark: Mark) -> GameOutcome {
    if check_win(board, player_mark) {
        GameOutcome::PlayerWin
    } else if check_win(board, ai_mark) {
        GameOutcome::OpponentWin
    } else if board.count_empty_cells() == 0 {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}
