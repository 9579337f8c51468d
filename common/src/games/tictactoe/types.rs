use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Ai,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    PlayerWin,
    OpponentWin,
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        *self != GameOutcome::Ongoing
    }

    pub fn winner(&self) -> Option<Winner> {
        match self {
            GameOutcome::Ongoing => None,
            GameOutcome::PlayerWin => Some(Winner::Player),
            GameOutcome::OpponentWin => Some(Winner::Ai),
            GameOutcome::Draw => Some(Winner::Draw),
        }
    }
}

/// Result carried by the game over notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Ai,
    Player,
    Draw,
}

impl Winner {
    pub fn code(&self) -> i32 {
        match self {
            Winner::Ai => 1,
            Winner::Player => 2,
            Winner::Draw => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    #[default]
    Player,
    Ai,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Ignored,
    Placed {
        position: Position,
        mark: Mark,
        outcome: GameOutcome,
    },
}

impl MoveResult {
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            MoveResult::Ignored => None,
            MoveResult::Placed { outcome, .. } => Some(*outcome),
        }
    }
}
