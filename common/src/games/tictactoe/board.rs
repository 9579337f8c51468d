use super::types::{BOARD_SIZE, Mark, Position};

/// Fixed 3x3 grid, indexed as `cells[y][x]` with `x` the column and `y` the row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_rows(rows: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn clear(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Panics if the coordinates are outside the board.
    pub fn get(&self, x: usize, y: usize) -> Mark {
        self.cells[y][x]
    }

    pub fn is_cell_empty(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Mark::Empty
    }

    /// Returns false and leaves the board untouched when the cell is taken.
    pub fn place_mark(&mut self, x: usize, y: usize, mark: Mark) -> bool {
        if !self.is_cell_empty(x, y) {
            return false;
        }
        self.cells[y][x] = mark;
        true
    }

    pub fn count_empty_cells(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == Mark::Empty)
            .count()
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(x, y));
                }
            }
        }
        moves
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::new();
        assert_eq!(board.count_empty_cells(), 9);
        for y in 0..3 {
            for x in 0..3 {
                assert!(board.is_cell_empty(x, y));
            }
        }
    }

    #[test]
    fn test_place_mark_uses_column_then_row() {
        let mut board = BoardState::new();
        assert!(board.place_mark(2, 0, X));
        assert_eq!(board.get(2, 0), X);
        assert_eq!(board.rows()[0][2], X);
        assert!(board.is_cell_empty(0, 2));
    }

    #[test]
    fn test_place_mark_on_occupied_cell_is_ignored() {
        let mut board = BoardState::new();
        board.place_mark(1, 1, X);
        let before = board.clone();

        assert!(!board.place_mark(1, 1, O));
        assert_eq!(board, before);
        assert_eq!(board.get(1, 1), X);
    }

    #[test]
    fn test_empty_plus_occupied_cells_equals_grid_size() {
        let board = BoardState::from_rows([[X, O, E], [E, X, E], [O, E, E]]);
        let occupied = board
            .rows()
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != Mark::Empty)
            .count();

        assert_eq!(board.count_empty_cells(), 5);
        assert_eq!(board.count_empty_cells() + occupied, 9);
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let board = BoardState::from_rows([[X, E, O], [E, X, O], [O, X, E]]);
        assert_eq!(
            board.available_moves(),
            vec![Position::new(1, 0), Position::new(0, 1), Position::new(2, 2)]
        );
    }

    #[test]
    fn test_clear_resets_all_cells() {
        let mut board = BoardState::from_rows([[X, O, X], [O, X, O], [O, X, O]]);
        assert_eq!(board.count_empty_cells(), 0);
        board.clear();
        assert_eq!(board, BoardState::new());
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_access_panics() {
        let board = BoardState::new();
        board.is_cell_empty(3, 0);
    }
}
