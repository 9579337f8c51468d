use std::io::Write;
use common::games::tictactoe::{BoardState, GameListener, Mark, Position, Winner, WinningLine};
use common::logger::write_console_line;

pub struct ConsoleListener<W: Write> {
    out: W,
    show_coordinates: bool,
    ai_turn_pending: bool,
    result: Option<Winner>,
}

impl<W: Write> ConsoleListener<W> {
    pub fn new(out: W, show_coordinates: bool) -> Self {
        Self {
            out,
            show_coordinates,
            ai_turn_pending: false,
            result: None,
        }
    }

    #[cfg(test)]
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn take_ai_turn_pending(&mut self) -> bool {
        std::mem::take(&mut self.ai_turn_pending)
    }

    pub fn result(&self) -> Option<Winner> {
        self.result
    }

    pub fn message(&mut self, text: &str) {
        write_console_line(&mut self.out, text);
    }
}

impl<W: Write> GameListener for ConsoleListener<W> {
    fn on_game_started(&mut self) {
        self.ai_turn_pending = false;
        self.result = None;
        let board = render_board(&BoardState::new(), self.show_coordinates);
        self.message(&format!("New game. You play X.\n{}", board));
    }

    fn on_mark_placed(&mut self, position: Position, mark: Mark, board: &BoardState) {
        let rendered = render_board(board, self.show_coordinates);
        self.message(&format!("{} -> {}\n{}", mark.symbol(), position, rendered));
    }

    fn on_game_over(&mut self, winner: Winner, winning_line: Option<WinningLine>) {
        self.result = Some(winner);
        let text = match (winner, winning_line) {
            (Winner::Player, Some(line)) => format!("You win! ({} to {})", line.start, line.end),
            (Winner::Ai, Some(line)) => format!("The AI wins. ({} to {})", line.start, line.end),
            (Winner::Player, None) => "You win!".to_string(),
            (Winner::Ai, None) => "The AI wins.".to_string(),
            (Winner::Draw, _) => "Draw.".to_string(),
        };
        self.message(&format!("{} Type `n` for a new game or `q` to quit.", text));
    }

    fn on_ai_turn_pending(&mut self) {
        self.ai_turn_pending = true;
    }
}

pub fn render_board(board: &BoardState, show_coordinates: bool) -> String {
    let mut lines = Vec::new();
    if show_coordinates {
        let header: Vec<String> = (0..board.size()).map(|x| x.to_string()).collect();
        lines.push(format!("  {}", header.join(" ")));
    }
    for (y, row) in board.rows().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
        if show_coordinates {
            lines.push(format!("{} {}", y, cells.join(" ")));
        } else {
            lines.push(cells.join(" "));
        }
    }
    lines.join("\n")
}
