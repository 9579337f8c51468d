use crate::games::SessionRng;
use crate::log;
use super::bot_controller::BotMove;
use super::game_state::TicTacToeGameState;
use super::listener::GameListener;
use super::settings::TicTacToeSessionSettings;
use super::types::{FirstPlayerMode, MoveResult, Position, Side};

pub struct TicTacToeSession<L: GameListener> {
    state: TicTacToeGameState,
    settings: TicTacToeSessionSettings,
    rng: SessionRng,
    listener: L,
}

impl<L: GameListener> TicTacToeSession<L> {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng, listener: L) -> Self {
        Self {
            state: TicTacToeGameState::default(),
            settings,
            rng,
            listener,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Resets the board and announces a new game.
    pub fn start(&mut self) {
        let first_side = match self.settings.first_player_mode {
            FirstPlayerMode::Player => Side::Player,
            FirstPlayerMode::Ai => Side::Ai,
            FirstPlayerMode::Random => {
                if self.rng.random_bool() { Side::Player } else { Side::Ai }
            }
        };

        self.state.initialize(first_side);
        log!("Game started (seed {}, {:?} moves first)", self.rng.seed(), first_side);
        self.listener.on_game_started();

        if first_side == Side::Ai {
            self.listener.on_ai_turn_pending();
        }
    }

    pub fn player_selects(&mut self, x: usize, y: usize) -> MoveResult {
        let result = self.state.player_move(x, y);
        self.dispatch(Side::Player, result);
        result
    }

    pub fn ai_selects(&mut self, x: usize, y: usize) -> MoveResult {
        let result = self.state.apply_ai_move(x, y);
        self.dispatch(Side::Ai, result);
        result
    }

    pub fn compute_ai_move(&mut self) -> Option<BotMove> {
        self.state.compute_ai_move(&mut self.rng)
    }

    /// Computes and applies the AI move. Ignored outside the AI turn.
    pub fn play_ai_turn(&mut self) -> MoveResult {
        if self.state.is_player_turn() {
            return MoveResult::Ignored;
        }

        match self.compute_ai_move() {
            Some(BotMove { position: Position { x, y }, rule }) => {
                log!("AI picks ({}, {}) by {}", x, y, rule);
                self.ai_selects(x, y)
            }
            None => MoveResult::Ignored,
        }
    }

    fn dispatch(&mut self, side: Side, result: MoveResult) {
        let MoveResult::Placed { position, mark, outcome } = result else {
            return;
        };

        log!("{:?} placed {} at {}", side, mark.symbol(), position);
        self.listener.on_mark_placed(position, mark, self.state.board());

        if let Some(winner) = outcome.winner() {
            log!("Game over: {:?} (code {})", winner, winner.code());
            let winning_line = self.state.winning_line();
            self.listener.on_game_over(winner, winning_line);
        } else if !self.state.is_player_turn() {
            self.listener.on_ai_turn_pending();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{BoardState, GameOutcome, Mark, Winner, WinningLine};

    #[derive(Default)]
    struct RecordingListener {
        started: usize,
        placed: Vec<(Position, Mark)>,
        winners: Vec<Winner>,
        lines: Vec<Option<WinningLine>>,
        ai_pending: usize,
    }

    impl GameListener for RecordingListener {
        fn on_game_started(&mut self) {
            self.started += 1;
        }

        fn on_mark_placed(&mut self, position: Position, mark: Mark, _board: &BoardState) {
            self.placed.push((position, mark));
        }

        fn on_game_over(&mut self, winner: Winner, winning_line: Option<WinningLine>) {
            self.winners.push(winner);
            self.lines.push(winning_line);
        }

        fn on_ai_turn_pending(&mut self) {
            self.ai_pending += 1;
        }
    }

    fn session(mode: FirstPlayerMode, seed: u64) -> TicTacToeSession<RecordingListener> {
        let settings = TicTacToeSessionSettings { first_player_mode: mode };
        let mut session = TicTacToeSession::new(settings, SessionRng::new(seed), RecordingListener::default());
        session.start();
        session
    }

    #[test]
    fn test_start_notifies_listener() {
        let session = session(FirstPlayerMode::Player, 1);
        assert_eq!(session.listener().started, 1);
        assert_eq!(session.listener().ai_pending, 0);
        assert!(session.state().is_player_turn());
    }

    #[test]
    fn test_ai_first_requests_ai_turn() {
        let mut session = session(FirstPlayerMode::Ai, 1);
        assert_eq!(session.listener().ai_pending, 1);
        assert_eq!(session.player_selects(0, 0), MoveResult::Ignored);

        let result = session.play_ai_turn();
        assert!(matches!(result, MoveResult::Placed { mark: Mark::O, .. }));
        assert!(session.state().is_player_turn());
    }

    #[test]
    fn test_player_move_requests_ai_turn() {
        let mut session = session(FirstPlayerMode::Player, 1);
        session.player_selects(1, 1);
        assert_eq!(session.listener().placed, vec![(Position::new(1, 1), Mark::X)]);
        assert_eq!(session.listener().ai_pending, 1);
        assert_eq!(session.play_ai_turn().outcome(), Some(GameOutcome::Ongoing));
        assert_eq!(session.listener().placed.len(), 2);
    }

    #[test]
    fn test_play_ai_turn_on_player_turn_is_ignored() {
        let mut session = session(FirstPlayerMode::Player, 1);
        assert_eq!(session.play_ai_turn(), MoveResult::Ignored);
        assert_eq!(session.state().board().count_empty_cells(), 9);
    }

    #[test]
    fn test_ai_blocks_player_row() {
        let mut session = session(FirstPlayerMode::Player, 1);
        session.player_selects(0, 0);
        session.ai_selects(2, 2);
        session.player_selects(1, 0);

        let result = session.play_ai_turn();
        assert_eq!(
            result,
            MoveResult::Placed {
                position: Position::new(2, 0),
                mark: Mark::O,
                outcome: GameOutcome::Ongoing,
            }
        );
    }

    #[test]
    fn test_player_wins_column_and_winner_fires_once() {
        let mut session = session(FirstPlayerMode::Player, 1);
        session.player_selects(0, 0);
        session.ai_selects(2, 1);
        session.player_selects(0, 1);
        // The AI stays away from column 0 so the column threat stays open.
        session.ai_selects(2, 2);
        let result = session.player_selects(0, 2);

        assert_eq!(result.outcome(), Some(GameOutcome::PlayerWin));
        assert_eq!(session.listener().winners, vec![Winner::Player]);
        assert_eq!(session.listener().winners[0].code(), 2);

        assert_eq!(session.player_selects(1, 1), MoveResult::Ignored);
        assert_eq!(session.ai_selects(1, 1), MoveResult::Ignored);
        assert_eq!(session.play_ai_turn(), MoveResult::Ignored);
        assert_eq!(session.listener().winners.len(), 1);

        let line = session.listener().lines[0].unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_ai_win_reports_ai_code() {
        let mut session = session(FirstPlayerMode::Player, 1);
        session.player_selects(0, 0);
        session.ai_selects(2, 0);
        session.player_selects(1, 0);
        session.ai_selects(1, 1);
        session.player_selects(2, 2);
        session.ai_selects(0, 2);

        assert_eq!(session.state().outcome(), GameOutcome::OpponentWin);
        assert_eq!(session.listener().winners, vec![Winner::Ai]);
        assert_eq!(session.listener().winners[0].code(), 1);
    }

    #[test]
    fn test_draw_reports_draw_code() {
        let mut session = session(FirstPlayerMode::Player, 1);
        for (x, y, is_player) in [
            (0, 0, true),
            (1, 1, false),
            (2, 2, true),
            (1, 0, false),
            (1, 2, true),
            (0, 2, false),
            (2, 0, true),
            (2, 1, false),
            (0, 1, true),
        ] {
            if is_player {
                session.player_selects(x, y);
            } else {
                session.ai_selects(x, y);
            }
        }

        assert_eq!(session.listener().winners, vec![Winner::Draw]);
        assert_eq!(session.listener().winners[0].code(), -1);
        assert_eq!(session.listener().lines, vec![None]);
    }

    #[test]
    fn test_restart_rearms_game_over() {
        let mut session = session(FirstPlayerMode::Player, 1);
        session.player_selects(0, 0);
        session.ai_selects(2, 1);
        session.player_selects(0, 1);
        session.ai_selects(2, 2);
        session.player_selects(0, 2);

        session.start();
        assert_eq!(session.listener().started, 2);
        assert_eq!(session.state().outcome(), GameOutcome::Ongoing);
        assert!(matches!(session.player_selects(0, 0), MoveResult::Placed { .. }));
    }

    #[test]
    fn test_self_play_always_terminates_with_one_result() {
        for seed in 0..200 {
            let mut session = session(FirstPlayerMode::Random, seed);
            let mut player_rng = SessionRng::new(seed + 1000);

            while !session.state().outcome().is_terminal() {
                if session.state().is_player_turn() {
                    let moves = session.state().board().available_moves();
                    let pick = moves[player_rng.random_range(0..moves.len())];
                    session.player_selects(pick.x, pick.y);
                } else {
                    assert!(matches!(session.play_ai_turn(), MoveResult::Placed { .. }));
                }
            }

            assert_eq!(session.listener().winners.len(), 1);
            let expected = session.state().outcome().winner().unwrap();
            assert_eq!(session.listener().winners[0], expected);
        }
    }
}
