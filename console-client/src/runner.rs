use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use common::games::tictactoe::{MoveResult, TicTacToeSession};
use common::log;

use crate::console_listener::ConsoleListener;
use crate::input::{ConsoleCommand, help_text, parse_command};

/// Plays games until input ends or the user quits. The AI move is played
/// `ai_delay` after the listener reports that the AI is to move.
pub async fn run_console_game<R, W>(
    session: &mut TicTacToeSession<ConsoleListener<W>>,
    input: R,
    ai_delay: Duration,
) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    session.start();

    loop {
        if session.listener_mut().take_ai_turn_pending() {
            session.listener_mut().message("AI is thinking...");
            tokio::time::sleep(ai_delay).await;
            session.play_ai_turn();
            continue;
        }

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(format!("Failed to read input: {}", e)),
        };

        match parse_command(&line) {
            Ok(ConsoleCommand::Quit) => break,
            Ok(ConsoleCommand::NewGame) => session.start(),
            Ok(ConsoleCommand::Help) => session.listener_mut().message(help_text()),
            Ok(ConsoleCommand::Place { x, y }) => {
                if session.state().outcome().is_terminal() {
                    session.listener_mut().message("The game is over. Type `n` for a new game.");
                    continue;
                }
                if session.player_selects(x, y) == MoveResult::Ignored {
                    session.listener_mut().message("That cell is taken.");
                }
            }
            Err(e) => session.listener_mut().message(&e),
        }
    }

    log!("Console session finished");
    Ok(())
}
