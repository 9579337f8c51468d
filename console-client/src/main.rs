mod config;
mod console_listener;
mod input;
mod runner;

use std::time::Duration;
use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{FirstPlayerMode, TicTacToeSession, TicTacToeSessionSettings};
use common::{log, logger};

use config::get_config_manager;
use console_listener::ConsoleListener;
use input::help_text;
use runner::run_console_game;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayerArg {
    Player,
    Ai,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Player => FirstPlayerMode::Player,
            FirstPlayerArg::Ai => FirstPlayerMode::Ai,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "ttt_console", about = "Play tic-tac-toe against a simple AI")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the AI plays, in milliseconds
    #[arg(long)]
    ai_delay_ms: Option<u64>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(args.config.as_deref()).get_config()?;
    if let Some(seed) = args.seed {
        config.tictactoe.seed = Some(seed);
    }
    if let Some(delay) = args.ai_delay_ms {
        config.tictactoe.ai_delay_ms = delay;
    }
    if let Some(first_player) = args.first_player {
        config.tictactoe.first_player = first_player.into();
    }
    config.validate()?;

    let settings = TicTacToeSessionSettings {
        first_player_mode: config.tictactoe.first_player,
    };
    let rng = SessionRng::from_seed(config.tictactoe.seed);
    let listener = ConsoleListener::new(std::io::stdout(), config.show_coordinates);
    let mut session = TicTacToeSession::new(settings, rng, listener);

    log!("Starting console game, AI delay {} ms", config.tictactoe.ai_delay_ms);
    session.listener_mut().message(help_text());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let ai_delay = Duration::from_millis(config.tictactoe.ai_delay_ms);
    run_console_game(&mut session, stdin, ai_delay).await?;

    if let Some(winner) = session.listener().result() {
        log!("Last game result: {:?}", winner);
    }

    Ok(())
}
