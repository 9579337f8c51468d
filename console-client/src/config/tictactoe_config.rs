use common::config::Validate;
use common::games::tictactoe::FirstPlayerMode;
use serde::{Deserialize, Serialize};

pub const MAX_AI_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub ai_delay_ms: u64,
    pub first_player: FirstPlayerMode,
    pub seed: Option<u64>,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(format!(
                "ai_delay_ms must not exceed {} (got {})",
                MAX_AI_DELAY_MS, self.ai_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: 1000,
            first_player: FirstPlayerMode::Player,
            seed: None,
        }
    }
}
