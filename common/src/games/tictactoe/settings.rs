use super::types::FirstPlayerMode;

#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToeSessionSettings {
    pub first_player_mode: FirstPlayerMode,
}
