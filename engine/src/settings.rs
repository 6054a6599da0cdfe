use serde::{Deserialize, Serialize};

use crate::types::{FirstPlayerMode, OpponentMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GobangSessionSettings {
    pub first_player: FirstPlayerMode,
    pub opponent_mode: OpponentMode,
}

impl Default for GobangSessionSettings {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Player,
            opponent_mode: OpponentMode::Bot,
        }
    }
}
