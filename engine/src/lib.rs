pub mod board;
pub mod bot_controller;
pub mod config;
pub mod error;
pub mod game_state;
pub mod logger;
pub mod session;
pub mod session_rng;
pub mod settings;
pub mod types;
pub mod win_detector;

pub use board::{Board, Cell};
pub use bot_controller::{BotMove, calculate_bot_move, move_weight, score_run};
pub use error::GameError;
pub use game_state::GobangGameState;
pub use session::{GameSnapshot, GobangSession, StateObserver};
pub use session_rng::SessionRng;
pub use settings::GobangSessionSettings;
pub use types::{
    BOARD_SIZE, FirstPlayerMode, GameOutcome, GameStatus, OpponentMode, Position, RunInfo, Stone,
    WIN_LENGTH, WinningLine,
};
pub use win_detector::{DIRECTIONS, check_win_at, count_run};
