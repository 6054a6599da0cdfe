use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("coordinate ({col}, {row}) is outside the board")]
    OutOfBounds { col: usize, row: usize },

    #[error("invalid move: {0}")]
    InvalidMove(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
