//! Error type shared by the whole crate.

use thiserror::Error;

/// Errors from game setup and match execution
#[derive(Debug, Error)]
pub enum GameError {
    #[error("At least 3 moves are required, got {0}")]
    TooFewMoves(usize),

    #[error("The number of moves must be odd, got {0}")]
    EvenMoveCount(usize),

    #[error("Duplicate move: {0}")]
    DuplicateMove(String),

    #[error("Move labels must not be empty")]
    EmptyMove,

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Revealed key does not reproduce the published code")]
    CommitmentMismatch,

    #[error("Entropy source unavailable: {0}")]
    Entropy(#[from] rand::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Is this a move set problem reported before any round starts?
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GameError::TooFewMoves(_)
                | GameError::EvenMoveCount(_)
                | GameError::DuplicateMove(_)
                | GameError::EmptyMove
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
