//! Error type shared by every core component.

use thiserror::Error;

/// Errors from game rules and the commitment scheme
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid move set: {0}")]
    InvalidMoveSet(String),

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Insufficient entropy: {0}")]
    InsufficientEntropy(#[from] rand::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
