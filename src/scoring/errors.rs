use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Multiplier must be a positive integer, got {0}")]
    InvalidMultiplier(u32),

    #[error("Winner {0:?} is not in the player roster")]
    UnknownWinner(String),
}
