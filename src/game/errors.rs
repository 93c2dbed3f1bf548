use thiserror::Error;

use crate::scoring::ScoringError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("No players have been added")]
    NoPlayers,

    #[error("All {0} rounds have already been played")]
    RoundLimitReached(u32),

    #[error("No player at index {0}")]
    PlayerIndexOutOfRange(usize),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
