use thiserror::Error;

use crate::scoring::OkeyColor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Multiplier for {0} must be a positive integer")]
    ZeroMultiplier(OkeyColor),

    #[error("Default round count must be a positive integer")]
    ZeroDefaultRounds,
}
