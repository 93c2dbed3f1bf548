use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::scoring::{
    compute_standings, ColorMultipliers, OkeyColor, PlayerStanding, Round, WinType,
};
use crate::settings::{GameSettings, DEFAULT_ROUNDS};

/// The whole scorecard: roster, target length, finished rounds and scoring settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    pub player_names: Vec<String>,
    /// 0 means no target has been set
    pub total_rounds: u32,
    pub current_round: u32,
    pub rounds: Vec<Round>,
    pub color_multipliers: ColorMultipliers,
    pub default_rounds: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            player_names: Vec::new(),
            total_rounds: 0,
            current_round: 0,
            rounds: Vec::new(),
            color_multipliers: ColorMultipliers::default(),
            default_rounds: DEFAULT_ROUNDS,
        }
    }
}

impl Game {
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            color_multipliers: self.color_multipliers,
            default_rounds: self.default_rounds,
        }
    }

    pub fn apply_settings(&mut self, settings: GameSettings) {
        self.color_multipliers = settings.color_multipliers;
        self.default_rounds = settings.default_rounds;
    }

    pub fn multiplier_for(&self, color: OkeyColor) -> u32 {
        self.color_multipliers.get(color)
    }

    pub fn add_round(&mut self, round: Round) {
        self.rounds.push(round);
        self.current_round += 1;
    }

    /// Clears roster and rounds; settings survive
    pub fn reset(&mut self) {
        self.player_names.clear();
        self.total_rounds = 0;
        self.reset_rounds();
    }

    /// Clears rounds only, so the same roster can play again
    pub fn reset_rounds(&mut self) {
        self.rounds.clear();
        self.current_round = 0;
    }

    /// Removes and returns the player at `index`, or `None` when out of range
    pub fn remove_player(&mut self, index: usize) -> Option<String> {
        (index < self.player_names.len()).then(|| self.player_names.remove(index))
    }

    pub fn rounds_remaining(&self) -> Option<u32> {
        (self.total_rounds > 0).then(|| self.total_rounds.saturating_sub(self.current_round))
    }

    /// True once a target is set and that many rounds are recorded
    pub fn is_complete(&self) -> bool {
        self.rounds_remaining() == Some(0)
    }

    pub fn standings(&self) -> Vec<PlayerStanding> {
        compute_standings(&self.player_names, &self.rounds)
    }
}

/// Raw input for one round, as entered on the score form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundEntry {
    pub color: OkeyColor,
    /// Raw text per player name; players without an entry score 0
    #[serde(default)]
    pub points: HashMap<String, String>,
    #[serde(default)]
    pub win_type: Option<WinType>,
    #[serde(default)]
    pub winner: Option<String>,
}
