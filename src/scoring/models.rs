use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Tile colors, each carrying its own point multiplier
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OkeyColor {
    Red,
    Blue,
    Yellow,
    Black,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WinType {
    Regular,
    /// Finishing on the okey tile: every other player pays double
    Okey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMultipliers {
    pub red: u32,
    pub blue: u32,
    pub yellow: u32,
    pub black: u32,
}

impl ColorMultipliers {
    pub fn get(&self, color: OkeyColor) -> u32 {
        match color {
            OkeyColor::Red => self.red,
            OkeyColor::Blue => self.blue,
            OkeyColor::Yellow => self.yellow,
            OkeyColor::Black => self.black,
        }
    }

    pub fn set(&mut self, color: OkeyColor, multiplier: u32) {
        match color {
            OkeyColor::Red => self.red = multiplier,
            OkeyColor::Blue => self.blue = multiplier,
            OkeyColor::Yellow => self.yellow = multiplier,
            OkeyColor::Black => self.black = multiplier,
        }
    }
}

impl Default for ColorMultipliers {
    fn default() -> Self {
        Self {
            red: 6,
            blue: 4,
            yellow: 5,
            black: 3,
        }
    }
}

/// One player's line in a finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRound {
    pub name: String,
    pub remaining_points: u32,
    pub penalty_points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub color: OkeyColor,
    pub multiplier: u32,
    /// One entry per roster player, in roster order
    pub players: Vec<PlayerRound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_type: Option<WinType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

impl Round {
    pub fn penalty_for(&self, name: &str) -> Option<i64> {
        self.players
            .iter()
            .find(|player| player.name == name)
            .map(|player| player.penalty_points)
    }
}
