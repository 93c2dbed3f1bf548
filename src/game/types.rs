use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Game, RoundEntry};
use crate::scoring::{OkeyColor, PlayerStanding, Round, WinType};

#[derive(Debug, Deserialize)]
pub struct SetPlayersRequest {
    pub names: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalRoundsRequest {
    /// Falls back to the configured default round count when absent
    pub total_rounds: Option<RawPoints>,
}

/// A score field as the client sent it, either typed text or a number
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPoints {
    Number(serde_json::Number),
    Text(String),
}

impl RawPoints {
    pub fn into_text(self) -> String {
        match self {
            RawPoints::Number(n) => n.to_string(),
            RawPoints::Text(text) => text,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRoundRequest {
    pub color: OkeyColor,
    #[serde(default)]
    pub points: HashMap<String, RawPoints>,
    #[serde(default)]
    pub win_type: Option<WinType>,
    #[serde(default)]
    pub winner: Option<String>,
}

impl From<RecordRoundRequest> for RoundEntry {
    fn from(request: RecordRoundRequest) -> Self {
        RoundEntry {
            color: request.color,
            points: request
                .points
                .into_iter()
                .map(|(name, raw)| (name, raw.into_text()))
                .collect(),
            win_type: request.win_type,
            winner: request.winner,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordRoundResponse {
    pub round: Round,
    pub game: Game,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemovePlayerResponse {
    pub removed: String,
    pub game: Game,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsResponse {
    pub standings: Vec<PlayerStanding>,
    pub leader: Option<String>,
    pub rounds_played: u32,
    pub total_rounds: u32,
    pub complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_request_accepts_text_and_numbers() {
        let request: RecordRoundRequest = serde_json::from_str(
            r#"{"color":"red","points":{"Ann":"30","Bo":15},"winType":"regular","winner":"Ann"}"#,
        )
        .unwrap();

        let entry = RoundEntry::from(request);

        assert_eq!(entry.points.get("Ann").map(String::as_str), Some("30"));
        assert_eq!(entry.points.get("Bo").map(String::as_str), Some("15"));
        assert_eq!(entry.win_type, Some(WinType::Regular));
    }

    #[test]
    fn total_rounds_accepts_text_and_numbers() {
        let typed: TotalRoundsRequest = serde_json::from_str(r#"{"totalRounds":" 8 "}"#).unwrap();
        let numeric: TotalRoundsRequest = serde_json::from_str(r#"{"totalRounds":8}"#).unwrap();
        let absent: TotalRoundsRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(typed.total_rounds.map(RawPoints::into_text).as_deref(), Some(" 8 "));
        assert_eq!(numeric.total_rounds.map(RawPoints::into_text).as_deref(), Some("8"));
        assert!(absent.total_rounds.is_none());
    }
}
