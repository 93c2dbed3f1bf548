use serde::{Deserialize, Serialize};

use super::Round;

/// A player's cumulative position across every recorded round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStanding {
    pub name: String,
    pub total_points: i64,
    /// 1-based, lowest total first
    pub position: usize,
    pub rounds_won: u32,
}

/// Sums each player's penalty points and ranks them ascending.
///
/// The sort is stable, so tied players keep roster order.
pub fn compute_standings(roster: &[String], rounds: &[Round]) -> Vec<PlayerStanding> {
    let mut totals: Vec<(String, i64, u32)> = roster
        .iter()
        .map(|name| {
            let total = rounds
                .iter()
                .map(|round| round.penalty_for(name).unwrap_or_default())
                .fold(0i64, i64::saturating_add);
            let wins = rounds
                .iter()
                .filter(|round| round.winner.as_deref() == Some(name.as_str()))
                .count() as u32;
            (name.clone(), total, wins)
        })
        .collect();

    totals.sort_by_key(|(_, total, _)| *total);

    totals
        .into_iter()
        .enumerate()
        .map(|(index, (name, total_points, rounds_won))| PlayerStanding {
            name,
            total_points,
            position: index + 1,
            rounds_won,
        })
        .collect()
}

/// The player currently in first place
pub fn leader(standings: &[PlayerStanding]) -> Option<&PlayerStanding> {
    standings.first()
}
