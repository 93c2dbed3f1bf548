use std::collections::HashMap;

use super::{OkeyColor, PlayerRound, Round, ScoringError, WinType};

/// Points awarded (as a negative penalty) to a round's winner, before the multiplier
pub const WINNER_BONUS_POINTS: i64 = 20;

/// Penalty the winner receives for a round played at `multiplier`
pub fn winner_bonus(multiplier: u32) -> i64 {
    -(WINNER_BONUS_POINTS * i64::from(multiplier))
}

/// Reads a raw score entry the way the score form does: leading digits only,
/// anything else counts as zero. Values too large for `u32` saturate at `u32::MAX`.
pub fn parse_points(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..digits_end];

    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

/// Builds a finished round from the raw entries of every roster player.
///
/// The winner's penalty is the fixed bonus regardless of their entry. Under an
/// okey win everyone else pays double. Win information only counts when both a
/// win type and a winner are given.
pub fn compute_round(
    color: OkeyColor,
    multiplier: u32,
    roster: &[String],
    raw_points: &HashMap<String, String>,
    win_type: Option<WinType>,
    winner: Option<&str>,
) -> Result<Round, ScoringError> {
    if multiplier == 0 {
        return Err(ScoringError::InvalidMultiplier(multiplier));
    }

    if let Some(name) = winner {
        if !roster.iter().any(|player| player.as_str() == name) {
            return Err(ScoringError::UnknownWinner(name.to_string()));
        }
    }

    let decided_win = win_type.zip(winner);

    let players = roster
        .iter()
        .map(|name| {
            let points = raw_points
                .get(name)
                .map(|raw| parse_points(raw))
                .unwrap_or_default();
            let base = i64::from(points).saturating_mul(i64::from(multiplier));

            let penalty = match decided_win {
                Some((_, winning_name)) if name.as_str() == winning_name => {
                    winner_bonus(multiplier)
                }
                Some((WinType::Okey, _)) => base.saturating_mul(2),
                _ => base,
            };

            PlayerRound {
                name: name.clone(),
                remaining_points: points,
                penalty_points: penalty,
            }
        })
        .collect();

    Ok(Round {
        color,
        multiplier,
        players,
        win_type,
        winner: winner.map(str::to_string),
    })
}
