use std::collections::HashSet;
use thiserror::Error;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("At least 2 players are required, got {0}")]
    TooFewPlayers(usize),

    #[error("At most 6 players are allowed, got {0}")]
    TooManyPlayers(usize),

    #[error("Player name cannot be empty")]
    BlankName,

    #[error("Player name {0:?} is used more than once")]
    DuplicateName(String),

    #[error("Round count must be a positive integer")]
    InvalidRoundCount,
}

/// Cleans a roster from the add-players form.
///
/// Names are trimmed and blank rows dropped; what remains must be 2 to 6
/// distinct names.
pub fn validate_player_names(names: &[String]) -> Result<Vec<String>, ValidationError> {
    let cleaned: Vec<String> = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    if cleaned.len() < MIN_PLAYERS {
        return Err(ValidationError::TooFewPlayers(cleaned.len()));
    }
    if cleaned.len() > MAX_PLAYERS {
        return Err(ValidationError::TooManyPlayers(cleaned.len()));
    }

    let mut seen = HashSet::new();
    for name in &cleaned {
        if !seen.insert(name.as_str()) {
            return Err(ValidationError::DuplicateName(name.clone()));
        }
    }

    Ok(cleaned)
}

/// Checks a single name before it is appended to `roster`
pub fn validate_new_player(roster: &[String], name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::BlankName);
    }
    if roster.len() >= MAX_PLAYERS {
        return Err(ValidationError::TooManyPlayers(roster.len() + 1));
    }
    if roster.iter().any(|existing| existing == name) {
        return Err(ValidationError::DuplicateName(name.to_string()));
    }
    Ok(name.to_string())
}

pub fn validate_total_rounds(rounds: u32) -> Result<u32, ValidationError> {
    if rounds == 0 {
        return Err(ValidationError::InvalidRoundCount);
    }
    Ok(rounds)
}

/// Parses the round-count field; anything but a positive integer is rejected
pub fn parse_round_count(raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidRoundCount)
        .and_then(validate_total_rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn trims_and_drops_blank_rows() {
        let cleaned = validate_player_names(&names(&[" Ann ", "", "Bo", "   "])).unwrap();
        assert_eq!(cleaned, vec!["Ann", "Bo"]);
    }

    #[rstest]
    #[case(&[], ValidationError::TooFewPlayers(0))]
    #[case(&["Ann"], ValidationError::TooFewPlayers(1))]
    #[case(&["Ann", " "], ValidationError::TooFewPlayers(1))]
    #[case(&["A", "B", "C", "D", "E", "F", "G"], ValidationError::TooManyPlayers(7))]
    #[case(&["Ann", "Bo", "Ann "], ValidationError::DuplicateName("Ann".to_string()))]
    fn rejects_invalid_rosters(#[case] roster: &[&str], #[case] expected: ValidationError) {
        assert_eq!(validate_player_names(&names(roster)), Err(expected));
    }

    #[test]
    fn accepts_six_players() {
        let roster = names(&["A", "B", "C", "D", "E", "F"]);
        assert_eq!(validate_player_names(&roster).unwrap().len(), 6);
    }

    #[test]
    fn new_player_checks() {
        let roster = names(&["Ann", "Bo"]);

        assert_eq!(validate_new_player(&roster, " Cy "), Ok("Cy".to_string()));
        assert_eq!(validate_new_player(&roster, "  "), Err(ValidationError::BlankName));
        assert_eq!(
            validate_new_player(&roster, "Bo"),
            Err(ValidationError::DuplicateName("Bo".to_string()))
        );

        let full = names(&["A", "B", "C", "D", "E", "F"]);
        assert_eq!(
            validate_new_player(&full, "G"),
            Err(ValidationError::TooManyPlayers(7))
        );
    }

    #[rstest]
    #[case("10", Ok(10))]
    #[case(" 3 ", Ok(3))]
    #[case("0", Err(ValidationError::InvalidRoundCount))]
    #[case("-2", Err(ValidationError::InvalidRoundCount))]
    #[case("ten", Err(ValidationError::InvalidRoundCount))]
    #[case("", Err(ValidationError::InvalidRoundCount))]
    fn parses_round_count(#[case] raw: &str, #[case] expected: Result<u32, ValidationError>) {
        assert_eq!(parse_round_count(raw), expected);
    }
}
