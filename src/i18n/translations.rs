use super::Language;

type Table = &'static [(&'static str, &'static str)];

const KU: Table = &[
    ("red", "Sor"),
    ("blue", "Şîn"),
    ("yellow", "Zer"),
    ("black", "Reş"),
    ("round", "Gerdûn"),
    ("of", "ji"),
    ("multiplier", "Çendekar"),
    ("regularWin", "Biqetandina Asayî"),
    ("okeyWin", "Biqetandina Okey"),
    ("regularWinType", "Biqetandina Asayî"),
    ("okeyWinType", "Biqetandina Okey"),
    ("regularWinExplanation", "Bijîşk -{points} xal distîne"),
    ("okeyWinExplanation", "Bijîşk -{points} + 2× hemû xal distîne"),
    ("finalResults", "Encamên dawî"),
    ("rankings", "Rêzok"),
    ("resultsWinner", "Bijîşk"),
    ("totalPoints", "Komê Xalan"),
    ("roundDetails", "Hûrguliyên gerdûnê"),
    ("playerScores", "Xalên lêdanan"),
    ("noRoundsPlayed", "Tu gerdûn nehat lîstin"),
    ("noPlayersAdded", "Lêdan tune ne"),
    ("noRoundsSet", "Gerdûn tune ne"),
    ("currentPlayersSubtitle", "Tu {count} lêdan{plural} çêkirî ye"),
    ("invalidRounds", "Ji kerema xwe hejmareke derbasdar binivîse"),
    ("minPlayersRequired", "Herî kêm 2 lêdan pêwîst in"),
];

const EN: Table = &[
    ("red", "Red"),
    ("blue", "Blue"),
    ("yellow", "Yellow"),
    ("black", "Black"),
    ("round", "Round"),
    ("of", "of"),
    ("multiplier", "Multiplier"),
    ("regularWin", "Regular Win"),
    ("okeyWin", "Okey Win"),
    ("regularWinType", "Regular Win"),
    ("okeyWinType", "Okey Win"),
    ("regularWinExplanation", "Winner gets -{points} points"),
    ("okeyWinExplanation", "Winner gets -{points} + 2× total points"),
    ("finalResults", "Final Results"),
    ("rankings", "Rankings"),
    ("resultsWinner", "Winner"),
    ("totalPoints", "Total Points"),
    ("roundDetails", "Round Details"),
    ("playerScores", "Player Scores"),
    ("noRoundsPlayed", "No Rounds Played"),
    ("noPlayersAdded", "No Players Added"),
    ("noRoundsSet", "No Rounds Set"),
    ("currentPlayersSubtitle", "You have {count} player{plural} set up"),
    ("invalidRounds", "Please enter a valid number of rounds"),
    ("minPlayersRequired", "At least 2 players are required"),
];

fn table(language: Language) -> Table {
    match language {
        Language::Ku => KU,
        Language::En => EN,
    }
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    table(language)
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, text)| *text)
}

/// Looks `key` up in `language`, then in Kurdish, then gives back the key itself.
///
/// Each `{name}` placeholder is replaced once by the matching parameter.
pub fn translate(language: Language, key: &str, params: &[(&str, String)]) -> String {
    let template = lookup(language, key)
        .or_else(|| lookup(Language::Ku, key))
        .unwrap_or(key);

    params
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replacen(&format!("{{{name}}}"), value, 1)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn translates_in_active_language() {
        assert_eq!(translate(Language::En, "red", &[]), "Red");
        assert_eq!(translate(Language::Ku, "red", &[]), "Sor");
    }

    #[test]
    fn kurdish_win_explanations_take_points() {
        let points = [("points", "120".to_string())];

        assert_eq!(
            translate(Language::Ku, "regularWinExplanation", &points),
            "Bijîşk -120 xal distîne"
        );
        assert_eq!(
            translate(Language::Ku, "okeyWinExplanation", &points),
            "Bijîşk -120 + 2× hemû xal distîne"
        );
        assert_eq!(
            translate(Language::Ku, "noRoundsPlayed", &[]),
            "Tu gerdûn nehat lîstin"
        );
    }

    #[test]
    fn unknown_key_returns_key() {
        assert_eq!(translate(Language::En, "missingKey", &[]), "missingKey");
    }

    #[test]
    fn substitutes_parameters() {
        let text = translate(
            Language::En,
            "currentPlayersSubtitle",
            &[("count", "3".to_string()), ("plural", "s".to_string())],
        );
        assert_eq!(text, "You have 3 players set up");
    }

    #[test]
    fn replaces_only_first_placeholder_occurrence() {
        let text = translate(Language::En, "{x} and {x}", &[("x", "1".to_string())]);
        assert_eq!(text, "1 and {x}");
    }

    #[test]
    fn tables_share_keys() {
        let ku: HashSet<&str> = KU.iter().map(|(key, _)| *key).collect();
        let en: HashSet<&str> = EN.iter().map(|(key, _)| *key).collect();
        assert_eq!(ku, en);
    }
}
