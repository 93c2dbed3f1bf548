use serde::Deserialize;

use super::GameSettings;
use crate::scoring::OkeyColor;

/// Settings exactly as typed into the settings form
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsFormRequest {
    pub red: String,
    pub blue: String,
    pub yellow: String,
    pub black: String,
    pub default_rounds: String,
}

impl From<SettingsFormRequest> for GameSettings {
    fn from(form: SettingsFormRequest) -> Self {
        GameSettings::from_form(
            [
                (OkeyColor::Red, form.red.as_str()),
                (OkeyColor::Blue, form.blue.as_str()),
                (OkeyColor::Yellow, form.yellow.as_str()),
                (OkeyColor::Black, form.black.as_str()),
            ],
            &form.default_rounds,
        )
    }
}
