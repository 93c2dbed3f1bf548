use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::SettingsError;
use crate::scoring::{engine::parse_points, ColorMultipliers, OkeyColor};

pub const DEFAULT_ROUNDS: u32 = 10;

/// User-configurable scoring settings, kept across game resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub color_multipliers: ColorMultipliers,
    pub default_rounds: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            color_multipliers: ColorMultipliers::default(),
            default_rounds: DEFAULT_ROUNDS,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(color) = OkeyColor::iter().find(|c| self.color_multipliers.get(*c) == 0) {
            return Err(SettingsError::ZeroMultiplier(color));
        }

        if self.default_rounds == 0 {
            return Err(SettingsError::ZeroDefaultRounds);
        }

        Ok(())
    }

    /// Builds settings from raw form fields.
    ///
    /// Fields that are missing, unparseable or zero take the default value.
    pub fn from_form(
        multipliers: [(OkeyColor, &str); 4],
        default_rounds: &str,
    ) -> Self {
        let defaults = Self::default();
        let mut settings = defaults;

        for (color, raw) in multipliers {
            let value = match parse_points(raw) {
                0 => defaults.color_multipliers.get(color),
                parsed => parsed,
            };
            settings.color_multipliers.set(color, value);
        }

        settings.default_rounds = match parse_points(default_rounds) {
            0 => defaults.default_rounds,
            parsed => parsed,
        };

        settings
    }

    /// Replaces every zero field with its default, leaving valid fields as they are
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut settings = self;

        for color in OkeyColor::iter() {
            if settings.color_multipliers.get(color) == 0 {
                settings
                    .color_multipliers
                    .set(color, defaults.color_multipliers.get(color));
            }
        }
        if settings.default_rounds == 0 {
            settings.default_rounds = defaults.default_rounds;
        }

        settings
    }
}

/// Persisted settings may predate a field, so every field is optional on read
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredSettings {
    pub color_multipliers: Option<ColorMultipliers>,
    pub default_rounds: Option<u32>,
}

impl StoredSettings {
    pub fn into_settings(self) -> GameSettings {
        let defaults = GameSettings::default();
        GameSettings {
            color_multipliers: self
                .color_multipliers
                .unwrap_or(defaults.color_multipliers),
            default_rounds: self.default_rounds.unwrap_or(defaults.default_rounds),
        }
        .sanitized()
    }
}
