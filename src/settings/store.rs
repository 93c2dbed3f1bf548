use tracing::{debug, instrument, warn};

use super::{models::StoredSettings, GameSettings};
use crate::storage::{keys, KeyValueStore, PersistTicket, PersistenceWriter};

/// Owns the persisted `settings` entry
#[derive(Debug, Clone)]
pub struct SettingsStore {
    writer: PersistenceWriter,
}

impl SettingsStore {
    pub fn new(writer: PersistenceWriter) -> Self {
        Self { writer }
    }

    /// Reads saved settings. Missing, unreadable or corrupt entries yield `None`.
    #[instrument(skip(store))]
    pub async fn load(store: &dyn KeyValueStore) -> Option<GameSettings> {
        let raw = match store.get(keys::SETTINGS).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved settings");
                return None;
            }
            Err(err) => {
                warn!(?err, "Failed to read saved settings");
                return None;
            }
        };

        match serde_json::from_str::<StoredSettings>(&raw) {
            Ok(stored) => Some(stored.into_settings()),
            Err(err) => {
                warn!(?err, "Ignoring corrupt saved settings");
                None
            }
        }
    }

    pub fn persist(&self, settings: &GameSettings) -> PersistTicket {
        self.writer.set_json(keys::SETTINGS, settings)
    }

    pub fn clear(&self) -> PersistTicket {
        self.writer.remove(keys::SETTINGS)
    }
}
