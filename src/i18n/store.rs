use std::str::FromStr;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::{translate, Language};
use crate::storage::{keys, KeyValueStore, PersistTicket, PersistenceWriter};

/// Holds the active language and persists changes to it
pub struct LanguageStore {
    current: RwLock<Language>,
    writer: PersistenceWriter,
}

impl LanguageStore {
    pub fn new(language: Language, writer: PersistenceWriter) -> Self {
        Self {
            current: RwLock::new(language),
            writer,
        }
    }

    /// Restores the saved language tag; unknown or unreadable tags keep the default
    #[instrument(skip(store, writer))]
    pub async fn load(store: &dyn KeyValueStore, writer: PersistenceWriter) -> Self {
        let language = match store.get(keys::LANGUAGE).await {
            Ok(Some(tag)) => Language::from_str(tag.trim()).unwrap_or_else(|_| {
                warn!(tag = %tag, "Ignoring unknown saved language");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(err) => {
                warn!(?err, "Failed to read saved language");
                Language::default()
            }
        };

        debug!(%language, "Language loaded");
        Self::new(language, writer)
    }

    pub async fn language(&self) -> Language {
        *self.current.read().await
    }

    #[instrument(skip(self))]
    pub async fn set_language(&self, language: Language) -> PersistTicket {
        let mut current = self.current.write().await;
        *current = language;
        info!(%language, "Language changed");
        self.writer.set(keys::LANGUAGE, language.to_string())
    }

    pub async fn t(&self, key: &str, params: &[(&str, String)]) -> String {
        translate(self.language().await, key, params)
    }
}
