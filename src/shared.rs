use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::game::{validation::ValidationError, GameError, GameStore};
use crate::i18n::LanguageStore;
use crate::scoring::ScoringError;
use crate::settings::SettingsError;
use crate::storage::{KeyValueStore, PersistenceWriter, StorageError};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub game_store: Arc<GameStore>,
    pub language_store: Arc<LanguageStore>,
}

impl AppState {
    pub fn new(game_store: Arc<GameStore>, language_store: Arc<LanguageStore>) -> Self {
        Self {
            game_store,
            language_store,
        }
    }

    /// Loads every store from `store` before anything can mutate them
    pub async fn initialize(store: Arc<dyn KeyValueStore>) -> Self {
        let writer = PersistenceWriter::spawn(Arc::clone(&store));

        let game_store = GameStore::load(store.as_ref(), writer.clone()).await;
        let language_store = LanguageStore::load(store.as_ref(), writer).await;

        Self::new(Arc::new(game_store), Arc::new(language_store))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ScoringError> for AppError {
    fn from(err: ScoringError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::NoPlayers => AppError::Conflict(err.to_string()),
            GameError::RoundLimitReached(_) => AppError::Conflict(err.to_string()),
            GameError::PlayerIndexOutOfRange(_) => AppError::NotFound(err.to_string()),
            GameError::Scoring(scoring) => scoring.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Storage(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage error: {}", err),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::i18n::Language;
    use crate::storage::InMemoryKeyValueStore;

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        store: Option<Arc<dyn KeyValueStore>>,
        players: Vec<String>,
        language: Option<Language>,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                store: None,
                players: Vec::new(),
                language: None,
            }
        }

        pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
            self.store = Some(store);
            self
        }

        pub fn with_players(mut self, players: &[&str]) -> Self {
            self.players = players.iter().map(|p| p.to_string()).collect();
            self
        }

        pub fn with_language(mut self, language: Language) -> Self {
            self.language = Some(language);
            self
        }

        pub async fn build(self) -> AppState {
            let store = self
                .store
                .unwrap_or_else(|| Arc::new(InMemoryKeyValueStore::new()));
            let state = AppState::initialize(store).await;

            if !self.players.is_empty() {
                state
                    .game_store
                    .set_player_names(self.players)
                    .await
                    .wait()
                    .await
                    .unwrap();
            }
            if let Some(language) = self.language {
                state
                    .language_store
                    .set_language(language)
                    .await
                    .wait()
                    .await
                    .unwrap();
            }

            state
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}
