// Library crate for the Okey scorekeeper
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod game;
pub mod i18n;
pub mod routes;
pub mod scoring;
pub mod settings;
pub mod shared;
pub mod storage;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use game::{Game, GameStore, RoundEntry};
pub use i18n::{Language, LanguageStore};
pub use scoring::{compute_round, compute_standings, OkeyColor, Round, WinType};
pub use settings::GameSettings;
pub use shared::{AppError, AppState};
pub use storage::{InMemoryKeyValueStore, KeyValueStore, PersistTicket, StorageError};
