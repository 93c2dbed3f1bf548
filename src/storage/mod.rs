// Public API
pub use errors::StorageError;
pub use repository::{InMemoryKeyValueStore, KeyValueStore, PostgresKeyValueStore};
pub use writer::{PersistTicket, PersistenceWriter};

// Internal modules
mod errors;
pub mod repository;
mod writer;

/// Storage keys used by the engine
pub mod keys {
    /// Full game blob: roster, rounds and settings
    pub const GAME: &str = "game";
    /// Settings persisted apart from the game so a reset keeps them
    pub const SETTINGS: &str = "settings";
    /// Active language tag
    pub const LANGUAGE: &str = "language";
}
