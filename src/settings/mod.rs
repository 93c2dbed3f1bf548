// Public API
pub use errors::SettingsError;
pub use handlers::{get_settings, reset_settings, submit_settings_form, update_settings};
pub use models::{GameSettings, DEFAULT_ROUNDS};
pub use store::SettingsStore;

// Internal modules
mod errors;
mod handlers;
pub mod models;
mod store;
pub mod types;
