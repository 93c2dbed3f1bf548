// Public API
pub use handlers::{get_language, set_language, translate_key};
pub use models::Language;
pub use store::LanguageStore;
pub use translations::translate;

// Internal modules
mod handlers;
pub mod models;
mod store;
mod translations;
pub mod types;
