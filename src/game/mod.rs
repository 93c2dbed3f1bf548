// Public API
pub use errors::GameError;
pub use handlers::{
    add_player, get_game, get_results, record_round, remove_player, reset_game, reset_rounds,
    set_players, set_total_rounds,
};
pub use models::{Game, RoundEntry};
pub use store::GameStore;

// Internal modules
mod errors;
mod handlers;
pub mod models;
mod store;
pub mod types;
pub mod validation;
