pub mod engine;
pub mod models;
pub mod results;

mod errors;

pub use engine::{compute_round, parse_points, winner_bonus, WINNER_BONUS_POINTS};
pub use errors::ScoringError;
pub use models::*;
pub use results::{compute_standings, leader, PlayerStanding};
