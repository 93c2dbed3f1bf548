use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{game, i18n, settings, shared::AppState};

/// Builds the HTTP surface the presentation layer talks to
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/game", get(game::get_game))
        .route(
            "/game/players",
            put(game::set_players).post(game::add_player),
        )
        .route("/game/players/:index", delete(game::remove_player))
        .route("/game/total-rounds", put(game::set_total_rounds))
        .route("/game/rounds", post(game::record_round))
        .route("/game/results", get(game::get_results))
        .route("/game/reset", post(game::reset_game))
        .route("/game/reset-rounds", post(game::reset_rounds))
        .route(
            "/settings",
            get(settings::get_settings)
                .put(settings::update_settings)
                .delete(settings::reset_settings),
        )
        .route("/settings/form", post(settings::submit_settings_form))
        .route(
            "/language",
            get(i18n::get_language).put(i18n::set_language),
        )
        .route("/translate/:key", get(i18n::translate_key))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
