use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::{types::SettingsFormRequest, GameSettings};
use crate::shared::{AppError, AppState};

/// GET /settings
#[instrument(name = "get_settings", skip(state))]
pub async fn get_settings(State(state): State<AppState>) -> Json<GameSettings> {
    Json(state.game_store.settings().await)
}

/// PUT /settings
#[instrument(name = "update_settings", skip(state))]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<GameSettings>,
) -> Result<Json<GameSettings>, AppError> {
    settings.validate()?;
    info!(default_rounds = settings.default_rounds, "Updating settings");

    state.game_store.update_settings(settings).await.wait().await?;
    Ok(Json(state.game_store.settings().await))
}

/// POST /settings/form
///
/// Accepts raw text fields; blank or invalid fields take their default
#[instrument(name = "submit_settings_form", skip(state))]
pub async fn submit_settings_form(
    State(state): State<AppState>,
    Json(form): Json<SettingsFormRequest>,
) -> Result<Json<GameSettings>, AppError> {
    let settings = GameSettings::from(form);

    state.game_store.update_settings(settings).await.wait().await?;
    Ok(Json(state.game_store.settings().await))
}

/// DELETE /settings
#[instrument(name = "reset_settings", skip(state))]
pub async fn reset_settings(State(state): State<AppState>) -> Result<Json<GameSettings>, AppError> {
    state.game_store.reset_settings().await.wait().await?;
    Ok(Json(state.game_store.settings().await))
}
