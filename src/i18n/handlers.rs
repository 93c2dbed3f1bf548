use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::collections::HashMap;
use tracing::instrument;

use super::types::{LanguageBody, TranslationResponse};
use crate::shared::{AppError, AppState};

/// GET /language
#[instrument(name = "get_language", skip(state))]
pub async fn get_language(State(state): State<AppState>) -> Json<LanguageBody> {
    Json(LanguageBody {
        language: state.language_store.language().await,
    })
}

/// PUT /language
#[instrument(name = "set_language", skip(state))]
pub async fn set_language(
    State(state): State<AppState>,
    Json(body): Json<LanguageBody>,
) -> Result<Json<LanguageBody>, AppError> {
    state
        .language_store
        .set_language(body.language)
        .await
        .wait()
        .await?;
    Ok(Json(body))
}

/// GET /translate/:key
///
/// Query parameters fill `{placeholders}` in the template
#[instrument(name = "translate_key", skip(state))]
pub async fn translate_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<TranslationResponse> {
    let params: Vec<(&str, String)> = params
        .iter()
        .map(|(name, value)| (name.as_str(), value.clone()))
        .collect();
    let language = state.language_store.language().await;

    Json(TranslationResponse {
        text: super::translate(language, &key, &params),
        key,
        language,
    })
}
