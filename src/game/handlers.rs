use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use super::{
    types::{
        AddPlayerRequest, RecordRoundRequest, RecordRoundResponse, RemovePlayerResponse,
        ResultsResponse, SetPlayersRequest, TotalRoundsRequest,
    },
    validation::{parse_round_count, validate_player_names},
    Game,
};
use crate::scoring::leader;
use crate::shared::{AppError, AppState};

/// GET /game
#[instrument(name = "get_game", skip(state))]
pub async fn get_game(State(state): State<AppState>) -> Json<Game> {
    Json(state.game_store.snapshot().await)
}

/// PUT /game/players
///
/// Replaces the roster after trimming names and dropping blank rows
#[instrument(name = "set_players", skip(state))]
pub async fn set_players(
    State(state): State<AppState>,
    Json(request): Json<SetPlayersRequest>,
) -> Result<Json<Game>, AppError> {
    let names = validate_player_names(&request.names)?;
    info!(players = names.len(), "Setting roster");

    state.game_store.set_player_names(names).await.wait().await?;
    Ok(Json(state.game_store.snapshot().await))
}

/// POST /game/players
#[instrument(name = "add_player", skip(state))]
pub async fn add_player(
    State(state): State<AppState>,
    Json(request): Json<AddPlayerRequest>,
) -> Result<Json<Game>, AppError> {
    state
        .game_store
        .add_validated_player(&request.name)
        .await?
        .wait()
        .await?;
    Ok(Json(state.game_store.snapshot().await))
}

/// DELETE /game/players/:index
#[instrument(name = "remove_player", skip(state))]
pub async fn remove_player(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<RemovePlayerResponse>, AppError> {
    let (removed, ticket) = state.game_store.remove_player(index).await?;
    ticket.wait().await?;

    Ok(Json(RemovePlayerResponse {
        removed,
        game: state.game_store.snapshot().await,
    }))
}

/// PUT /game/total-rounds
///
/// Accepts the round count as typed text or a number
#[instrument(name = "set_total_rounds", skip(state))]
pub async fn set_total_rounds(
    State(state): State<AppState>,
    Json(request): Json<TotalRoundsRequest>,
) -> Result<Json<Game>, AppError> {
    let total_rounds = match request.total_rounds {
        Some(raw) => parse_round_count(&raw.into_text())?,
        None => state.game_store.settings().await.default_rounds,
    };
    info!(total_rounds, "Setting round target");

    state
        .game_store
        .set_total_rounds(total_rounds)
        .await
        .wait()
        .await?;
    Ok(Json(state.game_store.snapshot().await))
}

/// POST /game/rounds
///
/// Scores the entry with the configured multiplier and appends the round
#[instrument(name = "record_round", skip(state, request))]
pub async fn record_round(
    State(state): State<AppState>,
    Json(request): Json<RecordRoundRequest>,
) -> Result<Json<RecordRoundResponse>, AppError> {
    let (round, ticket) = state.game_store.record_round(request.into()).await?;
    ticket.wait().await?;

    Ok(Json(RecordRoundResponse {
        round,
        game: state.game_store.snapshot().await,
    }))
}

/// GET /game/results
#[instrument(name = "get_results", skip(state))]
pub async fn get_results(State(state): State<AppState>) -> Json<ResultsResponse> {
    let game = state.game_store.snapshot().await;
    let standings = game.standings();

    Json(ResultsResponse {
        leader: leader(&standings).map(|standing| standing.name.clone()),
        standings,
        rounds_played: game.current_round,
        total_rounds: game.total_rounds,
        complete: game.is_complete(),
    })
}

/// POST /game/reset
#[instrument(name = "reset_game", skip(state))]
pub async fn reset_game(State(state): State<AppState>) -> Result<Json<Game>, AppError> {
    state.game_store.reset_game().await.wait().await?;
    Ok(Json(state.game_store.snapshot().await))
}

/// POST /game/reset-rounds
#[instrument(name = "reset_rounds", skip(state))]
pub async fn reset_rounds(State(state): State<AppState>) -> Result<Json<Game>, AppError> {
    state.game_store.reset_rounds_only().await.wait().await?;
    Ok(Json(state.game_store.snapshot().await))
}
