//! API routes for quizd
//!
//! One router per resource, merged in `server`. Handlers delegate to the
//! service modules and map `GameError` onto HTTP statuses.

use crate::error::GameError;
use crate::server::AppState;
use crate::{game, progression, quiz};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use quiz_common::{
    AnswerRequest, AnswerResponse, Badge, CreatePlayerParams, EquipSkinParams, HealthResponse,
    NextPhaseParams, Player, Quiz, QuizPoint, Skin,
};
use std::sync::Arc;
use tracing::error;

type AppStateArc = Arc<AppState>;
type ApiError = (StatusCode, String);

fn map_err(err: GameError) -> ApiError {
    error!("Request failed: {}", err);
    (err.status(), err.to_string())
}

// ============================================================================
// Player Routes
// ============================================================================

pub fn player_routes() -> Router<AppStateArc> {
    Router::new().route("/api/players", post(create_player))
}

async fn create_player(
    State(state): State<AppStateArc>,
    Query(params): Query<CreatePlayerParams>,
) -> Result<Json<Player>, ApiError> {
    let player = game::create_player(&state.store, &params.username, &state.default_skin_path)
        .map_err(map_err)?;
    Ok(Json(player))
}

// ============================================================================
// Phase Routes
// ============================================================================

pub fn phase_routes() -> Router<AppStateArc> {
    Router::new().route("/api/phases/next", get(next_phase))
}

/// 200 with the next phase, 204 when the player has nothing new to enter.
async fn next_phase(
    State(state): State<AppStateArc>,
    Query(params): Query<NextPhaseParams>,
) -> Result<Response, ApiError> {
    let next = progression::unlock_next_phase(&state.store, params.player_id).map_err(map_err)?;
    match next {
        Some(phase) => Ok(Json(phase).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

// ============================================================================
// Quiz Routes
// ============================================================================

pub fn quiz_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/quizzes/points/:point_id", get(quizzes_for_point))
        .route("/api/quizzes/submit", post(submit_answer))
        .route("/api/quizzes/:quiz_id", get(correct_answer))
        .route("/api/quizzespoints/:phase_id", get(quiz_points_for_phase))
}

async fn quizzes_for_point(
    State(state): State<AppStateArc>,
    Path(point_id): Path<i64>,
) -> Result<Json<Vec<Quiz>>, ApiError> {
    let quizzes = game::quizzes_for_point(&state.store, point_id).map_err(map_err)?;
    Ok(Json(quizzes))
}

async fn submit_answer(
    State(state): State<AppStateArc>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let correct = quiz::submit_answer(&state.store, req.player_id, req.quiz_id, req.chosen_index)
        .map_err(map_err)?;
    Ok(Json(AnswerResponse { correct }))
}

/// Bare integer body, matching the original endpoint's shape.
async fn correct_answer(
    State(state): State<AppStateArc>,
    Path(quiz_id): Path<i64>,
) -> Result<Json<i64>, ApiError> {
    let index = quiz::correct_index(&state.store, quiz_id).map_err(map_err)?;
    Ok(Json(index))
}

async fn quiz_points_for_phase(
    State(state): State<AppStateArc>,
    Path(phase_id): Path<i64>,
) -> Result<Json<Vec<QuizPoint>>, ApiError> {
    let points = game::quiz_points_for_phase(&state.store, phase_id).map_err(map_err)?;
    Ok(Json(points))
}

// ============================================================================
// Skin Routes
// ============================================================================

pub fn skin_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/skins", get(all_skins))
        .route("/api/skins/player/:player_id", get(unlocked_skins))
        .route("/api/skins/equip", post(equip_skin))
}

async fn all_skins(State(state): State<AppStateArc>) -> Result<Json<Vec<Skin>>, ApiError> {
    let skins = game::all_skins(&state.store).map_err(map_err)?;
    Ok(Json(skins))
}

async fn unlocked_skins(
    State(state): State<AppStateArc>,
    Path(player_id): Path<i64>,
) -> Result<Json<Vec<Skin>>, ApiError> {
    let skins = game::unlocked_skins(&state.store, player_id).map_err(map_err)?;
    Ok(Json(skins))
}

async fn equip_skin(
    State(state): State<AppStateArc>,
    Query(params): Query<EquipSkinParams>,
) -> Result<StatusCode, ApiError> {
    game::equip_skin(&state.store, params.player_id, params.skin_id).map_err(map_err)?;
    Ok(StatusCode::OK)
}

// ============================================================================
// Badge Routes
// ============================================================================

pub fn badge_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/badges", get(all_badges))
        .route("/api/badges/player/:player_id", get(unlocked_badges))
}

async fn all_badges(State(state): State<AppStateArc>) -> Result<Json<Vec<Badge>>, ApiError> {
    let badges = game::all_badges(&state.store).map_err(map_err)?;
    Ok(Json(badges))
}

async fn unlocked_badges(
    State(state): State<AppStateArc>,
    Path(player_id): Path<i64>,
) -> Result<Json<Vec<Badge>>, ApiError> {
    let badges = game::unlocked_badges(&state.store, player_id).map_err(map_err)?;
    Ok(Json(badges))
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/api/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
