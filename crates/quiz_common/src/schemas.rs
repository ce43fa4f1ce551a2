//! JSON schemas for the quizd API

use serde::{Deserialize, Serialize};

/// Body of `POST /api/quizzes/submit`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub player_id: i64,
    pub quiz_id: i64,
    pub chosen_index: i64,
}

/// Response of `POST /api/quizzes/submit`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub correct: bool,
}

/// Query string of `POST /api/players`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlayerParams {
    pub username: String,
}

/// Query string of `GET /api/phases/next`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextPhaseParams {
    pub player_id: i64,
}

/// Query string of `POST /api/skins/equip`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipSkinParams {
    pub player_id: i64,
    pub skin_id: i64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
