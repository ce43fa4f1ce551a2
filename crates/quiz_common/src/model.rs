//! Game entities.
//!
//! Wire names are camelCase: the original browser frontend reads fields like
//! `totalScore`, `equippedSkinPath` and `positionX` verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered player and their mutable progression state.
///
/// `unlocked_rewards` is the materialized many-to-many set; it rides along in
/// every player response so the client never needs a second fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub username: String,
    pub current_phase: i64,
    pub total_score: i64,
    pub equipped_skin_path: String,
    pub unlocked_rewards: Vec<Reward>,
    pub created_at: DateTime<Utc>,
}

/// A stage of the game, unlocked once a player's score reaches the threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub unlock_threshold: i64,
    pub scene_glb_path: String,
}

/// A spatial trigger inside a phase hosting one or more quizzes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPoint {
    pub id: i64,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub trigger_radius: f64,
    pub phase_id: i64,
}

/// A multiple-choice question attached to a quiz point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: i64,
    pub quiz_point_id: i64,
}

/// What a reward unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    #[serde(rename = "BADGE")]
    Badge,
    #[serde(rename = "SKIN")]
    Skin,
}

impl RewardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardKind::Badge => "BADGE",
            RewardKind::Skin => "SKIN",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "BADGE" => Some(RewardKind::Badge),
            "SKIN" => Some(RewardKind::Skin),
            _ => None,
        }
    }
}

/// An unlockable record granted when a player state matches its condition.
///
/// BADGE rewards are matched against badges by condition string; SKIN rewards
/// are matched against skins by name. The asymmetry is part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RewardKind,
    pub unlock_condition: String,
}

/// A character model a player can equip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    pub id: i64,
    pub name: String,
    pub model_path: String,
    pub thumbnail_path: String,
    pub unlock_condition: String,
    pub is_default: bool,
}

/// A cosmetic achievement marker, matched by condition string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: i64,
    pub name: String,
    pub unlock_condition: String,
}
