//! Content pack import.
//!
//! The phases, quiz points, quizzes, rewards, skins and badges are static
//! reference data; the original deployment shipped them pre-populated in the
//! database. Here they come from a TOML pack imported at startup. Import runs
//! once against an empty database and never touches player state.

use crate::store::{rewards, world, GameStore};
use anyhow::{bail, Context, Result};
use quiz_common::RewardKind;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct ContentPack {
    #[serde(default)]
    pub phases: Vec<PhaseDef>,
    #[serde(default)]
    pub quiz_points: Vec<QuizPointDef>,
    #[serde(default)]
    pub quizzes: Vec<QuizDef>,
    #[serde(default)]
    pub rewards: Vec<RewardDef>,
    #[serde(default)]
    pub skins: Vec<SkinDef>,
    #[serde(default)]
    pub badges: Vec<BadgeDef>,
}

#[derive(Debug, Deserialize)]
pub struct PhaseDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub unlock_threshold: i64,
    pub scene_glb_path: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizPointDef {
    /// 1-based position of the owning phase in the pack
    pub phase: usize,
    pub position: (f64, f64, f64),
    #[serde(default = "default_trigger_radius")]
    pub trigger_radius: f64,
}

fn default_trigger_radius() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct QuizDef {
    /// 1-based position of the owning quiz point in the pack
    pub point: usize,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: i64,
}

#[derive(Debug, Deserialize)]
pub struct RewardDef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub unlock_condition: String,
}

#[derive(Debug, Deserialize)]
pub struct SkinDef {
    pub name: String,
    pub model_path: String,
    #[serde(default)]
    pub thumbnail_path: String,
    #[serde(default)]
    pub unlock_condition: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Deserialize)]
pub struct BadgeDef {
    pub name: String,
    pub unlock_condition: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub phases: usize,
    pub quiz_points: usize,
    pub quizzes: usize,
    pub rewards: usize,
    pub skins: usize,
    pub badges: usize,
}

/// Import a content pack file. Returns `None` when the database already holds
/// reference data (the import is skipped, players are left alone).
pub fn import_file(store: &GameStore, path: &Path) -> Result<Option<SeedSummary>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content pack: {:?}", path))?;
    let pack: ContentPack = toml::from_str(&content)
        .with_context(|| format!("Failed to parse content pack: {:?}", path))?;
    import(store, &pack)
}

pub fn import(store: &GameStore, pack: &ContentPack) -> Result<Option<SeedSummary>> {
    validate(pack)?;

    let already_seeded = store.with_conn(|conn| Ok(!rewards::reference_tables_empty(conn)?))?;
    if already_seeded {
        warn!("Reference data already present, skipping content import");
        return Ok(None);
    }

    let summary = store.with_tx(|tx| {
        let mut phase_ids = Vec::with_capacity(pack.phases.len());
        for phase in &pack.phases {
            phase_ids.push(world::insert_phase(
                tx,
                &phase.name,
                &phase.description,
                phase.unlock_threshold,
                &phase.scene_glb_path,
            )?);
        }

        let mut point_ids = Vec::with_capacity(pack.quiz_points.len());
        for point in &pack.quiz_points {
            point_ids.push(world::insert_quiz_point(
                tx,
                point.position,
                point.trigger_radius,
                phase_ids[point.phase - 1],
            )?);
        }

        for quiz in &pack.quizzes {
            world::insert_quiz(
                tx,
                &quiz.question,
                &quiz.options,
                quiz.correct_index,
                point_ids[quiz.point - 1],
            )?;
        }

        for reward in &pack.rewards {
            // validate() already vetted the kind string
            let kind = RewardKind::from_str(&reward.kind).unwrap_or(RewardKind::Badge);
            rewards::insert_reward(tx, &reward.name, kind, &reward.unlock_condition)?;
        }

        for skin in &pack.skins {
            rewards::insert_skin(
                tx,
                &skin.name,
                &skin.model_path,
                &skin.thumbnail_path,
                &skin.unlock_condition,
                skin.is_default,
            )?;
        }

        for badge in &pack.badges {
            rewards::insert_badge(tx, &badge.name, &badge.unlock_condition)?;
        }

        Ok(SeedSummary {
            phases: pack.phases.len(),
            quiz_points: pack.quiz_points.len(),
            quizzes: pack.quizzes.len(),
            rewards: pack.rewards.len(),
            skins: pack.skins.len(),
            badges: pack.badges.len(),
        })
    })?;

    info!(
        "Imported content pack: {} phases, {} quiz points, {} quizzes, {} rewards, {} skins, {} badges",
        summary.phases, summary.quiz_points, summary.quizzes, summary.rewards, summary.skins,
        summary.badges
    );
    Ok(Some(summary))
}

fn validate(pack: &ContentPack) -> Result<()> {
    for (i, point) in pack.quiz_points.iter().enumerate() {
        if point.phase == 0 || point.phase > pack.phases.len() {
            bail!("quiz_points[{}] references unknown phase {}", i, point.phase);
        }
    }

    for (i, quiz) in pack.quizzes.iter().enumerate() {
        if quiz.point == 0 || quiz.point > pack.quiz_points.len() {
            bail!("quizzes[{}] references unknown quiz point {}", i, quiz.point);
        }
        if quiz.options.is_empty() {
            bail!("quizzes[{}] has no options", i);
        }
        if quiz.correct_index < 0 || quiz.correct_index as usize >= quiz.options.len() {
            bail!(
                "quizzes[{}] correct_index {} is out of range for {} options",
                i,
                quiz.correct_index,
                quiz.options.len()
            );
        }
    }

    for (i, reward) in pack.rewards.iter().enumerate() {
        if RewardKind::from_str(&reward.kind).is_none() {
            bail!("rewards[{}] has unknown type '{}'", i, reward.kind);
        }
    }

    Ok(())
}
