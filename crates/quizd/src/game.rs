//! General game operations: players, skins, badges, quiz listings.

use crate::error::{GameError, GameResult};
use crate::store::{players, rewards, world, GameStore};
use quiz_common::{Badge, Player, Quiz, QuizPoint, RewardKind, Skin};
use std::collections::HashSet;
use tracing::info;

/// Register a new player. Duplicate usernames are allowed.
pub fn create_player(
    store: &GameStore,
    username: &str,
    default_skin_path: &str,
) -> GameResult<Player> {
    store.with_conn(|conn| {
        let player = players::insert(conn, username, default_skin_path)?;
        info!("Created player {} '{}'", player.id, player.username);
        Ok(player)
    })
}

/// All quizzes attached to a quiz point, in id order.
pub fn quizzes_for_point(store: &GameStore, point_id: i64) -> GameResult<Vec<Quiz>> {
    store.with_conn(|conn| Ok(world::quizzes_for_point(conn, point_id)?))
}

/// All quiz points of a phase, in id order.
pub fn quiz_points_for_phase(store: &GameStore, phase_id: i64) -> GameResult<Vec<QuizPoint>> {
    store.with_conn(|conn| Ok(world::quiz_points_for_phase(conn, phase_id)?))
}

pub fn all_skins(store: &GameStore) -> GameResult<Vec<Skin>> {
    store.with_conn(|conn| Ok(rewards::all_skins(conn)?))
}

pub fn all_badges(store: &GameStore) -> GameResult<Vec<Badge>> {
    store.with_conn(|conn| Ok(rewards::all_badges(conn)?))
}

/// Equip a skin on a player.
///
/// Eligible when the skin is a default, or the player holds an unlocked
/// reward of kind SKIN whose name equals the skin's name. Skins are matched
/// by name here, unlike badges which match by condition string.
pub fn equip_skin(store: &GameStore, player_id: i64, skin_id: i64) -> GameResult<()> {
    store.with_tx(|tx| {
        let player =
            players::find(tx, player_id)?.ok_or(GameError::PlayerNotFound(player_id))?;
        let skin = rewards::find_skin(tx, skin_id)?.ok_or(GameError::SkinNotFound(skin_id))?;

        let unlocked = skin.is_default
            || player
                .unlocked_rewards
                .iter()
                .any(|r| r.kind == RewardKind::Skin && r.name == skin.name);

        if !unlocked {
            return Err(GameError::SkinLocked {
                player: player_id,
                skin: skin.name,
            });
        }

        players::set_equipped_skin(tx, player_id, &skin.model_path)?;
        info!("Player {} equipped skin '{}'", player_id, skin.name);
        Ok(())
    })
}

/// Badges the player has unlocked, matched by condition string.
pub fn unlocked_badges(store: &GameStore, player_id: i64) -> GameResult<Vec<Badge>> {
    store.with_conn(|conn| {
        let player =
            players::find(conn, player_id)?.ok_or(GameError::PlayerNotFound(player_id))?;

        let unlocked_conditions: HashSet<&str> = player
            .unlocked_rewards
            .iter()
            .filter(|r| r.kind == RewardKind::Badge)
            .map(|r| r.unlock_condition.as_str())
            .collect();

        let badges = rewards::all_badges(conn)?
            .into_iter()
            .filter(|badge| unlocked_conditions.contains(badge.unlock_condition.as_str()))
            .collect();
        Ok(badges)
    })
}

/// Skins available to the player: every default skin plus every skin whose
/// name matches an unlocked SKIN reward. A skin that qualifies both ways is
/// listed once.
pub fn unlocked_skins(store: &GameStore, player_id: i64) -> GameResult<Vec<Skin>> {
    store.with_conn(|conn| {
        let player =
            players::find(conn, player_id)?.ok_or(GameError::PlayerNotFound(player_id))?;

        let unlocked_names: HashSet<&str> = player
            .unlocked_rewards
            .iter()
            .filter(|r| r.kind == RewardKind::Skin)
            .map(|r| r.name.as_str())
            .collect();

        let skins = rewards::all_skins(conn)?
            .into_iter()
            .filter(|skin| skin.is_default || unlocked_names.contains(skin.name.as_str()))
            .collect();
        Ok(skins)
    })
}
