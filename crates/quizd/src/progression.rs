//! Phase progression.

use crate::error::{GameError, GameResult};
use crate::store::{players, world, GameStore};
use quiz_common::Phase;
use tracing::info;

/// Next phase the player's score has unlocked, if any.
///
/// Among all phases with `unlock_threshold <= total_score`, picks the one
/// with the smallest id strictly greater than the player's current phase.
/// Read-only: `current_phase` is NOT advanced here — the original backend
/// never persisted it, and callers who want the pointer moved must do it
/// themselves.
pub fn unlock_next_phase(store: &GameStore, player_id: i64) -> GameResult<Option<Phase>> {
    store.with_conn(|conn| {
        let player =
            players::find(conn, player_id)?.ok_or(GameError::PlayerNotFound(player_id))?;

        let available = world::phases_within_threshold(conn, player.total_score)?;
        let next = available
            .into_iter()
            .find(|phase| phase.id > player.current_phase);

        if let Some(phase) = &next {
            info!(
                "Player {} (score {}) can enter phase {} '{}'",
                player_id, player.total_score, phase.id, phase.name
            );
        }
        Ok(next)
    })
}
