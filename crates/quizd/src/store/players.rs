//! Player rows and the player_rewards join table.

use chrono::{DateTime, Utc};
use quiz_common::{Player, Reward};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::rewards::row_to_reward;

fn row_to_player(row: &Row, unlocked_rewards: Vec<Reward>) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        username: row.get(1)?,
        current_phase: row.get(2)?,
        total_score: row.get(3)?,
        equipped_skin_path: row.get(4)?,
        unlocked_rewards,
        created_at: DateTime::parse_from_rfc3339(&row.get::<_, String>(5)?)
            .unwrap_or_else(|_| Utc::now().into())
            .with_timezone(&Utc),
    })
}

/// Insert a new player with default progression state.
///
/// Usernames are intentionally not unique; registration never rejects a name.
pub fn insert(conn: &Connection, username: &str, equipped_skin_path: &str) -> rusqlite::Result<Player> {
    let created_at = Utc::now();
    conn.execute(
        r#"
        INSERT INTO players (username, current_phase, total_score, equipped_skin_path, created_at)
        VALUES (?, 1, 0, ?, ?)
        "#,
        params![username, equipped_skin_path, created_at.to_rfc3339()],
    )?;
    let id = conn.last_insert_rowid();

    Ok(Player {
        id,
        username: username.to_string(),
        current_phase: 1,
        total_score: 0,
        equipped_skin_path: equipped_skin_path.to_string(),
        unlocked_rewards: Vec::new(),
        created_at,
    })
}

/// Fetch a player with their unlocked-reward set.
pub fn find(conn: &Connection, id: i64) -> rusqlite::Result<Option<Player>> {
    let rewards = unlocked_rewards(conn, id)?;
    conn.query_row(
        r#"
        SELECT id, username, current_phase, total_score, equipped_skin_path, created_at
        FROM players WHERE id = ?
        "#,
        params![id],
        |row| row_to_player(row, rewards),
    )
    .optional()
}

pub fn set_total_score(conn: &Connection, id: i64, total_score: i64) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE players SET total_score = ? WHERE id = ?",
        params![total_score, id],
    )?;
    Ok(())
}

pub fn set_equipped_skin(conn: &Connection, id: i64, model_path: &str) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE players SET equipped_skin_path = ? WHERE id = ?",
        params![model_path, id],
    )?;
    Ok(())
}

/// Add a reward to the player's unlocked set. Granting twice is a no-op.
pub fn grant_reward(conn: &Connection, player_id: i64, reward_id: i64) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO player_rewards (player_id, reward_id) VALUES (?, ?)",
        params![player_id, reward_id],
    )?;
    Ok(())
}

/// All rewards the player has unlocked, in grant-table order.
pub fn unlocked_rewards(conn: &Connection, player_id: i64) -> rusqlite::Result<Vec<Reward>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT r.id, r.name, r.kind, r.unlock_condition
        FROM rewards r
        JOIN player_rewards pr ON pr.reward_id = r.id
        WHERE pr.player_id = ?
        ORDER BY r.id
        "#,
    )?;
    let rows = stmt.query_map(params![player_id], row_to_reward)?;
    rows.collect()
}
