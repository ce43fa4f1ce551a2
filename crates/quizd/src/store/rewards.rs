//! Rewards, skins and badges (static reference data).

use quiz_common::{Badge, Reward, RewardKind, Skin};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(crate) fn row_to_reward(row: &Row) -> rusqlite::Result<Reward> {
    let kind: String = row.get(2)?;
    let kind = RewardKind::from_str(&kind).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            format!("unknown reward kind '{kind}'").into(),
        )
    })?;
    Ok(Reward {
        id: row.get(0)?,
        name: row.get(1)?,
        kind,
        unlock_condition: row.get(3)?,
    })
}

fn row_to_skin(row: &Row) -> rusqlite::Result<Skin> {
    Ok(Skin {
        id: row.get(0)?,
        name: row.get(1)?,
        model_path: row.get(2)?,
        thumbnail_path: row.get(3)?,
        unlock_condition: row.get(4)?,
        is_default: row.get(5)?,
    })
}

fn row_to_badge(row: &Row) -> rusqlite::Result<Badge> {
    Ok(Badge {
        id: row.get(0)?,
        name: row.get(1)?,
        unlock_condition: row.get(2)?,
    })
}

pub fn insert_reward(
    conn: &Connection,
    name: &str,
    kind: RewardKind,
    unlock_condition: &str,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO rewards (name, kind, unlock_condition) VALUES (?, ?, ?)",
        params![name, kind.as_str(), unlock_condition],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Rewards whose unlock condition equals the given string exactly.
pub fn rewards_by_condition(conn: &Connection, condition: &str) -> rusqlite::Result<Vec<Reward>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, kind, unlock_condition FROM rewards WHERE unlock_condition = ? ORDER BY id",
    )?;
    let rows = stmt.query_map(params![condition], row_to_reward)?;
    rows.collect()
}

pub fn insert_skin(
    conn: &Connection,
    name: &str,
    model_path: &str,
    thumbnail_path: &str,
    unlock_condition: &str,
    is_default: bool,
) -> rusqlite::Result<i64> {
    conn.execute(
        r#"
        INSERT INTO skins (name, model_path, thumbnail_path, unlock_condition, is_default)
        VALUES (?, ?, ?, ?, ?)
        "#,
        params![name, model_path, thumbnail_path, unlock_condition, is_default],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn all_skins(conn: &Connection) -> rusqlite::Result<Vec<Skin>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, model_path, thumbnail_path, unlock_condition, is_default FROM skins ORDER BY id",
    )?;
    let rows = stmt.query_map([], row_to_skin)?;
    rows.collect()
}

pub fn find_skin(conn: &Connection, id: i64) -> rusqlite::Result<Option<Skin>> {
    conn.query_row(
        "SELECT id, name, model_path, thumbnail_path, unlock_condition, is_default FROM skins WHERE id = ?",
        params![id],
        row_to_skin,
    )
    .optional()
}

pub fn insert_badge(conn: &Connection, name: &str, unlock_condition: &str) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO badges (name, unlock_condition) VALUES (?, ?)",
        params![name, unlock_condition],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn all_badges(conn: &Connection) -> rusqlite::Result<Vec<Badge>> {
    let mut stmt =
        conn.prepare("SELECT id, name, unlock_condition FROM badges ORDER BY id")?;
    let rows = stmt.query_map([], row_to_badge)?;
    rows.collect()
}

/// True when no reference data has been loaded yet (seed guard).
pub fn reference_tables_empty(conn: &Connection) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        r#"
        SELECT (SELECT COUNT(*) FROM phases)
             + (SELECT COUNT(*) FROM rewards)
             + (SELECT COUNT(*) FROM skins)
             + (SELECT COUNT(*) FROM badges)
        "#,
        [],
        |row| row.get(0),
    )?;
    Ok(count == 0)
}
