//! Phases, quiz points and quizzes (static reference data).
//!
//! Quiz options are stored as a JSON array in a TEXT column.

use quiz_common::{Phase, Quiz, QuizPoint};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

fn row_to_phase(row: &Row) -> rusqlite::Result<Phase> {
    Ok(Phase {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        unlock_threshold: row.get(3)?,
        scene_glb_path: row.get(4)?,
    })
}

fn row_to_quiz_point(row: &Row) -> rusqlite::Result<QuizPoint> {
    Ok(QuizPoint {
        id: row.get(0)?,
        position_x: row.get(1)?,
        position_y: row.get(2)?,
        position_z: row.get(3)?,
        trigger_radius: row.get(4)?,
        phase_id: row.get(5)?,
    })
}

fn row_to_quiz(row: &Row) -> rusqlite::Result<Quiz> {
    let options_json: String = row.get(2)?;
    let options = serde_json::from_str(&options_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
    Ok(Quiz {
        id: row.get(0)?,
        question: row.get(1)?,
        options,
        correct_index: row.get(3)?,
        quiz_point_id: row.get(4)?,
    })
}

pub fn insert_phase(
    conn: &Connection,
    name: &str,
    description: &str,
    unlock_threshold: i64,
    scene_glb_path: &str,
) -> rusqlite::Result<i64> {
    conn.execute(
        r#"
        INSERT INTO phases (name, description, unlock_threshold, scene_glb_path)
        VALUES (?, ?, ?, ?)
        "#,
        params![name, description, unlock_threshold, scene_glb_path],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Phases a score is high enough to unlock, in id order.
pub fn phases_within_threshold(conn: &Connection, total_score: i64) -> rusqlite::Result<Vec<Phase>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, name, description, unlock_threshold, scene_glb_path
        FROM phases WHERE unlock_threshold <= ? ORDER BY id
        "#,
    )?;
    let rows = stmt.query_map(params![total_score], row_to_phase)?;
    rows.collect()
}

pub fn insert_quiz_point(
    conn: &Connection,
    position: (f64, f64, f64),
    trigger_radius: f64,
    phase_id: i64,
) -> rusqlite::Result<i64> {
    conn.execute(
        r#"
        INSERT INTO quiz_points (position_x, position_y, position_z, trigger_radius, phase_id)
        VALUES (?, ?, ?, ?, ?)
        "#,
        params![position.0, position.1, position.2, trigger_radius, phase_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn quiz_points_for_phase(conn: &Connection, phase_id: i64) -> rusqlite::Result<Vec<QuizPoint>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, position_x, position_y, position_z, trigger_radius, phase_id
        FROM quiz_points WHERE phase_id = ? ORDER BY id
        "#,
    )?;
    let rows = stmt.query_map(params![phase_id], row_to_quiz_point)?;
    rows.collect()
}

pub fn insert_quiz(
    conn: &Connection,
    question: &str,
    options: &[String],
    correct_index: i64,
    quiz_point_id: i64,
) -> rusqlite::Result<i64> {
    let options_json = serde_json::to_string(options)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    conn.execute(
        r#"
        INSERT INTO quizzes (question, options, correct_index, quiz_point_id)
        VALUES (?, ?, ?, ?)
        "#,
        params![question, options_json, correct_index, quiz_point_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_quiz(conn: &Connection, id: i64) -> rusqlite::Result<Option<Quiz>> {
    conn.query_row(
        "SELECT id, question, options, correct_index, quiz_point_id FROM quizzes WHERE id = ?",
        params![id],
        row_to_quiz,
    )
    .optional()
}

pub fn quizzes_for_point(conn: &Connection, quiz_point_id: i64) -> rusqlite::Result<Vec<Quiz>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, question, options, correct_index, quiz_point_id
        FROM quizzes WHERE quiz_point_id = ? ORDER BY id
        "#,
    )?;
    let rows = stmt.query_map(params![quiz_point_id], row_to_quiz)?;
    rows.collect()
}
