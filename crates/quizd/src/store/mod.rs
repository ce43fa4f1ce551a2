//! SQLite-backed game store.
//!
//! A single connection behind a mutex; repository functions take
//! `&Connection` so they run standalone or composed inside one transaction
//! (the score-increment-then-reward-grant sequence must commit atomically).

pub mod players;
pub mod rewards;
pub mod world;

use crate::error::GameResult;
use anyhow::{Context, Result};
use rusqlite::{Connection, Transaction};
use std::path::Path;
use std::sync::{Arc, Mutex};

pub struct GameStore {
    conn: Arc<Mutex<Connection>>,
}

impl GameStore {
    /// Open or create the game database at a specific path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {:?}", path))?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Run read/write work on the connection.
    pub fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> GameResult<T>) -> GameResult<T> {
        let conn = self.conn.lock().unwrap();
        f(&conn)
    }

    /// Run work inside a transaction; commits on success, rolls back on error.
    pub fn with_tx<T>(&self, f: impl FnOnce(&Transaction) -> GameResult<T>) -> GameResult<T> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction().map_err(crate::error::GameError::Store)?;
        let out = f(&tx)?;
        tx.commit().map_err(crate::error::GameError::Store)?;
        Ok(out)
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL,
                current_phase INTEGER NOT NULL DEFAULT 1,
                total_score INTEGER NOT NULL DEFAULT 0,
                equipped_skin_path TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS phases (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                unlock_threshold INTEGER NOT NULL,
                scene_glb_path TEXT NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS quiz_points (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                position_x REAL NOT NULL,
                position_y REAL NOT NULL,
                position_z REAL NOT NULL,
                trigger_radius REAL NOT NULL DEFAULT 1.0,
                phase_id INTEGER NOT NULL REFERENCES phases(id)
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS quizzes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                options TEXT NOT NULL,
                correct_index INTEGER NOT NULL,
                quiz_point_id INTEGER NOT NULL REFERENCES quiz_points(id)
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS rewards (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                kind TEXT NOT NULL,
                unlock_condition TEXT NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS skins (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                model_path TEXT NOT NULL,
                thumbnail_path TEXT NOT NULL,
                unlock_condition TEXT NOT NULL,
                is_default INTEGER NOT NULL DEFAULT 0
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS badges (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                unlock_condition TEXT NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS player_rewards (
                player_id INTEGER NOT NULL REFERENCES players(id),
                reward_id INTEGER NOT NULL REFERENCES rewards(id),
                PRIMARY KEY (player_id, reward_id)
            )
            "#,
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_quiz_points_phase ON quiz_points(phase_id)",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_quizzes_point ON quizzes(quiz_point_id)",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_rewards_condition ON rewards(unlock_condition)",
            [],
        )?;

        Ok(())
    }
}
