//! Configuration management for quizd.
//!
//! Loads settings from a TOML file or uses defaults; CLI flags override both.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default config file path
pub const CONFIG_PATH: &str = "quizd.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizdConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Exact origin allowed by CORS (the frontend dev server)
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    /// Model path new players start with
    #[serde(default = "default_skin_path")]
    pub default_skin_path: String,

    /// Optional content pack to import at startup
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_db_path() -> PathBuf {
    PathBuf::from("quizd.db")
}

fn default_cors_origin() -> String {
    // The vite dev server the browser client runs on
    "http://127.0.0.1:5173".to_string()
}

fn default_skin_path() -> String {
    "characters/char1.glb".to_string()
}

impl Default for QuizdConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            db_path: default_db_path(),
            cors_origin: default_cors_origin(),
            default_skin_path: default_skin_path(),
            seed_path: None,
        }
    }
}

impl QuizdConfig {
    /// Load config from a file, falling back to defaults when it is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_backend() {
        let config = QuizdConfig::default();
        assert_eq!(config.cors_origin, "http://127.0.0.1:5173");
        assert_eq!(config.default_skin_path, "characters/char1.glb");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: QuizdConfig = toml::from_str("listen_addr = \"0.0.0.0:9000\"").unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.db_path, PathBuf::from("quizd.db"));
        assert!(config.seed_path.is_none());
    }
}
