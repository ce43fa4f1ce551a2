//! quizd - quiz-progression game daemon
//!
//! Serves the game API over HTTP and keeps all state in SQLite.

use anyhow::Result;
use clap::Parser;
use quizd::config::{QuizdConfig, CONFIG_PATH};
use quizd::server::AppState;
use quizd::store::GameStore;
use quizd::{seed, server};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "quizd", version, about = "Quiz-progression game backend daemon")]
struct Args {
    /// Config file path
    #[arg(long, default_value = CONFIG_PATH)]
    config: PathBuf,

    /// Override the listen address from the config
    #[arg(long)]
    listen: Option<String>,

    /// Override the database path from the config
    #[arg(long)]
    db: Option<PathBuf>,

    /// Import a content pack before serving (skipped if already seeded)
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("quizd v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let mut config = QuizdConfig::load(&args.config)?;
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }
    if let Some(db) = args.db {
        config.db_path = db;
    }
    if let Some(seed_path) = args.seed {
        config.seed_path = Some(seed_path);
    }

    let store = GameStore::open(&config.db_path)?;
    info!("Game store ready at {:?}", config.db_path);

    if let Some(seed_path) = &config.seed_path {
        seed::import_file(&store, seed_path)?;
    }

    let state = AppState::new(store, config.default_skin_path.clone());
    server::run(state, &config.listen_addr, &config.cors_origin).await
}
