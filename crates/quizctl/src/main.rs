//! quizctl - CLI client for the quizd API
//!
//! Thin wrapper over the HTTP surface, mostly useful for poking at a dev
//! server without a browser client.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use quiz_common::{AnswerRequest, AnswerResponse, HealthResponse, Player};
use reqwest::{Client, Response, StatusCode};

#[derive(Debug, Parser)]
#[command(name = "quizctl", version, about = "CLI client for the quizd API")]
struct Args {
    /// Base URL of the quizd server
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check daemon health
    Health,
    /// Register a new player
    CreatePlayer { username: String },
    /// Show the next phase a player's score has unlocked
    NextPhase { player_id: i64 },
    /// Submit a quiz answer
    Submit {
        player_id: i64,
        quiz_id: i64,
        chosen_index: i64,
    },
    /// List the quizzes of a quiz point
    Quizzes { point_id: i64 },
    /// List the quiz points of a phase
    Points { phase_id: i64 },
    /// List skins; with --player, only the player's unlocked ones
    Skins {
        #[arg(long)]
        player: Option<i64>,
    },
    /// List badges; with --player, only the player's unlocked ones
    Badges {
        #[arg(long)]
        player: Option<i64>,
    },
    /// Equip a skin on a player
    Equip { player_id: i64, skin_id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = Client::new();
    let base = args.server.trim_end_matches('/').to_string();

    match args.command {
        Command::Health => {
            let resp = client.get(format!("{base}/api/health")).send().await?;
            let health: HealthResponse = check(resp).await?.json().await?;
            println!(
                "{} quizd v{} up {}s",
                health.status.green(),
                health.version,
                health.uptime_seconds
            );
        }
        Command::CreatePlayer { username } => {
            let resp = client
                .post(format!("{base}/api/players"))
                .query(&[("username", username.as_str())])
                .send()
                .await?;
            let player: Player = check(resp).await?.json().await?;
            println!(
                "{} player {} '{}' (phase {}, score {})",
                "created".green(),
                player.id,
                player.username,
                player.current_phase,
                player.total_score
            );
        }
        Command::NextPhase { player_id } => {
            let resp = client
                .get(format!("{base}/api/phases/next"))
                .query(&[("playerId", player_id)])
                .send()
                .await?;
            let resp = check(resp).await?;
            if resp.status() == StatusCode::NO_CONTENT {
                println!("{}", "no new phase available".yellow());
            } else {
                print_json(resp).await?;
            }
        }
        Command::Submit {
            player_id,
            quiz_id,
            chosen_index,
        } => {
            let resp = client
                .post(format!("{base}/api/quizzes/submit"))
                .json(&AnswerRequest {
                    player_id,
                    quiz_id,
                    chosen_index,
                })
                .send()
                .await?;
            let answer: AnswerResponse = check(resp).await?.json().await?;
            if answer.correct {
                println!("{}", "correct".green());
            } else {
                println!("{}", "incorrect".red());
            }
        }
        Command::Quizzes { point_id } => {
            let resp = client
                .get(format!("{base}/api/quizzes/points/{point_id}"))
                .send()
                .await?;
            print_json(check(resp).await?).await?;
        }
        Command::Points { phase_id } => {
            let resp = client
                .get(format!("{base}/api/quizzespoints/{phase_id}"))
                .send()
                .await?;
            print_json(check(resp).await?).await?;
        }
        Command::Skins { player } => {
            let url = match player {
                Some(id) => format!("{base}/api/skins/player/{id}"),
                None => format!("{base}/api/skins"),
            };
            let resp = client.get(url).send().await?;
            print_json(check(resp).await?).await?;
        }
        Command::Badges { player } => {
            let url = match player {
                Some(id) => format!("{base}/api/badges/player/{id}"),
                None => format!("{base}/api/badges"),
            };
            let resp = client.get(url).send().await?;
            print_json(check(resp).await?).await?;
        }
        Command::Equip { player_id, skin_id } => {
            let resp = client
                .post(format!("{base}/api/skins/equip"))
                .query(&[("playerId", player_id), ("skinId", skin_id)])
                .send()
                .await?;
            check(resp).await?;
            println!("{}", "equipped".green());
        }
    }

    Ok(())
}

/// Bail with the server's error body on non-success statuses.
async fn check(resp: Response) -> Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    bail!("{} {}", status.to_string().red(), body);
}

async fn print_json(resp: Response) -> Result<()> {
    let value: serde_json::Value = resp.json().await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
