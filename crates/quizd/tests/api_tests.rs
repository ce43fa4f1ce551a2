//! HTTP-level tests driving the axum router directly.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use quiz_common::RewardKind;
use quizd::server::{app, AppState};
use quizd::store::{rewards, world, GameStore};
use std::sync::Arc;
use tower::ServiceExt;

const ORIGIN: &str = "http://127.0.0.1:5173";

/// Router over a seeded in-memory store: two phases, one point, one quiz,
/// one default and one locked skin.
fn test_app() -> Router {
    let store = GameStore::open_in_memory().unwrap();
    store
        .with_conn(|conn| {
            let phase = world::insert_phase(conn, "Meadow", "", 0, "scenes/meadow.glb")?;
            world::insert_phase(conn, "Caves", "", 1, "scenes/caves.glb")?;
            let point = world::insert_quiz_point(conn, (0.0, 0.0, 0.0), 1.0, phase)?;
            let options = vec!["3".to_string(), "4".to_string()];
            world::insert_quiz(conn, "2 + 2?", &options, 1, point)?;
            rewards::insert_skin(conn, "Starter", "characters/char1.glb", "", "", true)?;
            rewards::insert_skin(conn, "Gold", "characters/gold.glb", "", "", false)?;
            rewards::insert_reward(conn, "Quiz Novice", RewardKind::Badge, "PASS_QUIZZES:1")?;
            rewards::insert_badge(conn, "Novice", "PASS_QUIZZES:1")?;
            Ok(())
        })
        .unwrap();

    let state = AppState::new(store, "characters/char1.glb".to_string());
    app(Arc::new(state), ORIGIN).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_player(app: &Router, username: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/players?username={username}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

async fn submit(app: &Router, player_id: i64, quiz_id: i64, chosen_index: i64) -> serde_json::Value {
    let body = serde_json::json!({
        "playerId": player_id,
        "quizId": quiz_id,
        "chosenIndex": chosen_index,
    });
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/quizzes/submit")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn create_player_returns_camel_case_defaults() {
    let app = test_app();
    let player = create_player(&app, "rin").await;

    assert_eq!(player["username"], "rin");
    assert_eq!(player["currentPhase"], 1);
    assert_eq!(player["totalScore"], 0);
    assert_eq!(player["equippedSkinPath"], "characters/char1.glb");
    assert_eq!(player["unlockedRewards"], serde_json::json!([]));
}

#[tokio::test]
async fn submit_then_next_phase_flow() {
    let app = test_app();
    let player = create_player(&app, "rin").await;
    let player_id = player["id"].as_i64().unwrap();

    // No new phase at score 0
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/phases/next?playerId={player_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let answer = submit(&app, player_id, 1, 1).await;
    assert_eq!(answer["correct"], true);

    // Score 1 unlocks phase 2
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/phases/next?playerId={player_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let phase = body_json(response).await;
    assert_eq!(phase["id"], 2);
    assert_eq!(phase["name"], "Caves");
}

#[tokio::test]
async fn wrong_answer_reports_incorrect() {
    let app = test_app();
    let player = create_player(&app, "rin").await;
    let player_id = player["id"].as_i64().unwrap();

    let answer = submit(&app, player_id, 1, 0).await;
    assert_eq!(answer["correct"], false);
}

#[tokio::test]
async fn correct_answer_lookup_returns_bare_integer() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/quizzes/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!(1));
}

#[tokio::test]
async fn missing_player_maps_to_404() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/phases/next?playerId=999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn locked_skin_maps_to_409() {
    let app = test_app();
    let player = create_player(&app, "rin").await;
    let player_id = player["id"].as_i64().unwrap();

    // Skin 2 ("Gold") is not a default and no reward matches it
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/skins/equip?playerId={player_id}&skinId=2"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn equipping_the_default_skin_succeeds() {
    let app = test_app();
    let player = create_player(&app, "rin").await;
    let player_id = player["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/skins/equip?playerId={player_id}&skinId=1"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn listings_return_all_rows() {
    let app = test_app();

    for (uri, expected_len) in [
        ("/api/skins", 2),
        ("/api/badges", 1),
        ("/api/quizzes/points/1", 1),
        ("/api/quizzespoints/1", 1),
    ] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        let list = body_json(response).await;
        assert_eq!(list.as_array().unwrap().len(), expected_len, "GET {uri}");
    }
}

#[tokio::test]
async fn badge_appears_after_reward_grant() {
    let app = test_app();
    let player = create_player(&app, "rin").await;
    let player_id = player["id"].as_i64().unwrap();

    submit(&app, player_id, 1, 1).await; // score 1 grants PASS_QUIZZES:1

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/badges/player/{player_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let badges = body_json(response).await;
    assert_eq!(badges.as_array().unwrap().len(), 1);
    assert_eq!(badges[0]["name"], "Novice");
}

#[tokio::test]
async fn health_endpoint_reports_version() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let health = body_json(response).await;
    assert_eq!(health["status"], "healthy");
}
