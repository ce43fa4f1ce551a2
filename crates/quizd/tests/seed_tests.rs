//! Content pack import and store persistence.

use quizd::game;
use quizd::seed::{self, ContentPack};
use quizd::store::{players, rewards, world, GameStore};

const PACK: &str = r#"
[[phases]]
name = "Meadow"
description = "starting area"
unlock_threshold = 0
scene_glb_path = "scenes/meadow.glb"

[[phases]]
name = "Caves"
unlock_threshold = 5
scene_glb_path = "scenes/caves.glb"

[[quiz_points]]
phase = 1
position = [1.0, 0.0, -2.5]

[[quiz_points]]
phase = 2
position = [4.0, 1.5, 8.0]
trigger_radius = 2.0

[[quizzes]]
point = 1
question = "2 + 2?"
options = ["3", "4"]
correct_index = 1

[[rewards]]
name = "Quiz Novice"
type = "BADGE"
unlock_condition = "PASS_QUIZZES:5"

[[skins]]
name = "Starter"
model_path = "characters/char1.glb"
is_default = true

[[badges]]
name = "Novice"
unlock_condition = "PASS_QUIZZES:5"
"#;

fn parse_pack() -> ContentPack {
    toml::from_str(PACK).unwrap()
}

#[test]
fn import_populates_reference_tables() {
    let store = GameStore::open_in_memory().unwrap();
    let summary = seed::import(&store, &parse_pack()).unwrap().expect("fresh import");

    assert_eq!(summary.phases, 2);
    assert_eq!(summary.quiz_points, 2);
    assert_eq!(summary.quizzes, 1);

    store
        .with_conn(|conn| {
            let phases = world::phases_within_threshold(conn, 10)?;
            assert_eq!(phases.len(), 2);
            assert_eq!(phases[1].unlock_threshold, 5);

            let points = world::quiz_points_for_phase(conn, 2)?;
            assert_eq!(points.len(), 1);
            assert_eq!(points[0].trigger_radius, 2.0);

            let quizzes = world::quizzes_for_point(conn, 1)?;
            assert_eq!(quizzes.len(), 1);
            assert_eq!(quizzes[0].options, vec!["3".to_string(), "4".to_string()]);
            assert_eq!(quizzes[0].correct_index, 1);

            assert_eq!(rewards::all_skins(conn)?.len(), 1);
            assert_eq!(rewards::all_badges(conn)?.len(), 1);
            Ok(())
        })
        .unwrap();
}

#[test]
fn reimport_is_skipped_and_leaves_players_alone() {
    let store = GameStore::open_in_memory().unwrap();
    seed::import(&store, &parse_pack()).unwrap();

    let player = game::create_player(&store, "rin", "characters/char1.glb").unwrap();

    let second = seed::import(&store, &parse_pack()).unwrap();
    assert!(second.is_none(), "second import must be a no-op");

    let still_there = store
        .with_conn(|conn| Ok(players::find(conn, player.id)?))
        .unwrap();
    assert!(still_there.is_some());
}

#[test]
fn invalid_pack_imports_nothing() {
    let store = GameStore::open_in_memory().unwrap();
    let mut pack = parse_pack();
    pack.quizzes[0].correct_index = 7;

    assert!(seed::import(&store, &pack).is_err());
    store
        .with_conn(|conn| {
            assert!(rewards::reference_tables_empty(conn)?);
            Ok(())
        })
        .unwrap();
}

#[test]
fn store_persists_across_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let db_path = dir.path().join("quizd.db");

    {
        let store = GameStore::open(&db_path).unwrap();
        seed::import(&store, &parse_pack()).unwrap();
        game::create_player(&store, "rin", "characters/char1.glb").unwrap();
    }

    let store = GameStore::open(&db_path).unwrap();
    store
        .with_conn(|conn| {
            let player = players::find(conn, 1)?.expect("player survives reopen");
            assert_eq!(player.username, "rin");
            assert!(!rewards::reference_tables_empty(conn)?);
            Ok(())
        })
        .unwrap();
}
