//! Integration tests for command handlers against an on-disk database

use chrono::NaiveDate;
use cricket_stats::{
    cli::{OutputArgs, PlayerFields},
    commands::{analytics, browse, db_setup, players},
    storage::{CellValue, CricketDatabase},
    CricketError, PlayerId, Role, TeamId,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn seeded_db_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("cricbuzz.db");
    db_setup::handle_init(&path).unwrap();
    db_setup::handle_seed(&path).unwrap();
    (dir, path)
}

fn fields(name: &str, role: Role, team: u32) -> PlayerFields {
    PlayerFields {
        name: name.to_string(),
        role,
        team_id: TeamId::new(team),
    }
}

#[test]
fn test_init_and_seed_create_tables_and_rows() {
    let (_dir, path) = seeded_db_path();

    let db = CricketDatabase::open(&path).unwrap();
    let counts = db.table_counts().unwrap();

    assert_eq!(counts.teams, 2);
    assert_eq!(counts.players, 2);
    assert_eq!(counts.venues, 1);
    assert_eq!(counts.matches, 1);
    db_setup::handle_tables(&path).unwrap();
    db_setup::handle_show(&path).unwrap();
}

#[test]
fn test_add_update_delete_cycle() {
    let (_dir, path) = seeded_db_path();

    let id = players::handle_add(&path, &fields("Jasprit Bumrah", Role::Bowler, 1)).unwrap();
    let changed =
        players::handle_update(&path, id, &fields("Jasprit Bumrah", Role::Allrounder, 1)).unwrap();
    assert_eq!(changed, 1);

    let db = CricketDatabase::open(&path).unwrap();
    let player = db.get_player(id).unwrap().unwrap();
    assert_eq!(player.role.as_deref(), Some("Allrounder"));
    drop(db);

    assert_eq!(players::handle_delete(&path, id).unwrap(), 1);
    assert_eq!(players::handle_delete(&path, id).unwrap(), 0);

    let db = CricketDatabase::open(&path).unwrap();
    assert!(db.get_player(id).unwrap().is_none());
    assert_eq!(db.list_players().unwrap().len(), 2);
}

#[test]
fn test_add_rejects_blank_name() {
    let (_dir, path) = seeded_db_path();

    let result = players::handle_add(&path, &fields("   ", Role::Batsman, 1));

    assert!(matches!(result, Err(CricketError::InvalidPlayerName)));
    let db = CricketDatabase::open(&path).unwrap();
    assert_eq!(db.list_players().unwrap().len(), 2);
}

#[test]
fn test_stats_then_show() {
    let (_dir, path) = seeded_db_path();

    let changed = players::handle_stats(&path, PlayerId::new(1), 10, 523).unwrap();
    assert_eq!(changed, 1);
    players::handle_show(&path, PlayerId::new(1), false).unwrap();

    let db = CricketDatabase::open(&path).unwrap();
    let player = db.get_player(PlayerId::new(1)).unwrap().unwrap();
    assert_eq!(player.average(), Some(52.3));
}

#[test]
fn test_show_missing_player() {
    let (_dir, path) = seeded_db_path();

    let result = players::handle_show(&path, PlayerId::new(42), false);

    assert!(matches!(result, Err(CricketError::PlayerNotFound { id: 42 })));
}

#[test]
fn test_list_players_writes_csv() {
    let (dir, path) = seeded_db_path();
    let csv_path = dir.path().join("exports").join("players.csv");
    let output = OutputArgs {
        json: false,
        csv: Some(csv_path.clone()),
    };

    players::handle_list(&path, &output).unwrap();

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = contents.lines();
    assert!(lines.next().unwrap().starts_with("player_id,full_name,"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_matches_window_csv() {
    let (dir, path) = seeded_db_path();
    let csv_path = dir.path().join("matches.csv");
    let output = OutputArgs {
        json: false,
        csv: Some(csv_path.clone()),
    };
    let window = (
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
    );

    browse::handle_matches(&path, Some(window), &output).unwrap();

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(contents.lines().count(), 1, "only the header row expected");
}

#[test]
fn test_browse_lists_run() {
    let (_dir, path) = seeded_db_path();
    let output = OutputArgs::default();

    browse::handle_teams(&path, &output).unwrap();
    browse::handle_venues(&path, &output).unwrap();
    browse::handle_matches(&path, None, &output).unwrap();
}

#[test]
fn test_analytics_run_returns_rows() {
    let (_dir, path) = seeded_db_path();

    let result = analytics::handle_run(&path, "q4", &OutputArgs::default()).unwrap();

    assert_eq!(result.columns, vec!["role", "total_players"]);
    assert_eq!(result.get(0, "role"), Some(&CellValue::Text("Batsman".into())));
    assert_eq!(result.get(0, "total_players"), Some(&CellValue::Integer(2)));
}

#[test]
fn test_analytics_unknown_id() {
    let (_dir, path) = seeded_db_path();

    let result = analytics::handle_run(&path, "Q99", &OutputArgs::default());

    assert!(matches!(result, Err(CricketError::UnknownQuery { .. })));
}

#[test]
fn test_run_all_on_fresh_database_has_no_failures() {
    let (_dir, path) = seeded_db_path();

    assert_eq!(analytics::handle_run_all(&path).unwrap(), 0);
    analytics::handle_kpis(&path, true).unwrap();
}
