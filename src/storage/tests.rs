//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{PlayerId, TeamId};
use crate::error::CricketError;
use chrono::NaiveDate;

fn create_test_db() -> CricketDatabase {
    let mut db = CricketDatabase::open_in_memory().unwrap();
    db.initialize_schema().unwrap();
    db
}

fn create_seeded_db() -> CricketDatabase {
    let mut db = create_test_db();
    db.seed_sample_data().unwrap();
    db
}

fn insert_match(db: &CricketDatabase, id: u32, date: &str, winner: Option<u32>) {
    db.conn
        .execute(
            "INSERT INTO matches (match_id, description, team1_id, team2_id, venue_id, date, winner_id)
             VALUES (?, 'Test match', 1, 2, 1, ?, ?)",
            rusqlite::params![id, date, winner],
        )
        .unwrap();
}

#[test]
fn test_database_creation() {
    let db = create_test_db();
    assert!(db.path().is_none());
}

#[test]
fn test_list_tables_after_init() {
    let db = create_test_db();
    let tables = db.list_tables().unwrap();
    assert_eq!(tables, vec!["matches", "players", "teams", "venues"]);
}

#[test]
fn test_initialize_schema_twice() {
    let mut db = create_test_db();
    let before = db.list_tables().unwrap();

    db.initialize_schema().unwrap();

    assert_eq!(db.list_tables().unwrap(), before);
}

#[test]
fn test_list_tables_empty_database() {
    let db = CricketDatabase::open_in_memory().unwrap();
    assert!(db.list_tables().unwrap().is_empty());
}

#[test]
fn test_seed_sample_data_counts() {
    let db = create_seeded_db();
    let counts = db.table_counts().unwrap();

    assert_eq!(
        counts,
        TableCounts {
            teams: 2,
            players: 2,
            venues: 1,
            matches: 1,
        }
    );
}

#[test]
fn test_seed_does_not_overwrite_existing_rows() {
    let mut db = create_seeded_db();
    db.update_player(PlayerId::new(1), "V. Kohli", "Allrounder", TeamId::new(2))
        .unwrap();

    db.seed_sample_data().unwrap();

    let player = db.get_player(PlayerId::new(1)).unwrap().unwrap();
    assert_eq!(player.full_name, "V. Kohli");
    assert_eq!(player.role.as_deref(), Some("Allrounder"));
}

#[test]
fn test_insert_player_assigns_fresh_id() {
    let mut db = create_seeded_db();

    let id = db.insert_player("Test Player", "Batsman", TeamId::new(1)).unwrap();

    assert_eq!(id, PlayerId::new(3));
    let player = db.get_player(id).unwrap().unwrap();
    assert_eq!(player.full_name, "Test Player");
    assert_eq!(player.team_id, Some(TeamId::new(1)));
    assert_eq!(player.matches, 0);
    assert_eq!(player.runs, 0);
    assert!(player.batting_style.is_none());
}

#[test]
fn test_insert_player_stores_name_verbatim() {
    let mut db = create_test_db();
    let id = db.insert_player("  Pat Cummins ", "Bowler", TeamId::new(2)).unwrap();
    assert_eq!(db.get_player(id).unwrap().unwrap().full_name, "  Pat Cummins ");
}

#[test]
fn test_insert_player_refuses_id_beyond_u32() {
    let mut db = create_seeded_db();
    db.conn
        .execute(
            "INSERT INTO players (player_id, full_name) VALUES (4294967296, 'Far Away')",
            [],
        )
        .unwrap();

    let result = db.insert_player("Next", "Batsman", TeamId::new(1));

    assert!(matches!(
        result,
        Err(CricketError::IdOutOfRange { value: 4294967297 })
    ));
    let count: i64 = db
        .conn
        .query_row("SELECT COUNT(*) FROM players WHERE full_name = 'Next'", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(count, 0);
    assert_eq!(db.get_player(PlayerId::new(1)).unwrap().unwrap().full_name, "Virat Kohli");
}

#[test]
fn test_foreign_keys_not_enforced() {
    let dir = tempfile::tempdir().unwrap();
    let on_disk = CricketDatabase::open(&dir.path().join("cricbuzz.db")).unwrap();
    let in_memory = CricketDatabase::open_in_memory().unwrap();

    for db in [&on_disk, &in_memory] {
        let enabled: i64 = db
            .conn
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 0);
    }
}

#[test]
fn test_insert_player_on_locked_database_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cricbuzz.db");
    let mut db = CricketDatabase::open(&path).unwrap();
    db.initialize_schema().unwrap();
    db.conn
        .busy_timeout(std::time::Duration::from_millis(50))
        .unwrap();

    let holder = rusqlite::Connection::open(&path).unwrap();
    holder.execute_batch("BEGIN IMMEDIATE").unwrap();

    let result = db.insert_player("Blocked", "Bowler", TeamId::new(1));

    assert!(matches!(result, Err(CricketError::Database(_))));
    holder.execute_batch("ROLLBACK").unwrap();
    drop(holder);
    assert!(db.list_players().unwrap().is_empty());
}

#[test]
fn test_insert_player_rejects_blank_name() {
    let mut db = create_test_db();

    let result = db.insert_player("   ", "Batsman", TeamId::new(1));

    assert!(matches!(result, Err(CricketError::InvalidPlayerName)));
    assert!(db.list_players().unwrap().is_empty());
}

#[test]
fn test_insert_player_rejects_zero_team() {
    let mut db = create_test_db();

    let result = db.insert_player("Someone", "Batsman", TeamId::new(0));

    assert!(matches!(result, Err(CricketError::InvalidTeamId { id: 0 })));
}

#[test]
fn test_insert_player_accepts_unknown_team_and_role() {
    let mut db = create_test_db();

    // No teams exist and the role is outside the usual set; both are stored as-is.
    let id = db.insert_player("Orphan", "Captain", TeamId::new(99)).unwrap();

    let player = db.get_player(id).unwrap().unwrap();
    assert_eq!(player.role.as_deref(), Some("Captain"));
    assert_eq!(player.team_id, Some(TeamId::new(99)));
}

#[test]
fn test_update_player_existing() {
    let mut db = create_seeded_db();

    let rows = db
        .update_player(PlayerId::new(2), "Steven Smith", "Allrounder", TeamId::new(1))
        .unwrap();

    assert_eq!(rows, 1);
    let player = db.get_player(PlayerId::new(2)).unwrap().unwrap();
    assert_eq!(player.full_name, "Steven Smith");
    assert_eq!(player.role.as_deref(), Some("Allrounder"));
    assert_eq!(player.team_id, Some(TeamId::new(1)));
    // Untouched columns survive the update
    assert_eq!(player.batting_style.as_deref(), Some("Right-hand bat"));
}

#[test]
fn test_update_player_missing_is_noop() {
    let mut db = create_seeded_db();
    let before = db.list_players().unwrap();

    let rows = db
        .update_player(PlayerId::new(404), "Nobody", "Bowler", TeamId::new(1))
        .unwrap();

    assert_eq!(rows, 0);
    assert_eq!(db.list_players().unwrap(), before);
}

#[test]
fn test_delete_player() {
    let mut db = create_seeded_db();

    assert_eq!(db.delete_player(PlayerId::new(1)).unwrap(), 1);
    let players = db.list_players().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].player_id, PlayerId::new(2));

    assert_eq!(db.delete_player(PlayerId::new(1)).unwrap(), 0);
    assert_eq!(db.list_players().unwrap().len(), 1);
}

#[test]
fn test_update_player_stats_roundtrip() {
    let mut db = create_seeded_db();

    let rows = db.update_player_stats(PlayerId::new(1), 113, 5402).unwrap();

    assert_eq!(rows, 1);
    let player = db.get_player(PlayerId::new(1)).unwrap().unwrap();
    assert_eq!(player.matches, 113);
    assert_eq!(player.runs, 5402);
    assert_eq!(player.average(), Some(47.81));
}

#[test]
fn test_update_player_stats_missing_is_noop() {
    let mut db = create_seeded_db();
    assert_eq!(db.update_player_stats(PlayerId::new(77), 1, 1).unwrap(), 0);
}

#[test]
fn test_get_player_nonexistent() {
    let db = create_test_db();
    assert!(db.get_player(PlayerId::new(1)).unwrap().is_none());
}

#[test]
fn test_list_players_without_schema_is_error() {
    let db = CricketDatabase::open_in_memory().unwrap();
    assert!(matches!(db.list_players(), Err(CricketError::Database(_))));
}

#[test]
fn test_list_teams_venues_matches() {
    let db = create_seeded_db();

    let teams = db.list_teams().unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[1].name, "Australia");

    let venues = db.list_venues().unwrap();
    assert_eq!(venues[0].name, "Wankhede Stadium");
    assert_eq!(venues[0].capacity, Some(33000));

    let matches = db.list_matches().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].date.as_deref(), Some("2025-01-01"));
    assert_eq!(matches[0].winner_id, Some(TeamId::new(1)));
}

#[test]
fn test_matches_between_window() {
    let db = create_seeded_db();
    insert_match(&db, 2001, "2023-03-10", Some(2));
    insert_match(&db, 2002, "2024-07-01", None);
    insert_match(&db, 2003, "not a date", Some(1));

    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let found = db.matches_between(start, end).unwrap();

    let ids: Vec<u32> = found.iter().map(|m| m.match_id.as_u32()).collect();
    assert_eq!(ids, vec![2001, 2002]);
}

#[test]
fn test_matches_between_inclusive_bounds() {
    let db = create_seeded_db();
    let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    let found = db.matches_between(day, day).unwrap();

    assert_eq!(found.len(), 1);
}

#[test]
fn test_catalog_on_seeded_data() {
    let db = create_seeded_db();

    let q1 = db.run_query(find_query("Q1").unwrap()).unwrap();
    assert_eq!(q1.len(), 1);
    assert_eq!(
        q1.get(0, "full_name"),
        Some(&CellValue::Text("Virat Kohli".into()))
    );

    let q3 = db.run_query(find_query("Q3").unwrap()).unwrap();
    assert_eq!(q3.get(0, "team_name"), Some(&CellValue::Text("India".into())));
    assert_eq!(q3.get(0, "wins"), Some(&CellValue::Integer(1)));

    let a3 = db.run_query(find_query("A3").unwrap()).unwrap();
    assert_eq!(a3.get(0, "year"), Some(&CellValue::Integer(2025)));
    assert_eq!(a3.get(0, "match_count"), Some(&CellValue::Integer(1)));
}

#[test]
fn test_catalog_batting_average_null_without_matches() {
    let mut db = create_seeded_db();
    db.update_player_stats(PlayerId::new(2), 4, 200).unwrap();

    let q2 = db.run_query(find_query("Q2").unwrap()).unwrap();

    assert_eq!(q2.get(0, "full_name"), Some(&CellValue::Text("Steve Smith".into())));
    assert_eq!(q2.get(0, "batting_avg"), Some(&CellValue::Real(50.0)));
    assert_eq!(q2.get(1, "batting_avg"), Some(&CellValue::Null));
}

#[test]
fn test_run_catalog_without_schema_reports_each_failure() {
    let db = CricketDatabase::open_in_memory().unwrap();

    let results = db.run_catalog();

    assert_eq!(results.len(), CATALOG.len());
    assert!(results.iter().all(|(_, r)| r.is_err()));
}
