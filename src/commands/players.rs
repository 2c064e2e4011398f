//! Player management commands (CRUD)
//!
//! Every mutating command re-reads the players table afterwards and prints
//! it, so the caller always sees the state the write produced.

use super::common::{emit_output, open_db, render_table};
use crate::{
    cli::{OutputArgs, PlayerFields, PlayersCmd},
    core::export::Tabular,
    storage::CricketDatabase,
    CricketError, PlayerId, Result,
};
use std::path::Path;

/// Handle `players <cmd>`
pub fn handle_players(db_path: &Path, cmd: PlayersCmd) -> Result<()> {
    match cmd {
        PlayersCmd::List { output } => handle_list(db_path, &output),
        PlayersCmd::Show { id, json } => handle_show(db_path, id, json),
        PlayersCmd::Add { fields } => handle_add(db_path, &fields).map(|_| ()),
        PlayersCmd::Update { id, fields } => handle_update(db_path, id, &fields).map(|_| ()),
        PlayersCmd::Delete { id } => handle_delete(db_path, id).map(|_| ()),
        PlayersCmd::Stats { id, matches, runs } => {
            handle_stats(db_path, id, matches, runs).map(|_| ())
        }
    }
}

pub fn handle_list(db_path: &Path, output: &OutputArgs) -> Result<()> {
    let db = open_db(db_path)?;
    let players = db.list_players()?;

    if players.is_empty() && !output.json {
        println!("No players yet. Add some with `players add` or run `db seed`.");
        return Ok(());
    }

    emit_output(&players, output, || Ok(serde_json::to_string_pretty(&players)?))
}

pub fn handle_show(db_path: &Path, id: PlayerId, json: bool) -> Result<()> {
    let db = open_db(db_path)?;
    let player = db
        .get_player(id)?
        .ok_or_else(|| CricketError::PlayerNotFound { id: id.as_u32() })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&player)?);
    } else {
        let table = vec![player.clone()];
        println!("{}", render_table(&table.headers(), &table.rows()));
        match player.average() {
            Some(avg) => println!("Average: {:.2} runs per match", avg),
            None => println!("Average: - (no matches recorded)"),
        }
    }
    Ok(())
}

/// Returns the id assigned to the new player
pub fn handle_add(db_path: &Path, fields: &PlayerFields) -> Result<PlayerId> {
    let mut db = open_db(db_path)?;
    let id = db.insert_player(&fields.name, fields.role.as_str(), fields.team_id)?;

    println!("✓ Player added with ID {}", id);
    print_refreshed(&db)?;
    Ok(id)
}

/// Returns the number of rows changed (0 for an unknown id)
pub fn handle_update(db_path: &Path, id: PlayerId, fields: &PlayerFields) -> Result<usize> {
    let mut db = open_db(db_path)?;
    let rows = db.update_player(id, &fields.name, fields.role.as_str(), fields.team_id)?;

    if rows == 0 {
        println!("No player with ID {}; nothing updated", id);
    } else {
        println!("✓ Player {} updated", id);
    }
    print_refreshed(&db)?;
    Ok(rows)
}

/// Returns the number of rows removed (0 for an unknown id)
pub fn handle_delete(db_path: &Path, id: PlayerId) -> Result<usize> {
    let mut db = open_db(db_path)?;
    let rows = db.delete_player(id)?;

    if rows == 0 {
        println!("No player with ID {}; nothing deleted", id);
    } else {
        println!("✓ Player {} deleted", id);
    }
    print_refreshed(&db)?;
    Ok(rows)
}

/// Returns the number of rows changed (0 for an unknown id)
pub fn handle_stats(db_path: &Path, id: PlayerId, matches: u32, runs: u32) -> Result<usize> {
    let mut db = open_db(db_path)?;
    let rows = db.update_player_stats(id, matches, runs)?;

    if rows == 0 {
        println!("No player with ID {}; stats not saved", id);
    } else {
        println!("✓ Stats saved: {} matches, {} runs", matches, runs);
    }
    print_refreshed(&db)?;
    Ok(rows)
}

fn print_refreshed(db: &CricketDatabase) -> Result<()> {
    let players = db.list_players()?;
    if players.is_empty() {
        println!("(no players)");
    } else {
        println!("{}", render_table(&players.headers(), &players.rows()));
    }
    Ok(())
}
