//! Database setup commands: init, seed, tables, show

use super::common::{open_db, render_table};
use crate::{cli::DbCmd, core::export::Tabular, Result};
use std::path::Path;

/// Handle `db <cmd>`
pub fn handle_db(db_path: &Path, cmd: DbCmd) -> Result<()> {
    match cmd {
        DbCmd::Init => handle_init(db_path),
        DbCmd::Seed => handle_seed(db_path),
        DbCmd::Tables => handle_tables(db_path),
        DbCmd::Show => handle_show(db_path),
    }
}

pub fn handle_init(db_path: &Path) -> Result<()> {
    let mut db = open_db(db_path)?;
    db.initialize_schema()?;

    println!("✓ Database initialized at {}", db_path.display());
    println!("Tables: {}", db.list_tables()?.join(", "));
    Ok(())
}

pub fn handle_seed(db_path: &Path) -> Result<()> {
    let mut db = open_db(db_path)?;
    db.seed_sample_data()?;

    let counts = db.table_counts()?;
    println!("✓ Sample data inserted");
    println!(
        "Teams: {}, Players: {}, Venues: {}, Matches: {}",
        counts.teams, counts.players, counts.venues, counts.matches
    );
    Ok(())
}

pub fn handle_tables(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;
    let tables = db.list_tables()?;

    if tables.is_empty() {
        println!("No tables yet. Run `db init` first.");
    } else {
        for table in tables {
            println!("{}", table);
        }
    }
    Ok(())
}

/// Print all four tables, one section each
pub fn handle_show(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;

    print_section("Teams", &db.list_teams()?);
    print_section("Players", &db.list_players()?);
    print_section("Venues", &db.list_venues()?);
    print_section("Matches", &db.list_matches()?);
    Ok(())
}

fn print_section<T: Tabular + ?Sized>(title: &str, table: &T) {
    println!("== {} ==", title);
    let rows = table.rows();
    if rows.is_empty() {
        println!("(empty)");
    } else {
        println!("{}", render_table(&table.headers(), &rows));
    }
    println!();
}
