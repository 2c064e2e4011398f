//! Read-only listings for teams, venues and matches

use super::common::{emit_output, open_db};
use crate::{cli::OutputArgs, Result};
use chrono::NaiveDate;
use std::path::Path;

pub fn handle_teams(db_path: &Path, output: &OutputArgs) -> Result<()> {
    let db = open_db(db_path)?;
    let teams = db.list_teams()?;
    emit_output(&teams, output, || Ok(serde_json::to_string_pretty(&teams)?))
}

pub fn handle_venues(db_path: &Path, output: &OutputArgs) -> Result<()> {
    let db = open_db(db_path)?;
    let venues = db.list_venues()?;
    emit_output(&venues, output, || Ok(serde_json::to_string_pretty(&venues)?))
}

/// List matches; with both bounds set only the inclusive date window is shown.
pub fn handle_matches(
    db_path: &Path,
    window: Option<(NaiveDate, NaiveDate)>,
    output: &OutputArgs,
) -> Result<()> {
    let db = open_db(db_path)?;
    let matches = match window {
        Some((start, end)) => {
            if !output.json {
                println!("Matches between {} and {}:", start, end);
            }
            db.matches_between(start, end)?
        }
        None => db.list_matches()?,
    };
    emit_output(&matches, output, || Ok(serde_json::to_string_pretty(&matches)?))
}
