//! Analytics commands over the query catalog

use super::common::{emit_output, open_db, render_table};
use crate::{
    cli::{AnalyticsCmd, OutputArgs},
    core::export::Tabular,
    storage::{find_query, QueryResult, CATALOG},
    CricketError, Result,
};
use std::path::Path;

/// Handle `analytics <cmd>`
pub fn handle_analytics(db_path: &Path, cmd: AnalyticsCmd) -> Result<()> {
    match cmd {
        AnalyticsCmd::List => {
            handle_list();
            Ok(())
        }
        AnalyticsCmd::Run { id, output } => handle_run(db_path, &id, &output).map(|_| ()),
        AnalyticsCmd::RunAll => handle_run_all(db_path).map(|_| ()),
        AnalyticsCmd::Kpis { json } => handle_kpis(db_path, json),
    }
}

pub fn handle_list() {
    for query in CATALOG {
        println!("{:<4} {}", query.id, query.title);
    }
}

/// Run one catalog entry and print it; returns the result for callers that
/// want to inspect it.
pub fn handle_run(db_path: &Path, id: &str, output: &OutputArgs) -> Result<QueryResult> {
    let query = find_query(id).ok_or_else(|| CricketError::UnknownQuery { id: id.to_string() })?;
    let db = open_db(db_path)?;
    let result = db.run_query(query)?;

    if !output.json {
        println!("{} - {}", query.id, query.title);
    }
    emit_output(&result, output, || {
        Ok(serde_json::to_string_pretty(&result.to_records())?)
    })?;
    Ok(result)
}

/// Run every entry; failures are printed per entry and counted.
///
/// Returns the number of entries that failed.
pub fn handle_run_all(db_path: &Path) -> Result<usize> {
    let db = open_db(db_path)?;
    let mut failures = 0;

    for (query, result) in db.run_catalog() {
        println!("== {} - {} ==", query.id, query.title);
        match result {
            Ok(result) if result.is_empty() => println!("Query ran successfully but returned no rows."),
            Ok(result) => println!("{}", render_table(&result.headers(), &result.rows())),
            Err(e) => {
                failures += 1;
                println!("Error running query: {}", e);
            }
        }
        println!();
    }

    if failures > 0 {
        eprintln!("{} of {} queries failed", failures, CATALOG.len());
    }
    Ok(failures)
}

pub fn handle_kpis(db_path: &Path, json: bool) -> Result<()> {
    let db = open_db(db_path)?;
    let counts = db.table_counts()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        println!("Total Teams:   {}", counts.teams);
        println!("Total Players: {}", counts.players);
        println!("Total Matches: {}", counts.matches);
        println!("Total Venues:  {}", counts.venues);
    }
    Ok(())
}
