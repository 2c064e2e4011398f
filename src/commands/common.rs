//! Common utilities and helper functions shared across commands.

use crate::{
    cli::OutputArgs,
    core::export::{write_csv, Tabular},
    storage::CricketDatabase,
    Result,
};
use std::path::Path;
use tracing::info;

/// Open the database for one command.
///
/// The returned handle is dropped (and the connection closed) when the
/// calling handler returns, successfully or not.
pub fn open_db(db_path: &Path) -> Result<CricketDatabase> {
    CricketDatabase::open(db_path)
}

/// Lay out a table as aligned text columns.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(format_row(row.as_slice()));
    }
    lines.join("\n")
}

/// Print a table (or JSON) to stdout and optionally write CSV.
pub fn emit_output<T, F>(table: &T, output: &OutputArgs, to_json: F) -> Result<()>
where
    T: Tabular + ?Sized,
    F: FnOnce() -> Result<String>,
{
    if let Some(path) = &output.csv {
        write_csv(table, path)?;
        info!(path = %path.display(), "CSV written");
        eprintln!("CSV written to {}", path.display());
    }

    if output.json {
        println!("{}", to_json()?);
        return Ok(());
    }

    let rows = table.rows();
    if rows.is_empty() {
        println!("No rows.");
    } else {
        println!("{}", render_table(&table.headers(), &rows));
    }
    Ok(())
}
