//! CSV export for tabular results.

use crate::error::{CricketError, Result};
use std::path::Path;

/// Anything that can be laid out as a header row plus string rows.
pub trait Tabular {
    fn headers(&self) -> Vec<String>;
    fn rows(&self) -> Vec<Vec<String>>;
}

/// A slice of records renders as one row per record.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl<T: TableRow> Tabular for [T] {
    fn headers(&self) -> Vec<String> {
        T::headers().iter().map(|h| h.to_string()).collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter().map(TableRow::cells).collect()
    }
}

impl<T: TableRow> Tabular for Vec<T> {
    fn headers(&self) -> Vec<String> {
        self.as_slice().headers()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.as_slice().rows()
    }
}

/// Render an optional cell as text, empty when absent.
pub fn opt_cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// Serialize a table to UTF-8 CSV bytes with a header row.
pub fn to_csv<T: Tabular + ?Sized>(table: &T) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(table.headers())?;
    for row in table.rows() {
        wtr.write_record(&row)?;
    }
    wtr.into_inner()
        .map_err(|e| CricketError::Io(e.into_error()))
}

/// Write a table as CSV to `path`, creating parent directories as needed.
pub fn write_csv<T: Tabular + ?Sized>(table: &T, path: &Path) -> Result<()> {
    let bytes = to_csv(table)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
