//! Core utilities for the cricket stats CLI
//!
//! This module consolidates cross-cutting concerns used by every command:
//! - `config`: database path and live API credential resolution
//! - `export`: CSV serialization of tabular results
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod export;
pub mod logging;

// Re-export commonly used items for convenience
pub use config::{default_db_path, resolve_db_path, LiveApiConfig};
pub use export::{to_csv, write_csv, TableRow, Tabular};
pub use logging::LoggingConfig;
