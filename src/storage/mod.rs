//! Storage layer for the cricket stats CLI
//!
//! This module provides a thin abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Row structures for the four tables
//! - `schema`: Connection handling and idempotent schema creation
//! - `seed`: Fixed sample rows
//! - `queries`: Player CRUD and read-only listings
//! - `catalog`: Named analytics queries returning generic tables

pub mod catalog;
pub mod models;
pub mod queries;
pub mod schema;
pub mod seed;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use catalog::{find_query, CatalogQuery, CellValue, QueryResult, CATALOG};
pub use models::*;
pub use schema::CricketDatabase;
