//! Command implementations for the cricket stats CLI

pub mod analytics;
pub mod browse;
pub mod common;
pub mod db_setup;
pub mod live;
pub mod players;
