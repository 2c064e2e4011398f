//! Cricket Stats CLI Library
//!
//! A small dashboard library for browsing and editing cricket statistics kept
//! in a local SQLite database, plus a thin client for the Cricbuzz live API.
//!
//! ## Features
//!
//! - **Schema Management**: Idempotent creation of teams, players, venues and matches
//! - **Sample Data**: Insert-or-ignore seed rows for a fresh database
//! - **Player CRUD**: Parameterized, transactional insert/update/delete of players
//! - **Query Catalog**: Named analytics queries returning generic tables
//! - **Live Matches**: Recent/live match feeds flattened into rows
//! - **CSV Export**: Any table as UTF-8 CSV with a header row
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cricket_stats::{storage::CricketDatabase, Role, TeamId};
//!
//! # fn example() -> cricket_stats::Result<()> {
//! let mut db = CricketDatabase::open_default()?;
//! db.initialize_schema()?;
//! db.seed_sample_data()?;
//!
//! let id = db.insert_player("Jasprit Bumrah", Role::Bowler.as_str(), TeamId::new(1))?;
//! db.update_player_stats(id, 45, 420)?;
//!
//! for player in db.list_players()? {
//!     println!("{} {}", player.player_id, player.full_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export CRICKET_STATS_DB=./data/cricbuzz.db   # optional
//! export RAPID_API_KEY=...                     # required for `live` commands
//! export RAPID_API_HOST=cricbuzz-cricket.p.rapidapi.com  # optional
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod live;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{MatchId, PlayerId, Role, TeamId, VenueId};
pub use error::{CricketError, Result};
pub use storage::{CricketDatabase, Match, Player, QueryResult, Team, Venue};
