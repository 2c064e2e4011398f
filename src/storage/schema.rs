//! Database schema and connection management

use crate::core::config::default_db_path;
use crate::error::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

const CREATE_TEAMS: &str = "CREATE TABLE IF NOT EXISTS teams (
    team_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    country TEXT
)";

const CREATE_PLAYERS: &str = "CREATE TABLE IF NOT EXISTS players (
    player_id INTEGER PRIMARY KEY,
    full_name TEXT NOT NULL,
    role TEXT,
    batting_style TEXT,
    bowling_style TEXT,
    team_id INTEGER,
    matches INTEGER NOT NULL DEFAULT 0,
    runs INTEGER NOT NULL DEFAULT 0,
    FOREIGN KEY (team_id) REFERENCES teams(team_id)
)";

const CREATE_VENUES: &str = "CREATE TABLE IF NOT EXISTS venues (
    venue_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    city TEXT,
    country TEXT,
    capacity INTEGER
)";

const CREATE_MATCHES: &str = "CREATE TABLE IF NOT EXISTS matches (
    match_id INTEGER PRIMARY KEY,
    description TEXT,
    team1_id INTEGER,
    team2_id INTEGER,
    venue_id INTEGER,
    date TEXT,
    winner_id INTEGER,
    FOREIGN KEY (team1_id) REFERENCES teams(team_id),
    FOREIGN KEY (team2_id) REFERENCES teams(team_id),
    FOREIGN KEY (venue_id) REFERENCES venues(venue_id),
    FOREIGN KEY (winner_id) REFERENCES teams(team_id)
)";

/// Handle to the cricket database file.
///
/// Owns a single connection which is closed when the handle is dropped.
/// Open one per unit of work; handles are not meant to be cached.
pub struct CricketDatabase {
    pub(crate) conn: Connection,
    path: Option<PathBuf>,
}

impl CricketDatabase {
    /// Open (or create) the database file at `path`, creating its directory
    /// if needed. The schema is not touched; see [`Self::initialize_schema`].
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path)?;
        Self::from_connection(conn, Some(path.to_path_buf()))
    }

    /// Open the database at the default location.
    pub fn open_default() -> Result<Self> {
        Self::open(&default_db_path())
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, None)
    }

    /// Foreign keys are declared but never enforced; the bundled SQLite
    /// turns enforcement on by default, so it is switched off per connection.
    fn from_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", false)?;
        Ok(Self { conn, path })
    }

    /// Location of the backing file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create the four tables if they do not exist yet. Safe to call repeatedly.
    pub fn initialize_schema(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;

        for ddl in [CREATE_TEAMS, CREATE_PLAYERS, CREATE_VENUES, CREATE_MATCHES] {
            tx.execute(ddl, [])?;
        }

        tx.commit()?;
        debug!("schema initialized");
        Ok(())
    }

    /// Names of the user tables, sorted alphabetically.
    pub fn list_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;

        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut tables = Vec::new();
        for row in rows {
            tables.push(row?);
        }
        Ok(tables)
    }
}
