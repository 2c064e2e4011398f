//! Fixed catalog of read-only analytics queries
//!
//! Each entry is a named SQL statement with no bound parameters. Entries are
//! executed independently: a failing statement reports its own error and
//! never stops the others from running.

use super::schema::CricketDatabase;
use crate::core::export::Tabular;
use crate::error::Result;
use rusqlite::types::Value;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use tracing::{debug, warn};

/// A named analytics query and the columns it yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogQuery {
    pub id: &'static str,
    pub title: &'static str,
    pub sql: &'static str,
    pub columns: &'static [&'static str],
}

/// Splice the runs-per-match expression between two SQL fragments.
macro_rules! with_run_average {
    ($head:literal, $tail:literal) => {
        concat!(
            $head,
            "CASE WHEN matches = 0 THEN NULL ELSE ROUND(runs * 1.0 / matches, 2) END",
            $tail
        )
    };
}

pub const CATALOG: &[CatalogQuery] = &[
    CatalogQuery {
        id: "Q1",
        title: "Players representing India",
        sql: "SELECT full_name, role, batting_style, bowling_style
              FROM players p
              JOIN teams t ON p.team_id = t.team_id
              WHERE t.country = 'India'",
        columns: &["full_name", "role", "batting_style", "bowling_style"],
    },
    CatalogQuery {
        id: "Q2",
        title: "Top 10 run scorers",
        sql: with_run_average!(
            "SELECT full_name, runs, ",
            " AS batting_avg FROM players ORDER BY runs DESC LIMIT 10"
        ),
        columns: &["full_name", "runs", "batting_avg"],
    },
    CatalogQuery {
        id: "Q3",
        title: "Matches won by each team",
        sql: "SELECT t.name AS team_name, COUNT(*) AS wins
              FROM matches m
              JOIN teams t ON m.winner_id = t.team_id
              GROUP BY t.name
              ORDER BY wins DESC",
        columns: &["team_name", "wins"],
    },
    CatalogQuery {
        id: "Q4",
        title: "Count players per role",
        sql: "SELECT role, COUNT(*) AS total_players
              FROM players
              GROUP BY role
              ORDER BY total_players DESC",
        columns: &["role", "total_players"],
    },
    CatalogQuery {
        id: "Q5",
        title: "Highest run scorer overall",
        sql: "SELECT full_name, runs AS max_runs
              FROM players
              ORDER BY runs DESC, player_id
              LIMIT 1",
        columns: &["full_name", "max_runs"],
    },
    CatalogQuery {
        id: "Q6",
        title: "Last 20 completed matches",
        sql: "SELECT m.description,
                     t1.name AS team1,
                     t2.name AS team2,
                     w.name AS winner,
                     v.name AS venue,
                     m.date
              FROM matches m
              LEFT JOIN teams t1 ON m.team1_id = t1.team_id
              LEFT JOIN teams t2 ON m.team2_id = t2.team_id
              LEFT JOIN teams w ON m.winner_id = w.team_id
              LEFT JOIN venues v ON m.venue_id = v.venue_id
              ORDER BY date(m.date) DESC
              LIMIT 20",
        columns: &["description", "team1", "team2", "winner", "venue", "date"],
    },
    CatalogQuery {
        id: "Q7",
        title: "Player performance summary",
        sql: with_run_average!(
            "SELECT full_name, runs, matches, ",
            " AS avg_runs_per_match FROM players ORDER BY runs DESC LIMIT 20"
        ),
        columns: &["full_name", "runs", "matches", "avg_runs_per_match"],
    },
    CatalogQuery {
        id: "Q8",
        title: "Wins by team country",
        sql: "SELECT t.country, COUNT(*) AS total_wins
              FROM matches m
              JOIN teams t ON m.winner_id = t.team_id
              GROUP BY t.country
              ORDER BY total_wins DESC",
        columns: &["country", "total_wins"],
    },
    CatalogQuery {
        id: "Q9",
        title: "Top 20 players by runs (partnership proxy)",
        sql: "SELECT full_name, runs, matches
              FROM players
              ORDER BY runs DESC
              LIMIT 20",
        columns: &["full_name", "runs", "matches"],
    },
    CatalogQuery {
        id: "Q10",
        title: "Matches played per venue",
        sql: "SELECT v.name AS venue, v.city, COUNT(m.match_id) AS matches_played
              FROM matches m
              JOIN venues v ON m.venue_id = v.venue_id
              GROUP BY v.name, v.city
              ORDER BY matches_played DESC",
        columns: &["venue", "city", "matches_played"],
    },
    CatalogQuery {
        id: "Q11",
        title: "Last 10 matches (close match proxy)",
        sql: "SELECT m.description, m.date,
                     t1.name AS team1, t2.name AS team2,
                     w.name AS winner
              FROM matches m
              LEFT JOIN teams t1 ON m.team1_id = t1.team_id
              LEFT JOIN teams t2 ON m.team2_id = t2.team_id
              LEFT JOIN teams w ON m.winner_id = w.team_id
              ORDER BY date(m.date) DESC
              LIMIT 10",
        columns: &["description", "date", "team1", "team2", "winner"],
    },
    CatalogQuery {
        id: "Q12",
        title: "All players sorted by runs",
        sql: "SELECT full_name, runs, matches
              FROM players
              ORDER BY runs DESC",
        columns: &["full_name", "runs", "matches"],
    },
    CatalogQuery {
        id: "Q13",
        title: "Match wins by team (toss proxy)",
        sql: "SELECT t.name AS team_name, COUNT(*) AS total_wins
              FROM matches m
              JOIN teams t ON m.winner_id = t.team_id
              GROUP BY t.name
              ORDER BY total_wins DESC",
        columns: &["team_name", "total_wins"],
    },
    CatalogQuery {
        id: "Q14",
        title: "Top players by matches played",
        sql: "SELECT full_name, matches, runs
              FROM players
              ORDER BY matches DESC
              LIMIT 10",
        columns: &["full_name", "matches", "runs"],
    },
    CatalogQuery {
        id: "Q15",
        title: "Player runs per match (consistency proxy)",
        sql: with_run_average!(
            "SELECT full_name, runs, matches, ",
            " AS avg_runs_per_match FROM players ORDER BY avg_runs_per_match DESC LIMIT 15"
        ),
        columns: &["full_name", "runs", "matches", "avg_runs_per_match"],
    },
    CatalogQuery {
        id: "Q16",
        title: "Players sorted by matches played",
        sql: "SELECT full_name, matches, runs
              FROM players
              ORDER BY matches DESC
              LIMIT 20",
        columns: &["full_name", "matches", "runs"],
    },
    CatalogQuery {
        id: "Q17",
        title: "Player performance ranking",
        sql: "SELECT full_name, runs, matches,
                     (runs * 0.1 + matches * 0.5) AS performance_score
              FROM players
              ORDER BY performance_score DESC
              LIMIT 20",
        columns: &["full_name", "runs", "matches", "performance_score"],
    },
    CatalogQuery {
        id: "Q18",
        title: "Head-to-head team match counts",
        sql: "SELECT t1.name AS team1, t2.name AS team2, COUNT(*) AS matches_played
              FROM matches m
              JOIN teams t1 ON m.team1_id = t1.team_id
              JOIN teams t2 ON m.team2_id = t2.team_id
              GROUP BY t1.name, t2.name
              ORDER BY matches_played DESC
              LIMIT 20",
        columns: &["team1", "team2", "matches_played"],
    },
    CatalogQuery {
        id: "Q19",
        title: "Top 10 run scorers (form proxy)",
        sql: "SELECT full_name, runs, matches
              FROM players
              ORDER BY runs DESC
              LIMIT 10",
        columns: &["full_name", "runs", "matches"],
    },
    CatalogQuery {
        id: "Q20",
        title: "Top 10 players by runs (partnership proxy)",
        sql: "SELECT full_name, runs, matches
              FROM players
              ORDER BY runs DESC
              LIMIT 10",
        columns: &["full_name", "runs", "matches"],
    },
    CatalogQuery {
        id: "Q21",
        title: "Player career progression (proxy by matches)",
        sql: "SELECT full_name, runs, matches
              FROM players
              ORDER BY matches DESC
              LIMIT 20",
        columns: &["full_name", "runs", "matches"],
    },
    CatalogQuery {
        id: "A1",
        title: "Players by role",
        sql: "SELECT role, COUNT(*) AS role_count
              FROM players
              GROUP BY role
              ORDER BY role_count DESC",
        columns: &["role", "role_count"],
    },
    CatalogQuery {
        id: "A2",
        title: "Top teams by player count",
        sql: "SELECT t.name AS team_name, COUNT(p.player_id) AS player_count
              FROM players p
              JOIN teams t ON p.team_id = t.team_id
              GROUP BY t.name
              ORDER BY player_count DESC
              LIMIT 5",
        columns: &["team_name", "player_count"],
    },
    CatalogQuery {
        id: "A3",
        title: "Matches per year",
        sql: "SELECT CAST(strftime('%Y', date) AS INTEGER) AS year, COUNT(*) AS match_count
              FROM matches
              WHERE strftime('%Y', date) IS NOT NULL
              GROUP BY year
              ORDER BY year",
        columns: &["year", "match_count"],
    },
    CatalogQuery {
        id: "A4",
        title: "Top venues by number of matches",
        sql: "SELECT v.name AS venue, v.city, v.country, COUNT(m.match_id) AS match_count
              FROM matches m
              JOIN venues v ON m.venue_id = v.venue_id
              GROUP BY v.name, v.city, v.country
              ORDER BY match_count DESC
              LIMIT 5",
        columns: &["venue", "city", "country", "match_count"],
    },
];

/// Look up a catalog entry by id, ignoring case (`q2` finds `Q2`).
pub fn find_query(id: &str) -> Option<&'static CatalogQuery> {
    let id = id.trim();
    CATALOG.iter().find(|q| q.id.eq_ignore_ascii_case(id))
}

/// A single SQLite cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Integer(i) => CellValue::Integer(i),
            Value::Real(f) => CellValue::Real(f),
            Value::Text(s) => CellValue::Text(s),
            Value::Blob(b) => CellValue::Blob(b),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Real(r) => write!(f, "{}", r),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Blob(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

/// Columns and rows returned by a query, in result order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Value of `column` in row `index`
    pub fn get(&self, index: usize, column: &str) -> Option<&CellValue> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(index)?.get(col)
    }

    /// Rows as JSON objects keyed by column name
    pub fn to_records(&self) -> Vec<Map<String, JsonValue>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(col, cell)| {
                        let value = serde_json::to_value(cell).unwrap_or(JsonValue::Null);
                        (col.clone(), value)
                    })
                    .collect()
            })
            .collect()
    }
}

impl Tabular for QueryResult {
    fn headers(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }
}

impl CricketDatabase {
    /// Run one catalog entry
    pub fn run_query(&self, query: &CatalogQuery) -> Result<QueryResult> {
        debug!(id = query.id, "running catalog query");
        self.run_sql(query.sql)
    }

    /// Run every catalog entry independently, in catalog order.
    pub fn run_catalog(&self) -> Vec<(&'static CatalogQuery, Result<QueryResult>)> {
        CATALOG
            .iter()
            .map(|query| {
                let result = self.run_query(query);
                if let Err(e) = &result {
                    warn!(id = query.id, error = %e, "catalog query failed");
                }
                (query, result)
            })
            .collect()
    }

    /// Execute a read-only statement and collect its rows generically.
    pub(crate) fn run_sql(&self, sql: &str) -> Result<QueryResult> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let width = columns.len();

        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(width);
            for i in 0..width {
                cells.push(CellValue::from(row.get::<_, Value>(i)?));
            }
            out.push(cells);
        }

        Ok(QueryResult { columns, rows: out })
    }
}
