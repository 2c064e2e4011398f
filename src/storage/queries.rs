//! Basic CRUD operations

use super::{models::*, schema::CricketDatabase};
use crate::cli::types::{MatchId, PlayerId, TeamId, VenueId};
use crate::error::{CricketError, Result};
use chrono::NaiveDate;
use rusqlite::{params, Row};
use tracing::{debug, info};

const PLAYER_COLUMNS: &str =
    "player_id, full_name, role, batting_style, bowling_style, team_id, matches, runs";

const MATCH_COLUMNS: &str =
    "match_id, description, team1_id, team2_id, venue_id, date, winner_id";

impl CricketDatabase {
    /// All players in storage order
    pub fn list_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players ORDER BY rowid"
        ))?;

        let rows = stmt.query_map([], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        debug!(count = players.len(), "listed players");
        Ok(players)
    }

    /// Get a single player by primary key
    pub fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE player_id = ?"
        ))?;

        match stmt.query_row(params![player_id.as_u32()], row_to_player) {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Insert a new player and return the assigned id.
    ///
    /// The name must be non-blank and the team id positive; the name is stored
    /// as given. Neither the role nor the team's existence is checked. An id
    /// beyond the `u32` range is refused and nothing is written.
    pub fn insert_player(
        &mut self,
        full_name: &str,
        role: &str,
        team_id: TeamId,
    ) -> Result<PlayerId> {
        if full_name.trim().is_empty() {
            return Err(CricketError::InvalidPlayerName);
        }
        if team_id.as_u32() == 0 {
            return Err(CricketError::InvalidTeamId {
                id: team_id.as_u32(),
            });
        }

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO players (full_name, role, team_id) VALUES (?, ?, ?)",
            params![full_name, role, team_id.as_u32()],
        )?;
        let rowid = tx.last_insert_rowid();
        // Dropping the uncommitted transaction rolls the insert back.
        let id = u32::try_from(rowid).map_err(|_| CricketError::IdOutOfRange { value: rowid })?;
        tx.commit()?;

        let player_id = PlayerId::new(id);
        info!(%player_id, full_name, role, %team_id, "player inserted");
        Ok(player_id)
    }

    /// Replace name, role and team of a player.
    ///
    /// Returns the number of rows changed; an unknown id yields `Ok(0)`.
    pub fn update_player(
        &mut self,
        player_id: PlayerId,
        full_name: &str,
        role: &str,
        team_id: TeamId,
    ) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let rows_affected = tx.execute(
            "UPDATE players SET full_name = ?, role = ?, team_id = ? WHERE player_id = ?",
            params![full_name, role, team_id.as_u32(), player_id.as_u32()],
        )?;
        tx.commit()?;

        info!(%player_id, rows_affected, "player updated");
        Ok(rows_affected)
    }

    /// Delete a player; an unknown id yields `Ok(0)`.
    pub fn delete_player(&mut self, player_id: PlayerId) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let rows_affected = tx.execute(
            "DELETE FROM players WHERE player_id = ?",
            params![player_id.as_u32()],
        )?;
        tx.commit()?;

        info!(%player_id, rows_affected, "player deleted");
        Ok(rows_affected)
    }

    /// Overwrite a player's aggregate counters.
    ///
    /// Values are taken as given; nothing reconciles them with match rows.
    pub fn update_player_stats(
        &mut self,
        player_id: PlayerId,
        matches: u32,
        runs: u32,
    ) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let rows_affected = tx.execute(
            "UPDATE players SET matches = ?, runs = ? WHERE player_id = ?",
            params![matches, runs, player_id.as_u32()],
        )?;
        tx.commit()?;

        info!(%player_id, matches, runs, rows_affected, "player stats updated");
        Ok(rows_affected)
    }

    /// All teams in storage order
    pub fn list_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT team_id, name, country FROM teams ORDER BY rowid")?;

        let rows = stmt.query_map([], |row| {
            Ok(Team {
                team_id: TeamId::new(row.get(0)?),
                name: row.get(1)?,
                country: row.get(2)?,
            })
        })?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// All venues in storage order
    pub fn list_venues(&self) -> Result<Vec<Venue>> {
        let mut stmt = self.conn.prepare(
            "SELECT venue_id, name, city, country, capacity FROM venues ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Venue {
                venue_id: VenueId::new(row.get(0)?),
                name: row.get(1)?,
                city: row.get(2)?,
                country: row.get(3)?,
                capacity: row.get(4)?,
            })
        })?;

        let mut venues = Vec::new();
        for row in rows {
            venues.push(row?);
        }
        Ok(venues)
    }

    /// All matches in storage order
    pub fn list_matches(&self) -> Result<Vec<Match>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches ORDER BY rowid"
        ))?;

        let rows = stmt.query_map([], row_to_match)?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        Ok(matches)
    }

    /// Matches dated within `[start, end]`, oldest first.
    ///
    /// Rows whose date SQLite cannot parse are left out.
    pub fn matches_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Match>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches
             WHERE date(date) IS NOT NULL
               AND date(date) BETWEEN date(?) AND date(?)
             ORDER BY date(date), match_id"
        ))?;

        let rows = stmt.query_map(
            params![
                start.format("%Y-%m-%d").to_string(),
                end.format("%Y-%m-%d").to_string()
            ],
            row_to_match,
        )?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        Ok(matches)
    }

    /// Row counts of the four tables
    pub fn table_counts(&self) -> Result<TableCounts> {
        let count = |table: &str| -> Result<u32> {
            let n: u32 = self
                .conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })?;
            Ok(n)
        };

        Ok(TableCounts {
            teams: count("teams")?,
            players: count("players")?,
            venues: count("venues")?,
            matches: count("matches")?,
        })
    }
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    Ok(Player {
        player_id: PlayerId::new(row.get(0)?),
        full_name: row.get(1)?,
        role: row.get(2)?,
        batting_style: row.get(3)?,
        bowling_style: row.get(4)?,
        team_id: row.get::<_, Option<u32>>(5)?.map(TeamId::new),
        matches: row.get(6)?,
        runs: row.get(7)?,
    })
}

fn row_to_match(row: &Row) -> rusqlite::Result<Match> {
    Ok(Match {
        match_id: MatchId::new(row.get(0)?),
        description: row.get(1)?,
        team1_id: row.get::<_, Option<u32>>(2)?.map(TeamId::new),
        team2_id: row.get::<_, Option<u32>>(3)?.map(TeamId::new),
        venue_id: row.get::<_, Option<u32>>(4)?.map(VenueId::new),
        date: row.get(5)?,
        winner_id: row.get::<_, Option<u32>>(6)?.map(TeamId::new),
    })
}
