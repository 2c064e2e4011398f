//! Fixed sample data for a fresh database

use super::schema::CricketDatabase;
use crate::error::Result;
use rusqlite::params;
use tracing::info;

type TeamSeed = (u32, &'static str, &'static str);
type PlayerSeed = (u32, &'static str, &'static str, &'static str, &'static str, u32);
type VenueSeed = (u32, &'static str, &'static str, &'static str, u32);
type MatchSeed = (u32, &'static str, u32, u32, u32, &'static str, u32);

const SEED_TEAMS: &[TeamSeed] = &[(1, "India", "India"), (2, "Australia", "Australia")];

const SEED_PLAYERS: &[PlayerSeed] = &[
    (1, "Virat Kohli", "Batsman", "Right-hand bat", "Right-arm medium", 1),
    (2, "Steve Smith", "Batsman", "Right-hand bat", "Right-arm legbreak", 2),
];

const SEED_VENUES: &[VenueSeed] = &[(1, "Wankhede Stadium", "Mumbai", "India", 33000)];

const SEED_MATCHES: &[MatchSeed] = &[(1001, "India vs Australia Test", 1, 2, 1, "2025-01-01", 1)];

impl CricketDatabase {
    /// Insert the sample teams, players, venue and match.
    ///
    /// Rows whose primary key already exists are skipped, never overwritten,
    /// so re-running is harmless.
    pub fn seed_sample_data(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0usize;

        for (id, name, country) in SEED_TEAMS {
            inserted += tx.execute(
                "INSERT OR IGNORE INTO teams (team_id, name, country) VALUES (?, ?, ?)",
                params![id, name, country],
            )?;
        }

        for (id, name, role, batting, bowling, team_id) in SEED_PLAYERS {
            inserted += tx.execute(
                "INSERT OR IGNORE INTO players
                 (player_id, full_name, role, batting_style, bowling_style, team_id)
                 VALUES (?, ?, ?, ?, ?, ?)",
                params![id, name, role, batting, bowling, team_id],
            )?;
        }

        for (id, name, city, country, capacity) in SEED_VENUES {
            inserted += tx.execute(
                "INSERT OR IGNORE INTO venues (venue_id, name, city, country, capacity)
                 VALUES (?, ?, ?, ?, ?)",
                params![id, name, city, country, capacity],
            )?;
        }

        for (id, description, team1, team2, venue, date, winner) in SEED_MATCHES {
            inserted += tx.execute(
                "INSERT OR IGNORE INTO matches
                 (match_id, description, team1_id, team2_id, venue_id, date, winner_id)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
                params![id, description, team1, team2, venue, date, winner],
            )?;
        }

        tx.commit()?;
        info!(inserted, "sample data seeded");
        Ok(())
    }
}
