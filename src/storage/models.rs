//! Data models for the storage layer

use crate::cli::types::{MatchId, PlayerId, TeamId, VenueId};
use crate::core::export::{opt_cell, TableRow};
use serde::{Deserialize, Serialize};

/// A row of the `teams` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
    pub country: Option<String>,
}

/// A row of the `players` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub full_name: String,
    pub role: Option<String>,
    pub batting_style: Option<String>,
    pub bowling_style: Option<String>,
    pub team_id: Option<TeamId>,
    pub matches: u32,
    pub runs: u32,
}

impl Player {
    /// Runs per match rounded to two places, `None` before a first match
    pub fn average(&self) -> Option<f64> {
        if self.matches == 0 {
            None
        } else {
            Some((self.runs as f64 / self.matches as f64 * 100.0).round() / 100.0)
        }
    }
}

/// A row of the `venues` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub venue_id: VenueId,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub capacity: Option<u32>,
}

/// A row of the `matches` table. Every reference is nullable and unchecked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub match_id: MatchId,
    pub description: Option<String>,
    pub team1_id: Option<TeamId>,
    pub team2_id: Option<TeamId>,
    pub venue_id: Option<VenueId>,
    pub date: Option<String>, // ISO YYYY-MM-DD, stored as text
    pub winner_id: Option<TeamId>,
}

/// Row counts for the dashboard KPI line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub teams: u32,
    pub players: u32,
    pub venues: u32,
    pub matches: u32,
}

impl TableRow for Team {
    fn headers() -> &'static [&'static str] {
        &["team_id", "name", "country"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.team_id.to_string(),
            self.name.clone(),
            opt_cell(&self.country),
        ]
    }
}

impl TableRow for Player {
    fn headers() -> &'static [&'static str] {
        &[
            "player_id",
            "full_name",
            "role",
            "batting_style",
            "bowling_style",
            "team_id",
            "matches",
            "runs",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.player_id.to_string(),
            self.full_name.clone(),
            opt_cell(&self.role),
            opt_cell(&self.batting_style),
            opt_cell(&self.bowling_style),
            opt_cell(&self.team_id),
            self.matches.to_string(),
            self.runs.to_string(),
        ]
    }
}

impl TableRow for Venue {
    fn headers() -> &'static [&'static str] {
        &["venue_id", "name", "city", "country", "capacity"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.venue_id.to_string(),
            self.name.clone(),
            opt_cell(&self.city),
            opt_cell(&self.country),
            opt_cell(&self.capacity),
        ]
    }
}

impl TableRow for Match {
    fn headers() -> &'static [&'static str] {
        &[
            "match_id",
            "description",
            "team1_id",
            "team2_id",
            "venue_id",
            "date",
            "winner_id",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.match_id.to_string(),
            opt_cell(&self.description),
            opt_cell(&self.team1_id),
            opt_cell(&self.team2_id),
            opt_cell(&self.venue_id),
            opt_cell(&self.date),
            opt_cell(&self.winner_id),
        ]
    }
}
