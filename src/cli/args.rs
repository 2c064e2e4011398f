//! CLI argument definitions and parsing structures.

use super::types::{ids::MatchId, ids::PlayerId, ids::TeamId, role::Role};
use crate::live::MatchFeed;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Output options shared by listing commands
#[derive(Debug, Args, Default)]
pub struct OutputArgs {
    /// Output results as JSON instead of a text table.
    #[clap(long)]
    pub json: bool,

    /// Also write the results as CSV to this file.
    #[clap(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,
}

/// Fields edited by `players add` and `players update`
#[derive(Debug, Args)]
pub struct PlayerFields {
    /// Full name of the player.
    #[clap(long, short)]
    pub name: String,

    /// Batsman | Bowler | Allrounder | Wicketkeeper
    #[clap(long, short)]
    pub role: Role,

    /// Team ID (from the teams table).
    #[clap(long, short)]
    pub team_id: TeamId,
}

#[derive(Debug, Parser)]
#[clap(name = "cricket-stats", about = "Cricket statistics dashboard CLI")]
pub struct CricketCli {
    /// Database file (or set `CRICKET_STATS_DB`).
    #[clap(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log level when `RUST_LOG` is not set.
    #[clap(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log format: pretty | json
    #[clap(long, global = true, default_value = "pretty")]
    pub log_format: String,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create, seed and inspect the database
    Db {
        #[clap(subcommand)]
        cmd: DbCmd,
    },

    /// Browse and edit players
    Players {
        #[clap(subcommand)]
        cmd: PlayersCmd,
    },

    /// List teams
    Teams {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// List venues
    Venues {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// List matches, optionally inside a date window
    Matches {
        /// First day of the window (YYYY-MM-DD).
        #[clap(long, requires = "to")]
        from: Option<NaiveDate>,

        /// Last day of the window (YYYY-MM-DD).
        #[clap(long, requires = "from")]
        to: Option<NaiveDate>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Run the analytics query catalog
    Analytics {
        #[clap(subcommand)]
        cmd: AnalyticsCmd,
    },

    /// Fetch data from the live cricket API
    Live {
        #[clap(subcommand)]
        cmd: LiveCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum DbCmd {
    /// Create the tables if they do not exist
    Init,
    /// Insert the sample teams, players, venue and match
    Seed,
    /// List the tables present in the database
    Tables,
    /// Print every table
    Show,
}

#[derive(Debug, Subcommand)]
pub enum PlayersCmd {
    /// List all players
    List {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Show a single player
    Show {
        #[clap(long)]
        id: PlayerId,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Add a player
    Add {
        #[clap(flatten)]
        fields: PlayerFields,
    },

    /// Replace name, role and team of a player
    Update {
        #[clap(long)]
        id: PlayerId,

        #[clap(flatten)]
        fields: PlayerFields,
    },

    /// Delete a player
    Delete {
        #[clap(long)]
        id: PlayerId,
    },

    /// Set a player's matches and runs
    Stats {
        #[clap(long)]
        id: PlayerId,

        #[clap(long)]
        matches: u32,

        #[clap(long)]
        runs: u32,
    },
}

#[derive(Debug, Subcommand)]
pub enum AnalyticsCmd {
    /// List the available queries
    List,

    /// Run one query by ID (e.g. Q2, A3)
    Run {
        id: String,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Run every query, reporting failures individually
    RunAll,

    /// Row counts of teams, players, venues and matches
    Kpis {
        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum LiveCmd {
    /// Recent or live matches as a flat table
    Matches {
        /// recent | live
        #[clap(long, default_value_t = MatchFeed::Recent)]
        feed: MatchFeed,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Raw match-center JSON for one match
    Detail { match_id: MatchId },
}
