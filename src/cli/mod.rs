//! CLI argument definitions and parsing.

pub mod args;
pub mod types;

pub use args::{
    AnalyticsCmd, Commands, CricketCli, DbCmd, LiveCmd, OutputArgs, PlayerFields, PlayersCmd,
};
