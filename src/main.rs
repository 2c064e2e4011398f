//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use cricket_stats::{
    cli::{Commands, CricketCli},
    commands::{
        analytics::handle_analytics,
        browse::{handle_matches, handle_teams, handle_venues},
        db_setup::handle_db,
        live::handle_live,
        players::handle_players,
    },
    core::{config::resolve_db_path, LiveApiConfig, LoggingConfig},
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real env vars still apply.
    let _ = dotenvy::dotenv();

    let app = CricketCli::parse();
    LoggingConfig::new(&app.log_level, &app.log_format).init();

    let db_path = resolve_db_path(app.db);
    tracing::debug!(path = %db_path.display(), "using database");

    match app.command {
        Commands::Db { cmd } => handle_db(&db_path, cmd).context("database setup failed")?,

        Commands::Players { cmd } => {
            handle_players(&db_path, cmd).context("player command failed")?
        }

        Commands::Teams { output } => handle_teams(&db_path, &output).context("listing teams failed")?,

        Commands::Venues { output } => {
            handle_venues(&db_path, &output).context("listing venues failed")?
        }

        Commands::Matches { from, to, output } => {
            let window = from.zip(to);
            handle_matches(&db_path, window, &output).context("listing matches failed")?
        }

        Commands::Analytics { cmd } => {
            handle_analytics(&db_path, cmd).context("analytics command failed")?
        }

        Commands::Live { cmd } => {
            let config = LiveApiConfig::from_env()?;
            handle_live(&config, cmd)
                .await
                .context("live API request failed")?
        }
    }

    Ok(())
}
