//! Live API commands

use super::common::emit_output;
use crate::{
    cli::{LiveCmd, OutputArgs},
    core::config::LiveApiConfig,
    live::{detail_headline, flatten_matches, LiveClient, MatchFeed, MatchesResponse},
    MatchId, Result,
};

/// Handle `live <cmd>`
pub async fn handle_live(config: &LiveApiConfig, cmd: LiveCmd) -> Result<()> {
    let client = LiveClient::new(config)?;
    match cmd {
        LiveCmd::Matches { feed, output } => handle_live_matches(&client, feed, &output).await,
        LiveCmd::Detail { match_id } => handle_live_detail(&client, match_id).await,
    }
}

pub async fn handle_live_matches(
    client: &LiveClient,
    feed: MatchFeed,
    output: &OutputArgs,
) -> Result<()> {
    // tarpaulin::skip - HTTP call, tested via the client tests
    let raw = client.get_matches(feed).await?;
    let response: MatchesResponse = serde_json::from_value(raw)?;
    let rows = flatten_matches(&response);

    if rows.is_empty() && !output.json {
        println!("No {} matches returned by API.", feed);
        return Ok(());
    }

    emit_output(&rows, output, || Ok(serde_json::to_string_pretty(&rows)?))
}

pub async fn handle_live_detail(client: &LiveClient, match_id: MatchId) -> Result<()> {
    // tarpaulin::skip - HTTP call, tested via the client tests
    let detail = client.get_match_detail(match_id).await?;

    if let Some(headline) = detail_headline(&detail) {
        println!("{}", headline);
    }
    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}
