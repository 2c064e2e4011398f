//! HTTP client for the Cricbuzz live-cricket API (via RapidAPI)

use crate::cli::types::MatchId;
use crate::core::config::LiveApiConfig;
use crate::error::{CricketError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;


const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Which match listing to request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchFeed {
    #[default]
    Recent,
    Live,
}

impl MatchFeed {
    pub fn path(&self) -> &'static str {
        match self {
            MatchFeed::Recent => "/matches/v1/recent",
            MatchFeed::Live => "/matches/v1/live",
        }
    }
}

impl fmt::Display for MatchFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchFeed::Recent => write!(f, "recent"),
            MatchFeed::Live => write!(f, "live"),
        }
    }
}

impl FromStr for MatchFeed {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recent" => Ok(MatchFeed::Recent),
            "live" => Ok(MatchFeed::Live),
            other => Err(format!("unknown feed '{}' (expected recent or live)", other)),
        }
    }
}

/// Build the two RapidAPI credential headers.
pub fn rapidapi_headers(config: &LiveApiConfig) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(API_KEY_HEADER, HeaderValue::from_str(&config.api_key)?);
    h.insert(API_HOST_HEADER, HeaderValue::from_str(&config.host)?);
    Ok(h)
}

/// One GET per call, fixed timeout, no retry.
#[derive(Debug, Clone)]
pub struct LiveClient {
    client: Client,
    base_url: String,
}

impl LiveClient {
    pub fn new(config: &LiveApiConfig) -> Result<Self> {
        Self::with_base_url(config, config.base_url())
    }

    /// Same as [`Self::new`] but against an arbitrary base URL.
    pub fn with_base_url(config: &LiveApiConfig, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .default_headers(rapidapi_headers(config)?)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Raw JSON of the recent or live match listing.
    pub async fn get_matches(&self, feed: MatchFeed) -> Result<Value> {
        self.get_json(feed.path()).await
    }

    /// Raw match-center JSON for one match, passed through unmodified.
    pub async fn get_match_detail(&self, match_id: MatchId) -> Result<Value> {
        self.get_json(&format!("/mcenter/v1/{}", match_id)).await
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let res = self.client.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(CricketError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(res.json::<Value>().await?)
    }
}
