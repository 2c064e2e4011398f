//! Runtime configuration: database location and live API credentials.
//!
//! Everything here is resolved once in `main` and passed down explicitly.

use crate::error::{CricketError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Overrides the database file location.
pub const DB_PATH_ENV_VAR: &str = "CRICKET_STATS_DB";
/// RapidAPI key sent as `x-rapidapi-key`.
pub const API_KEY_ENV_VAR: &str = "RAPID_API_KEY";
/// RapidAPI host sent as `x-rapidapi-host` and used for the base URL.
pub const API_HOST_ENV_VAR: &str = "RAPID_API_HOST";

pub const DEFAULT_API_HOST: &str = "cricbuzz-cricket.p.rapidapi.com";
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(10);

const APP_DIR: &str = "cricket-stats";
const DB_FILE_NAME: &str = "cricbuzz.db";

/// Directory holding the database file.
///
/// Path: `<data_local_dir>/cricket-stats/data`, or `./data` when the platform
/// has no data directory.
pub fn default_data_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(base) => base.join(APP_DIR).join("data"),
        None => PathBuf::from("data"),
    }
}

/// Default database file inside [`default_data_dir`].
pub fn default_db_path() -> PathBuf {
    default_data_dir().join(DB_FILE_NAME)
}

/// Resolve the database path from the CLI flag, then `CRICKET_STATS_DB`,
/// then the default location.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    resolve_db_path_with(explicit, |key| std::env::var(key).ok())
}

pub fn resolve_db_path_with<F>(explicit: Option<PathBuf>, lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .or_else(|| {
            lookup(DB_PATH_ENV_VAR)
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(default_db_path)
}

/// Credentials and transport settings for the live cricket API.
#[derive(Debug, Clone)]
pub struct LiveApiConfig {
    pub api_key: String,
    pub host: String,
    pub timeout: Duration,
}

impl LiveApiConfig {
    /// Read `RAPID_API_KEY` (required) and `RAPID_API_HOST` (optional).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CricketError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            })?;

        let host = lookup(API_HOST_ENV_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string());

        Ok(Self {
            api_key,
            host,
            timeout: DEFAULT_API_TIMEOUT,
        })
    }

    pub fn base_url(&self) -> String {
        format!("https://{}", self.host)
    }
}
