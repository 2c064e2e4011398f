//! Error types for the cricket stats CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, CricketError>;

#[derive(Error, Debug)]
pub enum CricketError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API error {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("API key not provided: set the {env_var} environment variable")]
    MissingApiKey { env_var: String },

    #[error("Invalid ID: {value}")]
    InvalidId { value: String },

    #[error("Invalid role: {role} (expected Batsman, Bowler, Allrounder or Wicketkeeper)")]
    InvalidRole { role: String },

    #[error("Player name must not be empty")]
    InvalidPlayerName,

    #[error("Invalid team ID: {id} (must be a positive integer)")]
    InvalidTeamId { id: u32 },

    #[error("Row id {value} is outside the supported range")]
    IdOutOfRange { value: i64 },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: u32 },

    #[error("Unknown query: {id}")]
    UnknownQuery { id: String },
}
