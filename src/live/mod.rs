//! Live cricket data from the Cricbuzz API
//!
//! - `http`: authenticated GET requests with a fixed timeout
//! - `types`: response shapes and flattening into display rows

pub mod http;
pub mod types;

pub use http::{LiveClient, MatchFeed};
pub use types::{detail_headline, flatten_matches, MatchSummary, MatchesResponse};
