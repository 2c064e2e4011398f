//! Type-safe wrappers and enums for cricket data.

pub mod ids;
pub mod role;

pub use ids::{MatchId, PlayerId, TeamId, VenueId};
pub use role::Role;
