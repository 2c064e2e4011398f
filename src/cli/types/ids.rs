//! ID types for the cricket database tables.

use crate::error::{CricketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a `u32` primary-key wrapper with the usual conversions.
macro_rules! table_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub fn new(id: u32) -> Self {
                Self(id)
            }

            pub fn as_u32(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = CricketError;

            fn from_str(s: &str) -> Result<Self> {
                s.trim()
                    .parse::<u32>()
                    .map(Self)
                    .map_err(|_| CricketError::InvalidId {
                        value: s.to_string(),
                    })
            }
        }
    };
}

table_id!(
    /// Type-safe wrapper for `players.player_id`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cricket_stats::PlayerId;
    ///
    /// let id = PlayerId::new(7);
    /// assert_eq!(id.as_u32(), 7);
    /// assert_eq!(id.to_string(), "7");
    /// ```
    PlayerId
);

table_id!(
    /// Type-safe wrapper for `teams.team_id`.
    TeamId
);

table_id!(
    /// Type-safe wrapper for `venues.venue_id`.
    VenueId
);

table_id!(
    /// Type-safe wrapper for `matches.match_id`.
    MatchId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_roundtrip_display() {
        let id: PlayerId = "42".parse().unwrap();
        assert_eq!(id, PlayerId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_team_id_rejects_negative() {
        let result = "-1".parse::<TeamId>();
        assert!(matches!(result, Err(CricketError::InvalidId { .. })));
    }

    #[test]
    fn test_match_id_trims_whitespace() {
        assert_eq!(" 1001 ".parse::<MatchId>().unwrap().as_u32(), 1001);
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&VenueId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
