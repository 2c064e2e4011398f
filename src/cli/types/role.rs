//! Player role choices offered by the CLI.

use crate::error::CricketError;
use std::fmt;
use std::str::FromStr;

/// Playing role of a cricketer.
///
/// The database stores roles as free text and never checks membership; this
/// enum only constrains what the `players add` / `players update` commands
/// accept, the same way a select box would.
///
/// # Examples
///
/// ```rust
/// use cricket_stats::Role;
///
/// let role: Role = "wicket-keeper".parse().unwrap();
/// assert_eq!(role, Role::Wicketkeeper);
/// assert_eq!(role.to_string(), "Wicketkeeper");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Batsman,
    Bowler,
    Allrounder,
    Wicketkeeper,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Batsman,
        Role::Bowler,
        Role::Allrounder,
        Role::Wicketkeeper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::Allrounder => "Allrounder",
            Role::Wicketkeeper => "Wicketkeeper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = CricketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "batsman" | "batter" | "bat" => Ok(Role::Batsman),
            "bowler" | "bowl" => Ok(Role::Bowler),
            "allrounder" | "ar" => Ok(Role::Allrounder),
            "wicketkeeper" | "keeper" | "wk" => Ok(Role::Wicketkeeper),
            _ => Err(CricketError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}
