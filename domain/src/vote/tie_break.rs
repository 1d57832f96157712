//! Tie-break rules for plurality votes

use serde::{Deserialize, Serialize};

/// How to pick a winner when several targets share the highest count
///
/// - `Lexicographic`: the lowest name wins (default)
/// - `FirstCast`: the target whose first vote came earliest in ballot order
///
/// Both rules are pure functions of the ballot, so resolving the same ballot
/// twice always yields the same target.
///
/// # Example
///
/// ```
/// use werewolf_domain::vote::TieBreak;
///
/// assert_eq!("lexicographic".parse::<TieBreak>().ok(), Some(TieBreak::Lexicographic));
/// assert_eq!("first_cast".parse::<TieBreak>().ok(), Some(TieBreak::FirstCast));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    #[default]
    Lexicographic,
    FirstCast,
}

impl TieBreak {
    pub fn description(&self) -> &'static str {
        match self {
            TieBreak::Lexicographic => "lowest name among tied targets",
            TieBreak::FirstCast => "earliest-voted among tied targets",
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "lexicographic" | "lowest_name" => Ok(TieBreak::Lexicographic),
            "first_cast" | "first" => Ok(TieBreak::FirstCast),
            other => Err(format!(
                "Unknown tie-break rule: {}. Valid: lexicographic, first_cast",
                other
            )),
        }
    }
}
