//! Terminal game records

use crate::player::{Faction, Role, Roster};
use serde::{Deserialize, Serialize};

/// Winner of a game, as recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Werewolves,
    Villagers,
    /// The game failed before reaching an end
    Unknown,
}

impl Winner {
    pub fn faction(&self) -> Option<Faction> {
        match self {
            Winner::Werewolves => Some(Faction::Werewolves),
            Winner::Villagers => Some(Faction::Villagers),
            Winner::Unknown => None,
        }
    }
}

impl From<Faction> for Winner {
    fn from(faction: Faction) -> Self {
        match faction {
            Faction::Werewolves => Winner::Werewolves,
            Faction::Villagers => Winner::Villagers,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Winner::Werewolves => "werewolves",
            Winner::Villagers => "villagers",
            Winner::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// How one player fared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerOutcome {
    pub name: String,
    pub role: Role,
    pub survived: bool,
    pub rounds_survived: u32,
}

/// The record of one finished (or failed) game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub game_id: u32,
    pub winner: Winner,
    pub total_rounds: u32,
    pub players: Vec<PlayerOutcome>,
    /// RFC 3339 timestamp of when the result was written
    pub timestamp: String,
    #[serde(default)]
    pub failed: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl GameResult {
    /// Record a game that reached a winner
    pub fn completed(
        game_id: u32,
        winner: Faction,
        total_rounds: u32,
        roster: &Roster,
        timestamp: impl Into<String>,
    ) -> Self {
        let players = roster
            .players()
            .iter()
            .map(|p| PlayerOutcome {
                name: p.name().to_string(),
                role: p.role(),
                survived: p.is_alive(),
                rounds_survived: p.rounds_survived(total_rounds),
            })
            .collect();

        Self {
            game_id,
            winner: winner.into(),
            total_rounds,
            players,
            timestamp: timestamp.into(),
            failed: false,
            error_message: None,
        }
    }

    /// Record a game that aborted with an error
    pub fn failed(game_id: u32, error: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            game_id,
            winner: Winner::Unknown,
            total_rounds: 0,
            players: Vec::new(),
            timestamp: timestamp.into(),
            failed: true,
            error_message: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        !self.failed
    }

    /// Whether `role` was on the winning side in this game
    pub fn role_won(&self, role: Role) -> bool {
        self.winner.faction() == Some(role.faction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    #[test]
    fn test_completed_records_every_player() {
        let mut roster = Roster::new(vec![
            Player::new("Alice", Role::Villager),
            Player::new("Bob", Role::Werewolf),
            Player::new("Carol", Role::Seer),
        ])
        .unwrap();
        roster.commit_deaths(&["Bob".to_string()], 2);

        let result = GameResult::completed(7, Faction::Villagers, 2, &roster, "2026-01-01T00:00:00Z");
        assert_eq!(result.winner, Winner::Villagers);
        assert_eq!(result.players.len(), 3);

        let bob = result.players.iter().find(|p| p.name == "Bob").unwrap();
        assert!(!bob.survived);
        assert_eq!(bob.rounds_survived, 2);
        assert!(result.role_won(Role::Seer));
        assert!(!result.role_won(Role::Werewolf));
    }

    #[test]
    fn test_failed_result() {
        let result = GameResult::failed(3, "model timed out", "2026-01-01T00:00:00Z");
        assert!(result.failed);
        assert_eq!(result.winner, Winner::Unknown);
        assert_eq!(result.total_rounds, 0);
        assert!(result.players.is_empty());
        assert!(!result.role_won(Role::Villager));
    }

    #[test]
    fn test_json_field_names() {
        let result = GameResult::failed(1, "boom", "t");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["winner"], "unknown");
        assert_eq!(json["error_message"], "boom");
        assert_eq!(json["total_rounds"], 0);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"game_id":1,"winner":"werewolves","total_rounds":4,
            "players":[{"name":"A","role":"werewolf","survived":true,"rounds_survived":4}],
            "timestamp":"t"}"#;
        let result: GameResult = serde_json::from_str(json).unwrap();
        assert!(!result.failed);
        assert!(result.error_message.is_none());
        assert_eq!(result.players[0].role, Role::Werewolf);
    }
}
