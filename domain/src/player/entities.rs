//! Player entity

use super::role::{Faction, Role};
use serde::{Deserialize, Serialize};

/// A seat at the table (Entity)
///
/// The role never changes. The alive flag flips at most once; there is no
/// way back from death.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    role: Role,
    alive: bool,
    died_in_round: Option<u32>,
}

impl Player {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            alive: true,
            died_in_round: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn faction(&self) -> Faction {
        self.role.faction()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn died_in_round(&self) -> Option<u32> {
        self.died_in_round
    }

    /// Mark the player dead in `round`.
    ///
    /// Returns `false` (and changes nothing) if the player was already dead.
    pub fn kill(&mut self, round: u32) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        self.died_in_round = Some(round);
        true
    }

    /// Rounds this player took part in, given how many rounds the game lasted.
    ///
    /// A dead player counts up to the round of death; a survivor counts every
    /// round played.
    pub fn rounds_survived(&self, total_rounds: u32) -> u32 {
        match self.died_in_round {
            Some(round) => round.min(total_rounds),
            None => total_rounds,
        }
    }
}
