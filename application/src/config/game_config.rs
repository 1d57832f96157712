//! Game parameters: use case loop control and role composition.

use serde::{Deserialize, Serialize};
use werewolf_domain::{Role, TieBreak};

/// Parameters of one game.
///
/// Built by the CLI from the merged file configuration and handed to
/// [`RunGameUseCase`](crate::use_cases::run_game::RunGameUseCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rounds played before the game is ended by the round cap.
    pub max_game_rounds: u32,
    /// Full rounds of werewolf deliberation before the vote.
    pub max_discussion_rounds: usize,
    pub villagers: usize,
    pub werewolves: usize,
    pub seers: usize,
    pub witches: usize,
    pub hunters: usize,
    pub tie_break: TieBreak,
    /// Solicit ballots concurrently instead of one voter at a time.
    pub concurrent_votes: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_game_rounds: 30,
            max_discussion_rounds: 3,
            villagers: 3,
            werewolves: 3,
            seers: 1,
            witches: 1,
            hunters: 1,
            tie_break: TieBreak::default(),
            concurrent_votes: true,
        }
    }
}

impl GameConfig {
    // ==================== Builder Methods ====================

    pub fn with_max_game_rounds(mut self, max: u32) -> Self {
        self.max_game_rounds = max;
        self
    }

    pub fn with_max_discussion_rounds(mut self, max: usize) -> Self {
        self.max_discussion_rounds = max;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_concurrent_votes(mut self, concurrent: bool) -> Self {
        self.concurrent_votes = concurrent;
        self
    }

    /// Set the number of players holding `role`.
    pub fn with_role_count(mut self, role: Role, count: usize) -> Self {
        *self.count_mut(role) = count;
        self
    }

    // ==================== Composition ====================

    pub fn role_count(&self, role: Role) -> usize {
        match role {
            Role::Villager => self.villagers,
            Role::Werewolf => self.werewolves,
            Role::Seer => self.seers,
            Role::Witch => self.witches,
            Role::Hunter => self.hunters,
        }
    }

    fn count_mut(&mut self, role: Role) -> &mut usize {
        match role {
            Role::Villager => &mut self.villagers,
            Role::Werewolf => &mut self.werewolves,
            Role::Seer => &mut self.seers,
            Role::Witch => &mut self.witches,
            Role::Hunter => &mut self.hunters,
        }
    }

    pub fn total_players(&self) -> usize {
        Role::ALL.iter().map(|r| self.role_count(*r)).sum()
    }

    /// Every seat's role, grouped by role in [`Role::ALL`] order.
    pub fn roles(&self) -> Vec<Role> {
        Role::ALL
            .iter()
            .flat_map(|role| std::iter::repeat_n(*role, self.role_count(*role)))
            .collect()
    }
}
