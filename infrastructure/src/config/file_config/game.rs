//! Game configuration from TOML (`[game]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [game]
//! max_game_rounds = 30
//! max_discussion_rounds = 3
//! villagers = 3
//! werewolves = 3
//! seers = 1
//! witches = 1
//! hunters = 1
//! tie_break = "lexicographic"    # or "first_cast"
//! concurrent_votes = true
//! ```

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use werewolf_application::{GameConfig, NAME_POOL};
use werewolf_domain::TieBreak;

/// Raw game configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    pub max_game_rounds: u32,
    pub max_discussion_rounds: usize,
    pub villagers: usize,
    pub werewolves: usize,
    pub seers: usize,
    pub witches: usize,
    pub hunters: usize,
    pub tie_break: TieBreak,
    pub concurrent_votes: bool,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        let defaults = GameConfig::default();
        Self {
            max_game_rounds: defaults.max_game_rounds,
            max_discussion_rounds: defaults.max_discussion_rounds,
            villagers: defaults.villagers,
            werewolves: defaults.werewolves,
            seers: defaults.seers,
            witches: defaults.witches,
            hunters: defaults.hunters,
            tie_break: defaults.tie_break,
            concurrent_votes: defaults.concurrent_votes,
        }
    }
}

impl FileGameConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_game_rounds == 0 {
            return Err(ConfigValidationError::ZeroValue("game.max_game_rounds"));
        }
        if self.max_discussion_rounds == 0 {
            return Err(ConfigValidationError::ZeroValue("game.max_discussion_rounds"));
        }
        if self.werewolves == 0 {
            return Err(ConfigValidationError::NoWerewolves);
        }

        let total = self.to_game_config().total_players();
        if total == self.werewolves {
            return Err(ConfigValidationError::NoVillagerSide);
        }
        if total > NAME_POOL.len() {
            return Err(ConfigValidationError::TooManyPlayers {
                requested: total,
                available: NAME_POOL.len(),
            });
        }
        Ok(())
    }

    /// Convert to the application layer's game parameters
    pub fn to_game_config(&self) -> GameConfig {
        GameConfig {
            max_game_rounds: self.max_game_rounds,
            max_discussion_rounds: self.max_discussion_rounds,
            villagers: self.villagers,
            werewolves: self.werewolves,
            seers: self.seers,
            witches: self.witches,
            hunters: self.hunters,
            tie_break: self.tie_break,
            concurrent_votes: self.concurrent_votes,
        }
    }
}
