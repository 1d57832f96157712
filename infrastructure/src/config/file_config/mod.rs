//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agents;
mod game;
mod llm;
mod logging;
mod output;

pub use agents::{AgentKind, FileAgentsConfig};
pub use game::FileGameConfig;
pub use llm::FileLlmConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    ZeroValue(&'static str),

    #[error("game needs at least one werewolf")]
    NoWerewolves,

    #[error("game needs at least one player outside the werewolves")]
    NoVillagerSide,

    #[error("{requested} players requested but only {available} names are available")]
    TooManyPlayers { requested: usize, available: usize },

    #[error("{field} must be between 0 and 1, got {value}")]
    InvalidProbability { field: &'static str, value: f64 },

    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Game rules and role composition
    pub game: FileGameConfig,
    /// Player agent selection
    pub agents: FileAgentsConfig,
    /// Language model endpoint, used when `agents.kind = "llm"`
    pub llm: FileLlmConfig,
    /// Diagnostic log and transcript destinations
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    ///
    /// The `[llm]` section is only checked when LLM agents are selected.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.game.validate()?;
        self.agents.validate()?;
        if self.agents.kind == AgentKind::Llm {
            self.llm.validate()?;
        }
        Ok(())
    }
}
