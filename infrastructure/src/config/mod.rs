//! Configuration file loading for werewolf-quorum
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WEREWOLF_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./werewolf.toml` or `./.werewolf.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/werewolf-quorum/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    AgentKind, ConfigValidationError, FileAgentsConfig, FileConfig, FileGameConfig,
    FileLlmConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
