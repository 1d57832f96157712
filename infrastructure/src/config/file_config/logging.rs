//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// ```toml
/// [logging]
/// file = "werewolf.log"            # diagnostic log, in addition to stderr
/// transcript_dir = "transcripts"   # one game-<id>.jsonl transcript per game
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub file: Option<PathBuf>,
    pub transcript_dir: Option<PathBuf>,
}
