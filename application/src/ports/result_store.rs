//! Result persistence port

use thiserror::Error;
use werewolf_domain::GameResult;

#[derive(Error, Debug)]
pub enum ResultStoreError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed results in {path}: {message}")]
    Format { path: String, message: String },
}

/// Saves and loads batches of game results
pub trait ResultStore: Send + Sync {
    fn save(&self, results: &[GameResult]) -> Result<(), ResultStoreError>;

    /// Load previously saved results. A store with nothing saved yields an
    /// empty list.
    fn load(&self) -> Result<Vec<GameResult>, ResultStoreError>;
}
