//! JSON file implementation of the [`ResultStore`] port.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use werewolf_application::ports::result_store::{ResultStore, ResultStoreError};
use werewolf_domain::GameResult;

/// Stores a batch as one pretty-printed JSON array
pub struct JsonResultStore {
    path: PathBuf,
}

impl JsonResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: std::io::Error) -> ResultStoreError {
        ResultStoreError::Io {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }

    fn format_error(&self, err: serde_json::Error) -> ResultStoreError {
        ResultStoreError::Format {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl ResultStore for JsonResultStore {
    fn save(&self, results: &[GameResult]) -> Result<(), ResultStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(results).map_err(|e| self.format_error(e))?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        info!("Saved {} results to {}", results.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Vec<GameResult>, ResultStoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No results at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };
        serde_json::from_str(&content).map_err(|e| self.format_error(e))
    }
}
