//! JSONL transcript writer for game events.
//!
//! Each [`ConversationEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`. Events are routed by their `game_id` to one
//! file per game inside the transcript directory.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use werewolf_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};

/// File that receives events without a `game_id`
const UNSCOPED_FILE: &str = "batch.jsonl";

/// JSONL transcript logger writing `game-<id>.jsonl` files into a directory.
///
/// Thread-safe via a `Mutex` around the open writers. Flushes on `Drop`.
pub struct JsonlConversationLogger {
    dir: PathBuf,
    writers: Mutex<HashMap<Option<u64>, BufWriter<File>>>,
}

impl JsonlConversationLogger {
    /// Create a new logger writing into `dir`.
    ///
    /// Creates the directory if it doesn't exist.
    /// Returns `None` if the directory cannot be created.
    pub fn new(dir: impl AsRef<Path>) -> Option<Self> {
        let dir = dir.as_ref();

        if let Err(e) = std::fs::create_dir_all(dir) {
            warn!(
                "Could not create transcript directory {}: {}",
                dir.display(),
                e
            );
            return None;
        }

        Some(Self {
            dir: dir.to_path_buf(),
            writers: Mutex::new(HashMap::new()),
        })
    }

    /// Get the transcript directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the transcript for `game_id`
    pub fn game_path(&self, game_id: u64) -> PathBuf {
        self.dir.join(format!("game-{:03}.jsonl", game_id))
    }

    fn file_for(&self, game_id: Option<u64>) -> PathBuf {
        match game_id {
            Some(id) => self.game_path(id),
            None => self.dir.join(UNSCOPED_FILE),
        }
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let game_id = event.payload.get("game_id").and_then(|v| v.as_u64());

        // Build the record: merge payload with type + timestamp
        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        let Ok(mut writers) = self.writers.lock() else {
            return;
        };
        if !writers.contains_key(&game_id) {
            let path = self.file_for(game_id);
            match File::create(&path) {
                Ok(file) => {
                    writers.insert(game_id, BufWriter::new(file));
                }
                Err(e) => {
                    warn!("Could not create transcript file {}: {}", path.display(), e);
                    return;
                }
            }
        }
        if let Some(writer) = writers.get_mut(&game_id) {
            let _ = writeln!(writer, "{}", line);
            // JSONL is append-only, so a flushed prefix is always readable
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writers) = self.writers.lock() {
            for writer in writers.values_mut() {
                let _ = writer.flush();
            }
        }
    }
}
