//! Messages exchanged at the table

use serde::{Deserialize, Serialize};

/// Speaker name used for system narration
pub const MODERATOR: &str = "Moderator";

/// A message attributed to one speaker (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub speaker: String,
    pub content: String,
}

impl Message {
    pub fn new(speaker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            content: content.into(),
        }
    }

    /// A message from the moderator
    pub fn narration(content: impl Into<String>) -> Self {
        Self::new(MODERATOR, content)
    }

    pub fn is_narration(&self) -> bool {
        self.speaker == MODERATOR
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.speaker, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narration() {
        let msg = Message::narration("Night falls.");
        assert!(msg.is_narration());
        assert_eq!(msg.to_string(), "Moderator: Night falls.");
        assert!(!Message::new("Alice", "hi").is_narration());
    }
}
