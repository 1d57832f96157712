//! The moderator's voice

use werewolf_domain::{Message, Narration, Role};

/// Degenerate participant that turns text into moderator messages
#[derive(Debug, Clone, Copy, Default)]
pub struct Narrator;

impl Narrator {
    /// A public announcement
    pub fn announce(&self, text: impl Into<String>) -> Message {
        Message::narration(text)
    }

    pub fn role_assignment(&self, name: &str, role: Role) -> Message {
        Message::narration(Narration::role_assignment(name, role))
    }
}
