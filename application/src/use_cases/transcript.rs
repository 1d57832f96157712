//! Fan-out of game events to the progress notifier and the transcript logger

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::progress::GameProgressNotifier;
use serde_json::json;
use werewolf_domain::{Decision, GamePhase, Message};

/// Borrowed event sinks for one game
#[derive(Clone, Copy)]
pub struct Transcript<'a> {
    game_id: u32,
    progress: &'a dyn GameProgressNotifier,
    logger: &'a dyn ConversationLogger,
}

impl<'a> Transcript<'a> {
    pub fn new(
        game_id: u32,
        progress: &'a dyn GameProgressNotifier,
        logger: &'a dyn ConversationLogger,
    ) -> Self {
        Self {
            game_id,
            progress,
            logger,
        }
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn phase(&self, phase: &GamePhase) {
        self.progress.on_phase(self.game_id, phase);
        self.logger.log(ConversationEvent::new(
            "phase",
            json!({
                "game_id": self.game_id,
                "phase": phase.label(),
                "round": phase.round(),
            }),
        ));
    }

    /// A message delivered to every member of `group` (or all but its author)
    pub fn message(&self, group: &str, message: &Message) {
        self.progress.on_message(group, message);
        self.logger.log(ConversationEvent::new(
            "message",
            json!({
                "game_id": self.game_id,
                "group": group,
                "speaker": message.speaker,
                "content": message.content,
            }),
        ));
    }

    /// A prompt delivered to one player only
    pub fn private_message(&self, recipient: &str, message: &Message) {
        self.logger.log(ConversationEvent::new(
            "private_message",
            json!({
                "game_id": self.game_id,
                "recipient": recipient,
                "speaker": message.speaker,
                "content": message.content,
            }),
        ));
    }

    pub fn decision(&self, player: &str, decision: &Decision) {
        self.logger.log(ConversationEvent::new(
            "decision",
            json!({
                "game_id": self.game_id,
                "player": player,
                "decision": decision,
            }),
        ));
    }

    pub fn deaths(&self, round: u32, dead: &[String]) {
        self.progress.on_deaths(round, dead);
        self.logger.log(ConversationEvent::new(
            "deaths",
            json!({
                "game_id": self.game_id,
                "round": round,
                "dead": dead,
            }),
        ));
    }
}
