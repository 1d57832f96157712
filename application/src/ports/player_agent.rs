//! Player agent port
//!
//! Defines the contract every participant satisfies, whatever drives it
//! (a scripted bot, a heuristic bot or a language model).

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use werewolf_domain::{Decision, DomainError, Message, ResponseSchema, Role};

/// Errors raised by a player agent
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Agent {agent} request failed: {message}")]
    RequestFailed { agent: String, message: String },

    #[error("Agent {0} timed out")]
    Timeout(String),

    #[error("Invalid output from {agent}: {source}")]
    InvalidOutput {
        agent: String,
        #[source]
        source: DomainError,
    },

    #[error("Could not create agent {agent}: {message}")]
    Creation { agent: String, message: String },
}

impl AgentError {
    pub fn request_failed(agent: impl Into<String>, message: impl Into<String>) -> Self {
        AgentError::RequestFailed {
            agent: agent.into(),
            message: message.into(),
        }
    }

    pub fn invalid_output(agent: impl Into<String>, source: DomainError) -> Self {
        AgentError::InvalidOutput {
            agent: agent.into(),
            source,
        }
    }
}

/// One complete answer from a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// The public text of the answer, attributed to the player
    pub message: Message,
    /// The structured part, matching the requested schema
    pub decision: Decision,
}

impl Reply {
    pub fn new(speaker: impl Into<String>, content: impl Into<String>, decision: Decision) -> Self {
        Self {
            message: Message::new(speaker, content),
            decision,
        }
    }
}

/// A participant in the game
///
/// Calls are request-response: each `decide` yields one complete reply.
/// The engine validates every decision against the schema it asked for,
/// so implementations do not need to.
#[async_trait]
pub trait PlayerAgent: Send + Sync {
    /// The player's unique name
    fn name(&self) -> &str;

    /// Deliver messages to the player's memory
    async fn observe(&self, messages: &[Message]) -> Result<(), AgentError>;

    /// Ask the player for an answer of the given shape.
    ///
    /// `prompt`, when given, is addressed to this player only and should be
    /// remembered before answering.
    async fn decide(
        &self,
        prompt: Option<&Message>,
        schema: &ResponseSchema,
    ) -> Result<Reply, AgentError>;
}

/// What a player is told about itself when it takes its seat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSeat {
    pub name: String,
    pub role: Role,
    /// Teammates known from the start (werewolves know each other)
    pub known_allies: Vec<String>,
}

/// Creates the agent for each seat of a new game
pub trait AgentFactory: Send + Sync {
    fn create(&self, seat: &AgentSeat) -> Result<Arc<dyn PlayerAgent>, AgentError>;
}
