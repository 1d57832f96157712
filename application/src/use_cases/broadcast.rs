//! Scoped message routing among a subset of players
//!
//! A [`BroadcastGroup`] has two ways of publishing:
//!
//! - [`BroadcastGroup::broadcast`] delivers explicitly chosen messages to every
//!   member.
//! - [`BroadcastGroup::auto_forward`] opens an [`AutoForward`] scope in which
//!   every solicited reply is forwarded to the other members as soon as it is
//!   produced. The scope borrows the group mutably, so a private solicitation
//!   (such as a vote) cannot happen while it is open, and dropping it returns
//!   the group to explicit delivery.

use crate::ports::player_agent::{AgentError, PlayerAgent, Reply};
use crate::use_cases::transcript::Transcript;
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::debug;
use werewolf_domain::{Message, ResponseSchema};

/// How replies solicited in a group are published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Only [`BroadcastGroup::broadcast`] publishes
    Explicit,
    /// Replies are forwarded to the other members as they arrive
    AutoForward,
}

/// A named, round-scoped set of players with an ordered message log
pub struct BroadcastGroup<'t> {
    name: String,
    members: Vec<Arc<dyn PlayerAgent>>,
    log: Vec<Message>,
    mode: DeliveryMode,
    transcript: Transcript<'t>,
}

impl<'t> BroadcastGroup<'t> {
    /// Create a group; the announcement, if any, is delivered to every
    /// member before this returns.
    pub async fn open(
        name: impl Into<String>,
        members: Vec<Arc<dyn PlayerAgent>>,
        announcement: Option<Message>,
        transcript: Transcript<'t>,
    ) -> Result<Self, AgentError> {
        let mut group = Self {
            name: name.into(),
            members,
            log: Vec::new(),
            mode: DeliveryMode::Explicit,
            transcript,
        };
        debug!(
            "Opened group '{}' with {} members",
            group.name,
            group.members.len()
        );

        if let Some(announcement) = announcement {
            group.broadcast(&[announcement]).await?;
        }
        Ok(group)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Arc<dyn PlayerAgent>] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Every message published in this group so far
    pub fn log(&self) -> &[Message] {
        &self.log
    }

    pub fn mode(&self) -> DeliveryMode {
        self.mode
    }

    pub fn transcript(&self) -> Transcript<'t> {
        self.transcript
    }

    /// Append `messages` to the log and deliver them, in order, to every member.
    pub async fn broadcast(&mut self, messages: &[Message]) -> Result<(), AgentError> {
        if messages.is_empty() {
            return Ok(());
        }
        self.publish(messages, None).await
    }

    /// Solicit `member` privately: neither the prompt nor the reply is
    /// delivered to anyone else.
    ///
    /// The reply's decision is validated against `schema`; a mismatch is an
    /// [`AgentError::InvalidOutput`].
    pub async fn ask(
        &self,
        member: &dyn PlayerAgent,
        prompt: Option<&Message>,
        schema: &ResponseSchema,
    ) -> Result<Reply, AgentError> {
        solicit(member, prompt, schema, &self.transcript).await
    }

    /// Enter auto-forward mode until the returned scope is dropped.
    pub fn auto_forward(&mut self) -> AutoForward<'_, 't> {
        self.mode = DeliveryMode::AutoForward;
        AutoForward { group: self }
    }

    /// Release the membership and discard the log
    pub fn close(self) {
        debug!(
            "Closed group '{}' after {} messages",
            self.name,
            self.log.len()
        );
    }

    async fn publish(&mut self, messages: &[Message], skip: Option<&str>) -> Result<(), AgentError> {
        for message in messages {
            self.transcript.message(&self.name, message);
        }
        self.log.extend_from_slice(messages);

        let recipients = self
            .members
            .iter()
            .filter(|m| Some(m.name()) != skip)
            .map(|m| m.observe(messages));
        try_join_all(recipients).await?;
        Ok(())
    }
}

/// Auto-forward scope over a [`BroadcastGroup`]
pub struct AutoForward<'g, 't> {
    group: &'g mut BroadcastGroup<'t>,
}

impl AutoForward<'_, '_> {
    pub fn len(&self) -> usize {
        self.group.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group.members.is_empty()
    }

    /// Solicit the member at `index` and forward the reply to every other
    /// member.
    pub async fn speak(
        &mut self,
        index: usize,
        prompt: Option<&Message>,
        schema: &ResponseSchema,
    ) -> Result<Reply, AgentError> {
        let member = Arc::clone(&self.group.members[index]);
        let reply = solicit(member.as_ref(), prompt, schema, &self.group.transcript).await?;
        self.group
            .publish(std::slice::from_ref(&reply.message), Some(member.name()))
            .await?;
        Ok(reply)
    }
}

impl Drop for AutoForward<'_, '_> {
    fn drop(&mut self) {
        self.group.mode = DeliveryMode::Explicit;
    }
}

/// Ask one player for a decision and validate it against `schema`
pub(crate) async fn solicit(
    agent: &dyn PlayerAgent,
    prompt: Option<&Message>,
    schema: &ResponseSchema,
    transcript: &Transcript<'_>,
) -> Result<Reply, AgentError> {
    if let Some(prompt) = prompt {
        transcript.private_message(agent.name(), prompt);
    }

    let reply = agent.decide(prompt, schema).await?;
    schema
        .validate(&reply.decision)
        .map_err(|e| AgentError::invalid_output(agent.name(), e))?;

    transcript.decision(agent.name(), &reply.decision);
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conversation_logger::NoConversationLogger;
    use crate::ports::progress::NoProgress;
    use crate::testing::{ScriptedAgent, agents, as_players, vote};
    use werewolf_domain::{Decision, DomainError};

    fn transcript() -> Transcript<'static> {
        Transcript::new(1, &NoProgress, &NoConversationLogger)
    }

    #[tokio::test]
    async fn test_open_delivers_announcement() {
        let players = agents(&["Alice", "Bob"]);
        let group = BroadcastGroup::open(
            "wolves",
            as_players(&players),
            Some(Message::narration("Hello")),
            transcript(),
        )
        .await
        .unwrap();

        assert_eq!(group.log().len(), 1);
        for p in &players {
            assert_eq!(p.observed(), vec![Message::narration("Hello")]);
        }
    }

    #[tokio::test]
    async fn test_broadcast_preserves_order() {
        let players = agents(&["Alice", "Bob"]);
        let mut group = BroadcastGroup::open("all", as_players(&players), None, transcript())
            .await
            .unwrap();

        group
            .broadcast(&[Message::narration("one"), Message::narration("two")])
            .await
            .unwrap();
        group.broadcast(&[Message::narration("three")]).await.unwrap();

        let seen: Vec<String> = players[1]
            .observed()
            .into_iter()
            .map(|m| m.content)
            .collect();
        assert_eq!(seen, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_ask_is_private() {
        let players = agents(&["Alice", "Bob", "Carol"]);
        let group = BroadcastGroup::open("all", as_players(&players), None, transcript())
            .await
            .unwrap();

        let schema = ResponseSchema::Vote {
            candidates: vec!["Bob".to_string(), "Carol".to_string()],
        };
        let reply = group
            .ask(players[0].as_ref(), Some(&Message::narration("Vote")), &schema)
            .await
            .unwrap();

        assert_eq!(reply.decision, vote("Bob"));
        assert!(group.log().is_empty());
        assert!(players[1].observed().is_empty());
        assert!(players[2].observed().is_empty());
    }

    #[tokio::test]
    async fn test_auto_forward_skips_author_and_resets_mode() {
        let players = agents(&["Alice", "Bob", "Carol"]);
        let mut group = BroadcastGroup::open("all", as_players(&players), None, transcript())
            .await
            .unwrap();

        {
            let mut scope = group.auto_forward();
            scope.speak(0, None, &ResponseSchema::Speech).await.unwrap();
            scope.speak(1, None, &ResponseSchema::Speech).await.unwrap();
        }
        assert_eq!(group.mode(), DeliveryMode::Explicit);
        assert_eq!(group.log().len(), 2);

        let speakers = |agent: &ScriptedAgent| -> Vec<String> {
            agent.observed().into_iter().map(|m| m.speaker).collect()
        };
        assert_eq!(speakers(&players[0]), vec!["Bob"]);
        assert_eq!(speakers(&players[1]), vec!["Alice"]);
        assert_eq!(speakers(&players[2]), vec!["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn test_invalid_target_is_rejected() {
        let rogue = Arc::new(ScriptedAgent::new("Alice").script(vote("Zed")));
        let group = BroadcastGroup::open(
            "all",
            vec![rogue.clone() as Arc<dyn PlayerAgent>],
            None,
            transcript(),
        )
        .await
        .unwrap();

        let schema = ResponseSchema::Vote {
            candidates: vec!["Bob".to_string()],
        };
        let err = group.ask(rogue.as_ref(), None, &schema).await.unwrap_err();
        assert!(matches!(
            err,
            AgentError::InvalidOutput {
                source: DomainError::InvalidTarget { .. },
                ..
            }
        ));
    }

    /// Always answers with a healing decision, whatever was asked
    struct StubbornAgent;

    #[async_trait::async_trait]
    impl PlayerAgent for StubbornAgent {
        fn name(&self) -> &str {
            "Stubborn"
        }

        async fn observe(&self, _messages: &[Message]) -> Result<(), AgentError> {
            Ok(())
        }

        async fn decide(
            &self,
            _prompt: Option<&Message>,
            _schema: &ResponseSchema,
        ) -> Result<Reply, AgentError> {
            Ok(Reply::new("Stubborn", "yes", Decision::Resurrect { resurrect: true }))
        }
    }

    #[tokio::test]
    async fn test_wrong_kind_is_rejected() {
        let group = BroadcastGroup::open("all", Vec::new(), None, transcript())
            .await
            .unwrap();

        let err = group
            .ask(&StubbornAgent, None, &ResponseSchema::Discussion)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AgentError::InvalidOutput {
                source: DomainError::SchemaMismatch { .. },
                ..
            }
        ));

        let ok = group
            .ask(&StubbornAgent, None, &ResponseSchema::Resurrect)
            .await;
        assert!(ok.is_ok());
    }
}
