//! Players driven by a chat completion model

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};
use werewolf_application::ports::player_agent::{
    AgentError, AgentFactory, AgentSeat, PlayerAgent, Reply,
};
use werewolf_domain::core::string::truncate;
use werewolf_domain::{
    Decision, DomainError, Message, ResponseSchema, Role, extract_json_object, system_prompt,
};

use crate::llm::{ChatClient, ChatMessage, LlmClientError};

/// Answers that fail to parse are retried once with a reminder
const MAX_ATTEMPTS: usize = 2;

/// A player that keeps everything it has heard and asks a model what to do
pub struct LlmAgent {
    name: String,
    system_prompt: String,
    client: Arc<dyn ChatClient>,
    memory: Mutex<Vec<Message>>,
}

impl LlmAgent {
    pub fn new(seat: &AgentSeat, enhanced: bool, client: Arc<dyn ChatClient>) -> Self {
        let mut prompt = system_prompt(&seat.name, seat.role, enhanced);
        if !seat.known_allies.is_empty() {
            prompt.push_str(&format!(
                "\n\nYour fellow werewolves are: {}.",
                seat.known_allies.join(", ")
            ));
        }

        Self {
            name: seat.name.clone(),
            system_prompt: prompt,
            client,
            memory: Mutex::new(Vec::new()),
        }
    }

    pub fn memory(&self) -> Vec<Message> {
        self.memory
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    fn remember(&self, messages: &[Message]) {
        if let Ok(mut memory) = self.memory.lock() {
            memory.extend_from_slice(messages);
        }
    }

    fn conversation(&self, prompt: Option<&Message>, schema: &ResponseSchema) -> Vec<ChatMessage> {
        let mut transcript = String::from("What you have heard so far:\n");
        for msg in self.memory() {
            transcript.push_str(&format!("{}: {}\n", msg.speaker, msg.content));
        }
        if let Some(prompt) = prompt {
            transcript.push_str(&format!("{}: {}\n", prompt.speaker, prompt.content));
        }
        transcript.push('\n');
        transcript.push_str(&instructions(&self.name, schema));

        vec![
            ChatMessage::system(&self.system_prompt),
            ChatMessage::user(transcript),
        ]
    }

    fn client_error(&self, err: LlmClientError) -> AgentError {
        match err {
            LlmClientError::Timeout => AgentError::Timeout(self.name.clone()),
            other => AgentError::request_failed(&self.name, other.to_string()),
        }
    }
}

fn instructions(name: &str, schema: &ResponseSchema) -> String {
    match schema.json_schema() {
        None => format!("It is your turn to speak, {name}. Reply with what you say to the table."),
        Some(json) => format!(
            "It is your turn, {name}. First write what you say, then a JSON object \
             matching this schema:\n{json}"
        ),
    }
}

/// Split a reply into its spoken part and its decision
fn interpret(text: &str, schema: &ResponseSchema) -> Result<(String, Decision), DomainError> {
    if matches!(schema, ResponseSchema::Speech) {
        return Ok((text.trim().to_string(), Decision::Speech));
    }

    let value = extract_json_object(text)
        .ok_or_else(|| DomainError::MalformedResponse("no JSON object in reply".to_string()))?;
    let decision = schema.parse_response(&value)?;

    let spoken = text
        .find('{')
        .map(|start| text[..start].trim().trim_end_matches("```json").trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(text)
        .to_string();
    Ok((spoken, decision))
}

#[async_trait]
impl PlayerAgent for LlmAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn observe(&self, messages: &[Message]) -> Result<(), AgentError> {
        self.remember(messages);
        Ok(())
    }

    async fn decide(
        &self,
        prompt: Option<&Message>,
        schema: &ResponseSchema,
    ) -> Result<Reply, AgentError> {
        let mut conversation = self.conversation(prompt, schema);
        let mut last_error = None;

        for attempt in 1..=MAX_ATTEMPTS {
            let text = self
                .client
                .complete(&conversation)
                .await
                .map_err(|e| self.client_error(e))?;

            match interpret(&text, schema) {
                Ok((spoken, decision)) => {
                    debug!("{} decided {:?} on attempt {}", self.name, decision, attempt);
                    let reply = Reply::new(&self.name, spoken, decision);
                    let mut heard: Vec<Message> = prompt.cloned().into_iter().collect();
                    heard.push(reply.message.clone());
                    self.remember(&heard);
                    return Ok(reply);
                }
                Err(e) => {
                    warn!(
                        "{} gave an unusable answer ({}): {}",
                        self.name,
                        e,
                        truncate(&text, 200)
                    );
                    conversation.push(ChatMessage::assistant(text));
                    conversation.push(ChatMessage::user(format!(
                        "That answer could not be used ({e}). Answer again and include the JSON object."
                    )));
                    last_error = Some(e);
                }
            }
        }

        Err(AgentError::invalid_output(
            &self.name,
            last_error.unwrap_or_else(|| {
                DomainError::MalformedResponse("no answer".to_string())
            }),
        ))
    }
}

/// Creates [`LlmAgent`]s that share one client
pub struct LlmAgentFactory {
    client: Arc<dyn ChatClient>,
    enhanced_roles: Vec<Role>,
}

impl LlmAgentFactory {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            enhanced_roles: Vec::new(),
        }
    }

    /// Give these roles the extra strategy guidance
    pub fn with_enhanced_roles(mut self, roles: Vec<Role>) -> Self {
        self.enhanced_roles = roles;
        self
    }
}

impl AgentFactory for LlmAgentFactory {
    fn create(&self, seat: &AgentSeat) -> Result<Arc<dyn PlayerAgent>, AgentError> {
        let enhanced = self.enhanced_roles.contains(&seat.role);
        Ok(Arc::new(LlmAgent::new(seat, enhanced, Arc::clone(&self.client))))
    }
}
