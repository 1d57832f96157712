//! Scripted agents for use case tests

use crate::ports::player_agent::{AgentError, AgentFactory, AgentSeat, PlayerAgent, Reply};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use werewolf_domain::{Decision, Message, ResponseSchema};

/// A scripted answer
#[derive(Debug, Clone)]
pub(crate) enum Scripted {
    Decide(Decision),
    Error(String),
}

/// Agent that answers from per-kind queues, falling back to a passive default
///
/// Defaults when a queue is empty: speeches are empty, werewolves agree
/// immediately, votes and seer checks take the first candidate, the witch
/// and the hunter decline.
pub(crate) struct ScriptedAgent {
    name: String,
    scripts: Mutex<HashMap<&'static str, VecDeque<Scripted>>>,
    observed: Mutex<Vec<Message>>,
    asked: Mutex<Vec<(Option<Message>, ResponseSchema)>>,
}

impl ScriptedAgent {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            scripts: Mutex::new(HashMap::new()),
            observed: Mutex::new(Vec::new()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn script(self, decision: Decision) -> Self {
        self.push(decision.kind(), Scripted::Decide(decision));
        self
    }

    pub(crate) fn fail_on(self, kind: &'static str, message: &str) -> Self {
        self.push(kind, Scripted::Error(message.to_string()));
        self
    }

    fn push(&self, kind: &'static str, scripted: Scripted) {
        self.scripts
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push_back(scripted);
    }

    pub(crate) fn observed(&self) -> Vec<Message> {
        self.observed.lock().unwrap().clone()
    }

    pub(crate) fn asked(&self) -> Vec<(Option<Message>, ResponseSchema)> {
        self.asked.lock().unwrap().clone()
    }

    pub(crate) fn asked_kinds(&self) -> Vec<&'static str> {
        self.asked().iter().map(|(_, s)| s.kind()).collect()
    }

    fn default_decision(schema: &ResponseSchema) -> Decision {
        let first = schema.candidates().first().cloned().unwrap_or_default();
        match schema {
            ResponseSchema::Speech => Decision::Speech,
            ResponseSchema::Discussion => Decision::Discussion {
                reach_agreement: true,
            },
            ResponseSchema::Vote { .. } => Decision::Vote { target: first },
            ResponseSchema::Resurrect => Decision::Resurrect { resurrect: false },
            ResponseSchema::Poison { .. } => Decision::Poison {
                poison: false,
                target: None,
            },
            ResponseSchema::Seer { .. } => Decision::Seer { target: first },
            ResponseSchema::Hunter { .. } => Decision::Hunter {
                shoot: false,
                target: None,
            },
        }
    }
}

#[async_trait]
impl PlayerAgent for ScriptedAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn observe(&self, messages: &[Message]) -> Result<(), AgentError> {
        self.observed.lock().unwrap().extend_from_slice(messages);
        Ok(())
    }

    async fn decide(
        &self,
        prompt: Option<&Message>,
        schema: &ResponseSchema,
    ) -> Result<Reply, AgentError> {
        self.asked
            .lock()
            .unwrap()
            .push((prompt.cloned(), schema.clone()));

        let next = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(schema.kind())
            .and_then(|queue| queue.pop_front());

        let decision = match next {
            Some(Scripted::Decide(decision)) => decision,
            Some(Scripted::Error(message)) => {
                return Err(AgentError::request_failed(&self.name, message));
            }
            None => Self::default_decision(schema),
        };

        let content = format!("{} says ({})", self.name, decision.kind());
        Ok(Reply::new(&self.name, content, decision))
    }
}

pub(crate) fn agents(names: &[&str]) -> Vec<Arc<ScriptedAgent>> {
    names.iter().map(|n| Arc::new(ScriptedAgent::new(n))).collect()
}

pub(crate) fn as_players(agents: &[Arc<ScriptedAgent>]) -> Vec<Arc<dyn PlayerAgent>> {
    agents
        .iter()
        .map(|a| Arc::clone(a) as Arc<dyn PlayerAgent>)
        .collect()
}

pub(crate) fn vote(target: &str) -> Decision {
    Decision::Vote {
        target: target.to_string(),
    }
}

/// Factory handing out pre-built scripted agents by name
pub(crate) struct ScriptedFactory {
    agents: Mutex<HashMap<String, Arc<ScriptedAgent>>>,
    seats: Mutex<Vec<AgentSeat>>,
}

impl ScriptedFactory {
    pub(crate) fn new(agents: Vec<ScriptedAgent>) -> Self {
        Self {
            agents: Mutex::new(
                agents
                    .into_iter()
                    .map(|a| (a.name.clone(), Arc::new(a)))
                    .collect(),
            ),
            seats: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn agent(&self, name: &str) -> Option<Arc<ScriptedAgent>> {
        self.agents.lock().unwrap().get(name).cloned()
    }

    pub(crate) fn seats(&self) -> Vec<AgentSeat> {
        self.seats.lock().unwrap().clone()
    }
}

impl AgentFactory for ScriptedFactory {
    fn create(&self, seat: &AgentSeat) -> Result<Arc<dyn PlayerAgent>, AgentError> {
        self.seats.lock().unwrap().push(seat.clone());
        let agent = self
            .agents
            .lock()
            .unwrap()
            .entry(seat.name.clone())
            .or_insert_with(|| Arc::new(ScriptedAgent::new(&seat.name)))
            .clone();
        Ok(agent as Arc<dyn PlayerAgent>)
    }
}
