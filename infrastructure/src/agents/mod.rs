//! Player agent adapters
//!
//! Implementations of the [`PlayerAgent`] port: rule-following heuristic
//! bots and language model players.

mod heuristic;
mod llm;

pub use heuristic::{HeuristicAgent, HeuristicAgentFactory, HeuristicProfile};
pub use llm::{LlmAgent, LlmAgentFactory};

use crate::config::{AgentKind, FileConfig};
use crate::llm::{ChatCompletionClient, LlmClientError};
use std::sync::Arc;
use tracing::info;
use werewolf_application::ports::player_agent::{
    AgentError, AgentFactory, AgentSeat, PlayerAgent,
};

/// The agent factory selected by `[agents] kind`
pub enum ConfiguredAgentFactory {
    Heuristic(HeuristicAgentFactory),
    Llm(LlmAgentFactory),
}

impl ConfiguredAgentFactory {
    pub fn from_config(config: &FileConfig) -> Result<Self, LlmClientError> {
        match config.agents.kind {
            AgentKind::Heuristic => {
                info!("Using heuristic agents");
                Ok(Self::Heuristic(HeuristicAgentFactory::from_config(
                    &config.agents,
                )))
            }
            AgentKind::Llm => {
                let client = ChatCompletionClient::from_config(&config.llm)?;
                info!("Using LLM agents: {} at {}", client.model(), client.endpoint());
                Ok(Self::Llm(
                    LlmAgentFactory::new(Arc::new(client))
                        .with_enhanced_roles(config.agents.enhanced_roles.clone()),
                ))
            }
        }
    }

    pub fn kind(&self) -> AgentKind {
        match self {
            Self::Heuristic(_) => AgentKind::Heuristic,
            Self::Llm(_) => AgentKind::Llm,
        }
    }
}

impl AgentFactory for ConfiguredAgentFactory {
    fn create(&self, seat: &AgentSeat) -> Result<Arc<dyn PlayerAgent>, AgentError> {
        match self {
            Self::Heuristic(factory) => factory.create(seat),
            Self::Llm(factory) => factory.create(seat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_selects_heuristic() {
        let factory = ConfiguredAgentFactory::from_config(&FileConfig::default()).unwrap();
        assert_eq!(factory.kind(), AgentKind::Heuristic);
    }

    #[test]
    fn test_llm_kind_selects_llm() {
        let mut config = FileConfig::default();
        config.agents.kind = AgentKind::Llm;
        let factory = ConfiguredAgentFactory::from_config(&config).unwrap();
        assert_eq!(factory.kind(), AgentKind::Llm);
    }
}
