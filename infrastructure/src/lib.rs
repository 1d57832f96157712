//! Infrastructure layer for werewolf-quorum
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod agents;
pub mod config;
pub mod llm;
pub mod logging;
pub mod results;

// Re-export commonly used types
pub use agents::{
    ConfiguredAgentFactory, HeuristicAgent, HeuristicAgentFactory, HeuristicProfile, LlmAgent,
    LlmAgentFactory,
};
pub use config::{
    AgentKind, ConfigLoader, ConfigValidationError, FileAgentsConfig, FileConfig,
    FileGameConfig, FileLlmConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
};
pub use llm::{ChatClient, ChatCompletionClient, ChatMessage, LlmClientError};
pub use logging::JsonlConversationLogger;
pub use results::JsonResultStore;
