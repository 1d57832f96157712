//! Application layer for werewolf-quorum
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::GameConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    player_agent::{AgentError, AgentFactory, AgentSeat, PlayerAgent, Reply},
    progress::{GameProgressNotifier, NoProgress},
    result_store::{ResultStore, ResultStoreError},
};
pub use use_cases::broadcast::{BroadcastGroup, DeliveryMode};
pub use use_cases::run_batch::{
    RunBatchError, RunBatchInput, RunBatchOutput, RunBatchUseCase, compare_with_baseline,
};
pub use use_cases::run_game::{
    GameError, GameSession, NAME_POOL, RunGameInput, RunGameUseCase, SessionOutcome,
};
pub use use_cases::turn_scheduler::{ScheduleError, TurnScheduler};
