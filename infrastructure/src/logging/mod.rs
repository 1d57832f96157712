//! Logging infrastructure: structured game transcripts.
//!
//! Provides [`JsonlConversationLogger`], a JSONL writer that implements
//! the [`ConversationLogger`](werewolf_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
