//! Chat completion client for OpenAI-compatible endpoints

mod client;

pub use client::{ChatClient, ChatCompletionClient, ChatMessage, LlmClientError};
