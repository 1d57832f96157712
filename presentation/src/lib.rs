//! Presentation layer for werewolf-quorum
//!
//! This crate contains the CLI definition, output formatters,
//! the progress reporter and the live transcript printer.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{AgentChoice, Cli, OutputFormat};
pub use config::{OutputConfig, ProgressMode};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use progress::transcript::TranscriptPrinter;
