//! Application-level configuration.
//!
//! - [`GameConfig`]: round limits, role composition and voting behavior

pub mod game_config;

pub use game_config::GameConfig;
