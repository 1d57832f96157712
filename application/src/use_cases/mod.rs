//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod broadcast;
pub mod narrator;
pub mod role_resolver;
pub mod run_batch;
pub mod run_game;
pub mod seats;
pub mod transcript;
pub mod turn_scheduler;
