//! Domain layer for werewolf-quorum
//!
//! This crate holds the rules of the game as plain data and pure functions.
//! It has no dependencies on agents, I/O or the async runtime.
//!
//! # Core Concepts
//!
//! ## Roster and roles
//!
//! A [`Roster`] is the fixed, name-ordered set of [`Player`]s. Each player
//! holds a [`Role`], which belongs to a [`Faction`] and carries a static
//! [`RoleProfile`] describing its night action and whether it may take
//! revenge on death.
//!
//! ## Phases
//!
//! A game advances through [`GamePhase`]s. Win checks happen at dawn and
//! at dusk; [`WinEvaluator`] is the only place the win rule lives.
//!
//! ## Decisions
//!
//! Agents answer prompts with a [`Decision`]. Every structured answer is
//! validated against the [`ResponseSchema`] it was asked for, including
//! its candidate list.

pub mod config;
pub mod core;
pub mod decision;
pub mod game;
pub mod message;
pub mod player;
pub mod prompt;
pub mod result;
pub mod vote;

pub use config::OutputFormat;
pub use core::error::DomainError;
pub use decision::{Decision, ResponseSchema, extract_json_object};
pub use game::{
    CheckPoint, DeathSet, GamePhase, GameState, PendingNightOutcome, WinCheck, WinEvaluator,
};
pub use message::{MODERATOR, Message};
pub use player::{Faction, NightAction, Player, Role, RoleProfile, Roster};
pub use prompt::{Narration, system_prompt};
pub use result::{
    BatchStatistics, GameResult, PlayerOutcome, RoleStats, StatisticsComparison, Winner,
};
pub use vote::{Ballot, CastVote, TieBreak, VoteOutcome};
