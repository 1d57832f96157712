//! Progress notification port
//!
//! Defines the interface for reporting progress while games run.

use werewolf_domain::{GamePhase, GameResult, Message};

/// Callback for progress updates during a game or a batch
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, a live transcript, etc.)
pub trait GameProgressNotifier: Send + Sync {
    /// Called when a game starts
    fn on_game_start(&self, game_id: u32, players: usize);

    /// Called when a game ends, successfully or not
    fn on_game_complete(&self, result: &GameResult);

    /// Called when the game enters a new phase
    fn on_phase(&self, _game_id: u32, _phase: &GamePhase) {}

    /// Called for every message delivered inside a broadcast group
    fn on_message(&self, _group: &str, _message: &Message) {}

    /// Called when a set of deaths is committed
    fn on_deaths(&self, _round: u32, _dead: &[String]) {}

    // ==================== Batch Callbacks ====================

    /// Called before the first game of a batch
    fn on_batch_start(&self, _total_games: usize) {}

    /// Called after the last game of a batch
    fn on_batch_complete(&self, _results: &[GameResult]) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GameProgressNotifier for NoProgress {
    fn on_game_start(&self, _game_id: u32, _players: usize) {}
    fn on_game_complete(&self, _result: &GameResult) {}
}
