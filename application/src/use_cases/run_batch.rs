//! Run Batch use case
//!
//! Plays a series of games with the same configuration and aggregates
//! their results.

use crate::ports::player_agent::AgentFactory;
use crate::ports::progress::{GameProgressNotifier, NoProgress};
use crate::ports::result_store::{ResultStore, ResultStoreError};
use crate::use_cases::run_game::{RunGameInput, RunGameUseCase};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use werewolf_domain::{BatchStatistics, GameResult, StatisticsComparison};

/// Errors that can occur while running a batch
#[derive(Error, Debug)]
pub enum RunBatchError {
    #[error("A batch needs at least one game")]
    NoGames,

    #[error("Result store error: {0}")]
    Store(#[from] ResultStoreError),

    #[error("Baseline contains no successful games")]
    EmptyBaseline,
}

/// Input for the RunBatch use case
#[derive(Debug, Clone, Copy)]
pub struct RunBatchInput {
    pub games: u32,
    /// Base seed; game `i` is seeded with `seed + i`
    pub seed: Option<u64>,
}

impl RunBatchInput {
    pub fn new(games: u32) -> Self {
        Self { games, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn game(&self, game_id: u32) -> RunGameInput {
        let input = RunGameInput::new(game_id);
        match self.seed {
            Some(seed) => input.with_seed(seed.wrapping_add(u64::from(game_id))),
            None => input,
        }
    }
}

/// Output of a batch run
#[derive(Debug, Clone)]
pub struct RunBatchOutput {
    pub results: Vec<GameResult>,
    pub statistics: BatchStatistics,
}

/// Use case for running a batch of games
pub struct RunBatchUseCase<F: AgentFactory + 'static> {
    game: RunGameUseCase<F>,
    result_store: Option<Arc<dyn ResultStore>>,
}

impl<F: AgentFactory + 'static> RunBatchUseCase<F> {
    pub fn new(game: RunGameUseCase<F>) -> Self {
        Self {
            game,
            result_store: None,
        }
    }

    /// Persist every batch to `store` once it finishes
    pub fn with_result_store(mut self, store: Arc<dyn ResultStore>) -> Self {
        self.result_store = Some(store);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunBatchInput) -> Result<RunBatchOutput, RunBatchError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks.
    ///
    /// Games run one after another with ids `1..=games`. A failed game is
    /// recorded and the batch carries on.
    pub async fn execute_with_progress(
        &self,
        input: RunBatchInput,
        progress: &dyn GameProgressNotifier,
    ) -> Result<RunBatchOutput, RunBatchError> {
        if input.games == 0 {
            return Err(RunBatchError::NoGames);
        }

        info!("Starting batch of {} games", input.games);
        progress.on_batch_start(input.games as usize);

        let mut results = Vec::with_capacity(input.games as usize);
        for game_id in 1..=input.games {
            let result = self
                .game
                .execute_with_progress(input.game(game_id), progress)
                .await;
            results.push(result);
        }

        let statistics = BatchStatistics::from_results(&results);
        if statistics.failed_games > 0 {
            warn!(
                "{} of {} games failed",
                statistics.failed_games, statistics.total_games
            );
        }
        progress.on_batch_complete(&results);

        if let Some(store) = &self.result_store {
            store.save(&results)?;
        }

        Ok(RunBatchOutput {
            results,
            statistics,
        })
    }
}

/// Compare a batch against results previously saved in `baseline`
pub fn compare_with_baseline(
    current: &BatchStatistics,
    baseline: &dyn ResultStore,
) -> Result<StatisticsComparison, RunBatchError> {
    let previous = BatchStatistics::from_results(&baseline.load()?);
    if previous.successful_games == 0 {
        return Err(RunBatchError::EmptyBaseline);
    }
    Ok(current.compare(&previous))
}
