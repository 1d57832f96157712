//! Game results and batch statistics

pub mod game_result;
pub mod statistics;

pub use game_result::{GameResult, PlayerOutcome, Winner};
pub use statistics::{BatchStatistics, RoleStats, StatisticsComparison};
