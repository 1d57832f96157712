//! Aggregate statistics over a batch of game results

use super::game_result::{GameResult, Winner};
use crate::player::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-role aggregates across all successful games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleStats {
    /// Number of players who held this role
    pub appearances: usize,
    pub wins: usize,
    pub survivals: usize,
    /// Percentage of appearances that ended on the winning side
    pub win_rate: f64,
    /// Percentage of appearances that survived to the end
    pub survival_rate: f64,
}

/// Summary of a batch of games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStatistics {
    pub total_games: usize,
    pub successful_games: usize,
    pub failed_games: usize,
    pub werewolf_wins: usize,
    pub villager_wins: usize,
    /// Percentages over successful games
    pub werewolf_win_rate: f64,
    pub villager_win_rate: f64,
    pub avg_rounds: f64,
    pub role_stats: BTreeMap<Role, RoleStats>,
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

impl BatchStatistics {
    pub fn from_results(results: &[GameResult]) -> Self {
        let successful: Vec<&GameResult> = results.iter().filter(|r| r.is_success()).collect();
        let n = successful.len();

        let werewolf_wins = successful
            .iter()
            .filter(|r| r.winner == Winner::Werewolves)
            .count();
        let villager_wins = successful
            .iter()
            .filter(|r| r.winner == Winner::Villagers)
            .count();
        let total_rounds: u64 = successful.iter().map(|r| r.total_rounds as u64).sum();

        let mut role_stats: BTreeMap<Role, RoleStats> = BTreeMap::new();
        for result in &successful {
            for player in &result.players {
                let stats = role_stats.entry(player.role).or_default();
                stats.appearances += 1;
                if result.role_won(player.role) {
                    stats.wins += 1;
                }
                if player.survived {
                    stats.survivals += 1;
                }
            }
        }
        for stats in role_stats.values_mut() {
            stats.win_rate = percent(stats.wins, stats.appearances);
            stats.survival_rate = percent(stats.survivals, stats.appearances);
        }

        Self {
            total_games: results.len(),
            successful_games: n,
            failed_games: results.len() - n,
            werewolf_wins,
            villager_wins,
            werewolf_win_rate: percent(werewolf_wins, n),
            villager_win_rate: percent(villager_wins, n),
            avg_rounds: if n == 0 {
                0.0
            } else {
                total_rounds as f64 / n as f64
            },
            role_stats,
        }
    }

    /// Compare this batch (the candidate) against a baseline batch
    pub fn compare(&self, baseline: &BatchStatistics) -> StatisticsComparison {
        let role_win_rate_diff = Role::ALL
            .iter()
            .filter_map(|role| {
                let ours = self.role_stats.get(role)?;
                let theirs = baseline.role_stats.get(role)?;
                Some((*role, ours.win_rate - theirs.win_rate))
            })
            .collect();

        StatisticsComparison {
            werewolf_win_rate_diff: self.werewolf_win_rate - baseline.werewolf_win_rate,
            villager_win_rate_diff: self.villager_win_rate - baseline.villager_win_rate,
            avg_rounds_diff: self.avg_rounds - baseline.avg_rounds,
            role_win_rate_diff,
        }
    }
}

/// Signed differences between two batches (candidate minus baseline)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsComparison {
    pub werewolf_win_rate_diff: f64,
    pub villager_win_rate_diff: f64,
    pub avg_rounds_diff: f64,
    pub role_win_rate_diff: BTreeMap<Role, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::game_result::PlayerOutcome;

    fn game(id: u32, winner: Winner, rounds: u32, players: &[(Role, bool)]) -> GameResult {
        GameResult {
            game_id: id,
            winner,
            total_rounds: rounds,
            players: players
                .iter()
                .enumerate()
                .map(|(i, (role, survived))| PlayerOutcome {
                    name: format!("P{}", i),
                    role: *role,
                    survived: *survived,
                    rounds_survived: rounds,
                })
                .collect(),
            timestamp: "t".to_string(),
            failed: false,
            error_message: None,
        }
    }

    #[test]
    fn test_empty_batch() {
        let stats = BatchStatistics::from_results(&[]);
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.werewolf_win_rate, 0.0);
        assert_eq!(stats.avg_rounds, 0.0);
        assert!(stats.role_stats.is_empty());
    }

    #[test]
    fn test_win_rates_exclude_failed_games() {
        let results = vec![
            game(1, Winner::Werewolves, 3, &[(Role::Werewolf, true), (Role::Seer, false)]),
            game(2, Winner::Villagers, 5, &[(Role::Werewolf, false), (Role::Seer, true)]),
            GameResult::failed(3, "boom", "t"),
        ];
        let stats = BatchStatistics::from_results(&results);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.successful_games, 2);
        assert_eq!(stats.failed_games, 1);
        assert_eq!(stats.werewolf_win_rate, 50.0);
        assert_eq!(stats.villager_win_rate, 50.0);
        assert_eq!(stats.avg_rounds, 4.0);

        let seer = &stats.role_stats[&Role::Seer];
        assert_eq!(seer.appearances, 2);
        assert_eq!(seer.wins, 1);
        assert_eq!(seer.survival_rate, 50.0);
    }

    #[test]
    fn test_compare_signed_diffs() {
        let baseline = BatchStatistics::from_results(&[game(
            1,
            Winner::Werewolves,
            4,
            &[(Role::Werewolf, true), (Role::Villager, false)],
        )]);
        let candidate = BatchStatistics::from_results(&[game(
            1,
            Winner::Villagers,
            6,
            &[(Role::Werewolf, false), (Role::Villager, true)],
        )]);

        let diff = candidate.compare(&baseline);
        assert_eq!(diff.werewolf_win_rate_diff, -100.0);
        assert_eq!(diff.villager_win_rate_diff, 100.0);
        assert_eq!(diff.avg_rounds_diff, 2.0);
        assert_eq!(diff.role_win_rate_diff[&Role::Villager], 100.0);
        assert!(!diff.role_win_rate_diff.contains_key(&Role::Seer));
    }
}
