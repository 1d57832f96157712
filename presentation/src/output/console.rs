//! Console output formatter for batch results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use werewolf_application::RunBatchOutput;
use werewolf_domain::{BatchStatistics, GameResult, StatisticsComparison, Winner};

/// Formats game results and statistics for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format every game followed by the statistics report
    pub fn format(output: &RunBatchOutput) -> String {
        let mut text = String::new();

        text.push_str(&Self::header("Werewolf Results"));
        text.push('\n');

        text.push_str(&Self::section_header("Games"));
        for result in &output.results {
            text.push_str(&Self::format_game(result));
        }

        text.push_str(&Self::format_statistics(&output.statistics));
        text.push_str(&Self::footer());

        text
    }

    /// Format as JSON
    pub fn format_json(output: &RunBatchOutput) -> String {
        Self::format_json_with_comparison(output, None)
    }

    /// JSON with an extra `comparison` object when a baseline was given
    pub fn format_json_with_comparison(
        output: &RunBatchOutput,
        comparison: Option<&StatisticsComparison>,
    ) -> String {
        let mut value = serde_json::json!({
            "results": output.results,
            "statistics": output.statistics,
        });
        if let Some(diff) = comparison {
            value["comparison"] = serde_json::json!(diff);
        }
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the statistics report only (concise output)
    pub fn format_summary(output: &RunBatchOutput) -> String {
        let mut text = String::new();
        text.push_str(&Self::header("Werewolf Statistics"));
        text.push('\n');
        text.push_str(&Self::format_statistics(&output.statistics));
        text.push_str(&Self::footer());
        text
    }

    /// One game: the winner line, then every player
    pub fn format_game(result: &GameResult) -> String {
        if result.failed {
            return format!(
                "\n{}\n  Error: {}\n",
                format!("── Game {} failed ──", result.game_id).red().bold(),
                result.error_message.as_deref().unwrap_or("Unknown")
            );
        }

        let mut text = format!(
            "\n{}\n",
            format!(
                "── Game {}: {} win after {} rounds ──",
                result.game_id,
                Self::winner_label(result.winner),
                result.total_rounds
            )
            .yellow()
            .bold()
        );
        for player in &result.players {
            let status = if player.survived {
                "alive".green()
            } else {
                format!("died in round {}", player.rounds_survived).dimmed()
            };
            text.push_str(&format!(
                "  {:<8} {:<10} {}\n",
                player.name,
                player.role.display_name(),
                status
            ));
        }
        text
    }

    /// Win rates, average length and the per-role table
    pub fn format_statistics(stats: &BatchStatistics) -> String {
        let mut text = Self::section_header("Statistics");

        text.push_str(&format!(
            "{} {} ({} failed)\n",
            "Games played:".cyan().bold(),
            stats.total_games,
            stats.failed_games
        ));
        text.push_str(&format!(
            "{} {} ({:.1}%)\n",
            "Werewolf wins:".cyan().bold(),
            stats.werewolf_wins,
            stats.werewolf_win_rate
        ));
        text.push_str(&format!(
            "{} {} ({:.1}%)\n",
            "Villager wins:".cyan().bold(),
            stats.villager_wins,
            stats.villager_win_rate
        ));
        text.push_str(&format!(
            "{} {:.2}\n",
            "Average rounds:".cyan().bold(),
            stats.avg_rounds
        ));

        if !stats.role_stats.is_empty() {
            text.push_str(&format!(
                "\n{}\n",
                format!(
                    "  {:<10} {:>7} {:>6} {:>9} {:>10}",
                    "Role", "Players", "Wins", "Win rate", "Survival"
                )
                .bold()
            ));
            for (role, role_stats) in &stats.role_stats {
                text.push_str(&format!(
                    "  {:<10} {:>7} {:>6} {:>8.1}% {:>9.1}%\n",
                    role.display_name(),
                    role_stats.appearances,
                    role_stats.wins,
                    role_stats.win_rate,
                    role_stats.survival_rate
                ));
            }
        }

        text
    }

    /// Current batch against a baseline, with signed differences
    pub fn format_comparison(current: &BatchStatistics, diff: &StatisticsComparison) -> String {
        let mut text = Self::section_header("Comparison with baseline");

        text.push_str(&format!(
            "{}\n",
            format!(
                "  {:<16} {:>9} {:>9} {:>9}",
                "", "Baseline", "Current", "Change"
            )
            .bold()
        ));
        text.push_str(&Self::comparison_row(
            "Werewolf wins %",
            current.werewolf_win_rate,
            diff.werewolf_win_rate_diff,
        ));
        text.push_str(&Self::comparison_row(
            "Villager wins %",
            current.villager_win_rate,
            diff.villager_win_rate_diff,
        ));
        text.push_str(&Self::comparison_row(
            "Average rounds",
            current.avg_rounds,
            diff.avg_rounds_diff,
        ));

        for (role, change) in &diff.role_win_rate_diff {
            let Some(role_stats) = current.role_stats.get(role) else {
                continue;
            };
            text.push_str(&Self::comparison_row(
                &format!("{} win %", role.display_name()),
                role_stats.win_rate,
                *change,
            ));
        }

        text
    }

    fn comparison_row(label: &str, current: f64, change: f64) -> String {
        let change_text = format!("{:+.2}", change);
        let change_text = if change > 0.0 {
            change_text.green()
        } else if change < 0.0 {
            change_text.red()
        } else {
            change_text.normal()
        };
        format!(
            "  {:<16} {:>9.2} {:>9.2} {:>9}\n",
            label,
            current - change,
            current,
            change_text
        )
    }

    fn winner_label(winner: Winner) -> &'static str {
        match winner {
            Winner::Werewolves => "Werewolves",
            Winner::Villagers => "Villagers",
            Winner::Unknown => "Nobody",
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, output: &RunBatchOutput) -> String {
        Self::format(output)
    }

    fn format_json(&self, output: &RunBatchOutput) -> String {
        Self::format_json(output)
    }

    fn format_summary(&self, output: &RunBatchOutput) -> String {
        Self::format_summary(output)
    }
}
