//! Live table talk on the terminal

use colored::Colorize;
use werewolf_application::GameProgressNotifier;
use werewolf_domain::{GamePhase, GameResult, Message};

/// Prints every phase, message and death as a game runs
///
/// Private groups (the werewolves' night talk, the seer's check) are shown
/// with their group name so the reader can tell who heard what.
pub struct TranscriptPrinter;

impl TranscriptPrinter {
    pub fn format_message(group: &str, message: &Message) -> String {
        let scope = format!("[{}]", group).dimmed();
        if message.is_narration() {
            format!("{} {}", scope, message.content.italic())
        } else {
            format!(
                "{} {}: {}",
                scope,
                message.speaker.yellow().bold(),
                message.content
            )
        }
    }

    pub fn format_phase(game_id: u32, phase: &GamePhase) -> String {
        format!("\n{}", format!("── game {} · {} ──", game_id, phase).cyan().bold())
    }

    pub fn format_deaths(round: u32, dead: &[String]) -> String {
        format!(
            "{} {}",
            format!("✝ round {}:", round).red().bold(),
            dead.join(", ")
        )
    }
}

impl GameProgressNotifier for TranscriptPrinter {
    fn on_game_start(&self, game_id: u32, players: usize) {
        println!(
            "\n{}",
            format!("=== Game {} ({} players) ===", game_id, players).bold()
        );
    }

    fn on_game_complete(&self, result: &GameResult) {
        if result.failed {
            println!(
                "{} {}",
                format!("Game {} failed:", result.game_id).red().bold(),
                result.error_message.as_deref().unwrap_or("unknown")
            );
        } else {
            println!(
                "{}",
                format!(
                    "Game {}: {} win after {} rounds",
                    result.game_id, result.winner, result.total_rounds
                )
                .green()
                .bold()
            );
        }
    }

    fn on_phase(&self, game_id: u32, phase: &GamePhase) {
        println!("{}", Self::format_phase(game_id, phase));
    }

    fn on_message(&self, group: &str, message: &Message) {
        println!("{}", Self::format_message(group, message));
    }

    fn on_deaths(&self, round: u32, dead: &[String]) {
        if !dead.is_empty() {
            println!("{}", Self::format_deaths(round, dead));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_show_group_and_speaker() {
        let spoken = TranscriptPrinter::format_message("day-1", &Message::new("Ada", "Ben is lying."));
        assert!(spoken.contains("[day-1]"));
        assert!(spoken.contains("Ada"));
        assert!(spoken.contains("Ben is lying."));

        let narrated = TranscriptPrinter::format_message("night-1", &Message::narration("Night falls."));
        assert!(narrated.contains("Night falls."));
        assert!(!narrated.contains("Moderator"));
    }

    #[test]
    fn test_deaths_and_phases() {
        let deaths = TranscriptPrinter::format_deaths(2, &["Ada".to_string(), "Ben".to_string()]);
        assert!(deaths.contains("Ada, Ben"));

        let phase = TranscriptPrinter::format_phase(4, &GamePhase::initial());
        assert!(phase.contains("game 4"));
        assert!(phase.contains("night (round 1)"));
    }
}
