//! Progress reporting for batch execution

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use werewolf_application::GameProgressNotifier;
use werewolf_domain::{GamePhase, GameResult, Winner};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    werewolves: usize,
    villagers: usize,
    failed: usize,
}

impl Tally {
    fn record(&mut self, result: &GameResult) {
        match result.winner {
            Winner::Werewolves => self.werewolves += 1,
            Winner::Villagers => self.villagers += 1,
            Winner::Unknown => self.failed += 1,
        }
    }

    fn summary(&self) -> String {
        let mut text = format!("wolves {} / village {}", self.werewolves, self.villagers);
        if self.failed > 0 {
            text.push_str(&format!(" / failed {}", self.failed));
        }
        text
    }
}

/// Reports batch progress with a progress bar
pub struct ProgressReporter {
    multi: MultiProgress,
    batch_bar: Mutex<Option<ProgressBar>>,
    tally: Mutex<Tally>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(target),
            batch_bar: Mutex::new(None),
            tally: Mutex::new(Tally::default()),
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn set_message(&self, message: String) {
        if let Ok(bar) = self.batch_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(message);
        }
    }

    fn tally_summary(&self) -> String {
        self.tally
            .lock()
            .map(|t| t.summary())
            .unwrap_or_default()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GameProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total_games: usize) {
        let pb = self.multi.add(ProgressBar::new(total_games as u64));
        pb.set_style(Self::batch_style());
        pb.set_prefix("Games");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.batch_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_game_start(&self, game_id: u32, players: usize) {
        self.set_message(format!("game {} ({} players)", game_id, players));
    }

    fn on_phase(&self, game_id: u32, phase: &GamePhase) {
        self.set_message(format!("game {}: {}", game_id, phase));
    }

    fn on_game_complete(&self, result: &GameResult) {
        if let Ok(mut tally) = self.tally.lock() {
            tally.record(result);
        }
        let summary = self.tally_summary();

        if let Ok(bar) = self.batch_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(summary);
            pb.inc(1);
        }
    }

    fn on_batch_complete(&self, _results: &[GameResult]) {
        let summary = self.tally_summary();
        if let Ok(mut bar) = self.batch_bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("{} {}", "done:".green(), summary));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl GameProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, total_games: usize) {
        eprintln!("{} {} ({} games)", "->".cyan(), "Batch".bold(), total_games);
    }

    fn on_game_start(&self, game_id: u32, players: usize) {
        eprintln!("  {} game {} ({} players)", "->".cyan(), game_id, players);
    }

    fn on_game_complete(&self, result: &GameResult) {
        if result.failed {
            eprintln!(
                "  {} game {} (failed: {})",
                "x".red(),
                result.game_id,
                result.error_message.as_deref().unwrap_or("unknown")
            );
        } else {
            eprintln!(
                "  {} game {}: {} after {} rounds",
                "v".green(),
                result.game_id,
                result.winner,
                result.total_rounds
            );
        }
    }
}
