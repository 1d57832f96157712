//! Presentation-level configuration
//!
//! Command-line flags layered over the `[output]` section of the config file.

use crate::cli::commands::Cli;
use crate::progress::reporter::ProgressReporter;
use crate::progress::transcript::TranscriptPrinter;
use werewolf_application::{GameProgressNotifier, NoProgress};
use werewolf_domain::OutputFormat;

/// How progress is shown while games run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// Progress bar over the batch
    Bar,
    /// Every message of every game
    Transcript,
    /// Nothing until the report
    Silent,
}

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    pub progress: ProgressMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            progress: ProgressMode::Bar,
        }
    }
}

impl OutputConfig {
    /// Merge CLI flags over file values. The CLI wins when both are set.
    pub fn resolve(cli: &Cli, file_format: Option<OutputFormat>, file_color: bool) -> Self {
        let format = cli
            .output
            .map(OutputFormat::from)
            .or(file_format)
            .unwrap_or_default();

        // JSON goes to stdout untouched, so nothing else is drawn
        let progress = if cli.quiet || format == OutputFormat::Json {
            ProgressMode::Silent
        } else if cli.transcript {
            ProgressMode::Transcript
        } else {
            ProgressMode::Bar
        };

        Self {
            format,
            color: file_color,
            progress,
        }
    }

    /// Turn colors off globally if configured
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }

    pub fn notifier(&self) -> Box<dyn GameProgressNotifier> {
        match self.progress {
            ProgressMode::Bar => Box::new(ProgressReporter::new()),
            ProgressMode::Transcript => Box::new(TranscriptPrinter),
            ProgressMode::Silent => Box::new(NoProgress),
        }
    }
}
