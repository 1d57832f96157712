//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use werewolf_domain::Role;

/// Output format for batch results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every game followed by the statistics report
    Full,
    /// Only the statistics report
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for werewolf_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => werewolf_domain::OutputFormat::Full,
            OutputFormat::Summary => werewolf_domain::OutputFormat::Summary,
            OutputFormat::Json => werewolf_domain::OutputFormat::Json,
        }
    }
}

/// Who sits at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentChoice {
    /// Seeded rule-following bots, no network needed
    Heuristic,
    /// A chat completion model per player
    Llm,
}

/// CLI arguments for werewolf-quorum
#[derive(Parser, Debug)]
#[command(name = "werewolf-quorum")]
#[command(author, version, about = "Werewolf tables played by AI agents")]
#[command(long_about = r#"
Werewolf Quorum runs games of Werewolf between AI players and reports who wins.

Each game goes through the usual cycle:
1. Night: werewolves pick a victim, the witch may heal or poison, the seer checks a player
2. Day: everyone discusses, then votes someone out
3. A hunter who dies may take another player along

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./werewolf.toml     Project-level config
3. ~/.config/werewolf-quorum/config.toml   Global config

Example:
  werewolf-quorum --games 50 --seed 7
  werewolf-quorum --agent llm --transcript --output full
  werewolf-quorum -n 20 --enhance seer --results new.json --compare baseline.json
"#)]
pub struct Cli {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 1)]
    pub games: u32,

    /// Base seed for reproducible batches
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Agent kind (overrides [agents] kind)
    #[arg(short, long, value_enum)]
    pub agent: Option<AgentChoice>,

    /// Roles that receive extra strategy guidance (can be specified multiple times)
    #[arg(short, long = "enhance", value_name = "ROLE")]
    pub enhance: Vec<Role>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Save results as JSON to this file
    #[arg(short, long, value_name = "PATH")]
    pub results: Option<PathBuf>,

    /// Compare this batch against results saved earlier
    #[arg(long, value_name = "PATH")]
    pub compare: Option<PathBuf>,

    /// Print every game's table talk as it happens
    #[arg(short, long)]
    pub transcript: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
