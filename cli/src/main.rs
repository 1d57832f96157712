//! CLI entrypoint for Werewolf Quorum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use werewolf_application::{
    RunBatchInput, RunBatchUseCase, RunGameUseCase, compare_with_baseline,
};
use werewolf_domain::OutputFormat;
use werewolf_infrastructure::{
    AgentKind, ConfigLoader, ConfiguredAgentFactory, FileConfig, JsonResultStore,
    JsonlConversationLogger,
};
use werewolf_presentation::{
    AgentChoice, Cli, ConsoleFormatter, OutputConfig, OutputFormatter,
};

/// Set up stderr logging from the verbosity flag, plus an optional log file.
///
/// The returned guard must live until exit so the file writer flushes.
fn init_logging(verbose: u8, file: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match file.and_then(open_log_file) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

fn open_log_file(
    path: &Path,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let file_name = path.file_name()?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Could not create log directory {}: {}", dir.display(), e);
        return None;
    }
    let appender = tracing_appender::rolling::never(dir, file_name);
    Some(tracing_appender::non_blocking(appender))
}

/// Layer command-line flags over the loaded file configuration
fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(agent) = cli.agent {
        config.agents.kind = match agent {
            AgentChoice::Heuristic => AgentKind::Heuristic,
            AgentChoice::Llm => AgentKind::Llm,
        };
    }
    if let Some(seed) = cli.seed {
        config.agents.seed = Some(seed);
    }
    for role in &cli.enhance {
        if !config.agents.is_enhanced(*role) {
            config.agents.enhanced_roles.push(*role);
        }
    }
    if let Some(path) = &cli.results {
        config.output.results_path = Some(path.clone());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&cli, &mut config);

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref());
    info!("Starting Werewolf Quorum");

    config.validate().context("Invalid configuration")?;

    let output_config = OutputConfig::resolve(&cli, config.output.format, config.output.color);
    output_config.apply_color();

    // === Dependency Injection ===
    let factory = Arc::new(
        ConfiguredAgentFactory::from_config(&config).context("Failed to set up agents")?,
    );
    let game_config = config.game.to_game_config();

    let mut game = RunGameUseCase::new(factory, game_config.clone());
    if let Some(dir) = &config.logging.transcript_dir {
        match JsonlConversationLogger::new(dir) {
            Some(logger) => {
                info!("Writing transcripts to {}", logger.dir().display());
                game = game.with_conversation_logger(Arc::new(logger));
            }
            None => warn!("Transcripts disabled"),
        }
    }

    let mut use_case = RunBatchUseCase::new(game);
    if let Some(path) = &config.output.results_path {
        use_case = use_case.with_result_store(Arc::new(JsonResultStore::new(path)));
    }

    let mut input = RunBatchInput::new(cli.games);
    if let Some(seed) = config.agents.seed {
        input = input.with_seed(seed);
    }

    // Print header
    if !cli.quiet && output_config.format != OutputFormat::Json {
        println!();
        println!("+============================================================+");
        println!("|           Werewolf Quorum - AI Werewolf Tables             |");
        println!("+============================================================+");
        println!();
        println!(
            "Games: {}  Players: {}  Agents: {:?}",
            cli.games,
            game_config.total_players(),
            config.agents.kind
        );
        println!();
    }

    let progress = output_config.notifier();
    let output = use_case
        .execute_with_progress(input, progress.as_ref())
        .await
        .context("Batch failed")?;

    let comparison = match &cli.compare {
        Some(path) => {
            let baseline = JsonResultStore::new(path);
            Some(
                compare_with_baseline(&output.statistics, &baseline)
                    .with_context(|| format!("Cannot compare with {}", path.display()))?,
            )
        }
        None => None,
    };

    // Output results
    if output_config.format == OutputFormat::Json {
        println!(
            "{}",
            ConsoleFormatter::format_json_with_comparison(&output, comparison.as_ref())
        );
    } else {
        println!("{}", ConsoleFormatter.render(&output, output_config.format));
        if let Some(diff) = &comparison {
            println!(
                "{}",
                ConsoleFormatter::format_comparison(&output.statistics, diff)
            );
        }
    }

    if let Some(path) = &config.output.results_path {
        info!("Results saved to {}", path.display());
    }

    Ok(())
}
