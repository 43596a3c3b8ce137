//! CLI entrypoint for logbridge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod cli;

use anyhow::{Context, Result, bail};
use bridge_application::LoggerFactory;
use bridge_domain::Level;
use bridge_infrastructure::engines::TRACING_TARGET;
use bridge_infrastructure::levels::to_log_level;
use bridge_infrastructure::{ConfigLoader, EngineRegistry, FileConfig, LogFacadeBridge};
use clap::Parser;
use cli::Cli;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
    }

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?
    };

    // CLI flags take precedence over config files
    if let Some(engine) = &cli.engine {
        config.engine.name = engine.clone();
    }
    if let Some(path) = &cli.engine_path {
        config.engine.path = Some(path.clone());
    }
    config.validate()?;

    if cli.show_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let _guard = init_tracing(cli.verbose, config.engine.min_level, cli.log_file.as_deref())?;

    info!(engine = %config.engine.name, "Starting logbridge");

    // === Dependency Injection ===
    let registry = EngineRegistry::from_config(&config.engine);
    debug!(engines = ?registry.names(), "Engine registry ready");
    let factory = Arc::new(LoggerFactory::new(Arc::new(registry)));

    LogFacadeBridge::new(factory.clone())
        .install(config.bridge.max_level)
        .context("a `log` logger is already installed")?;

    if cli.messages.is_empty() {
        bail!("No messages given. Pass one or more messages to log.");
    }

    // Surface binding failures, which the `log` front end cannot report
    factory
        .binding()
        .engine()
        .with_context(|| format!("engine '{}' could not be bound", config.engine.name))?;

    emit_all(&cli, &config);
    log::logger().flush();

    Ok(())
}

fn emit_all(cli: &Cli, config: &FileConfig) {
    let level = to_log_level(cli.level);
    for message in &cli.messages {
        log::log!(target: &cli.target, level, "{}", message);
    }
    debug!(
        count = cli.messages.len(),
        max_level = %config.bridge.max_level,
        "Messages handed to the log facade"
    );
}

/// Install the diagnostics subscriber.
///
/// `-v` controls logbridge's own events; the tracing engine's target is
/// always admitted from `engine_level` up so forwarded records are not lost.
fn init_tracing(
    verbose: u8,
    engine_level: Level,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let diagnostics = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::new(format!(
        "{diagnostics},{TRACING_TARGET}={}",
        engine_level.as_str().to_ascii_lowercase()
    ));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            let file_name = path
                .file_name()
                .with_context(|| format!("invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(file_layer);

    // `SubscriberInitExt::init` would also claim the `log` logger slot,
    // which belongs to the bridge
    tracing::subscriber::set_global_default(subscriber)
        .context("a tracing subscriber is already installed")?;

    Ok(guard)
}
