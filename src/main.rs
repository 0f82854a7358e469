//! ChronoLog - markdown memo notes with YAML preambles
//!
//! Main entry point for the ChronoLog CLI.

mod cli;
mod cmd_memo;
mod cmd_timeline;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chronolog_config::{ConfigLoader, ConfigValidator, LoggingConfig};
use chronolog_store::{MemoStore, StoreConfig};

use cli::{Cli, Commands};

/// Install the tracing subscriber: stderr, plus daily log files when
/// `logging.file_dir` is set.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = match &logging.file_dir {
        Some(dir) => {
            let log_dir = PathBuf::from(ConfigLoader::expand_path(&dir.to_string_lossy()));
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("chronolog")
                .filename_suffix("log")
                .max_log_files(30)
                .build(&log_dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Flushes buffered lines on exit.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(file_layer)
        .init();

    Ok(())
}

fn resolve(work_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        work_dir.join(path)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let work_dir = match cli.work_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let config_path = resolve(&work_dir, &cli.config);
    let config = ConfigLoader::load_or_default(&config_path)?;
    let validation = ConfigValidator::validate(&config);

    init_tracing(&config.logging)?;
    debug!("Working directory: {}", work_dir.display());
    debug!("Config file: {}", config_path.display());

    for warning in validation.into_result()? {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    let store = MemoStore::new(&work_dir, &StoreConfig::from(&config));

    match cli.command {
        Commands::Init => cmd_memo::memo_init(&store).await,
        Commands::New { file } => cmd_memo::memo_new(&store, file.as_deref()).await,
        Commands::Edit { id, file } => cmd_memo::memo_edit(&store, &id, file.as_deref()).await,
        Commands::Show { id, raw } => cmd_memo::memo_show(&store, &id, raw).await,
        Commands::List { limit, format } => {
            let limit = limit.unwrap_or(config.list.limit);
            cmd_memo::memo_list(&store, limit, &format).await
        }
        Commands::Timeline { path, format } => {
            cmd_timeline::timeline(&resolve(&work_dir, &path), &format).await
        }
    }
}
