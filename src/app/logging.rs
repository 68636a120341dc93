//! Usage: Process-wide tracing setup (stdout + daily-rolling file under `logs/`).

use std::path::Path;
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

pub const LOG_DIR_NAME: &str = "logs";
pub const LOG_FILE_PREFIX: &str = "the-hq-project.log";
const DEFAULT_FILTER: &str = "info";

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Only the first call has an effect; later calls
/// (and calls after another subscriber was installed) return `false`.
pub fn init(log_dir: &Path) -> bool {
    if FILE_GUARD.get().is_some() {
        return false;
    }

    let file_layer = match std::fs::create_dir_all(log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            if FILE_GUARD.set(guard).is_err() {
                return false;
            }
            Some(fmt::layer().with_ansi(false).with_writer(writer))
        }
        Err(err) => {
            eprintln!("failed to create log dir {}: {err}", log_dir.display());
            None
        }
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true))
        .with(file_layer);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }
    if let Err(err) = tracing_log::LogTracer::init() {
        tracing::debug!("log bridge not installed: {err}");
    }

    tracing::info!(dir = %log_dir.display(), "logging initialized");
    true
}

