//! Logging and tracing bootstrap.
//!
//! Human-readable events go to stderr, filtered by `RUST_LOG` or the
//! CLI/config-derived level. When a log file or directory is configured,
//! a second JSONL layer writes there through a non-blocking appender; the
//! returned guard must be held for the life of the process so buffered
//! events are flushed on exit.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Where JSONL log output should go, if anywhere.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`WRITEGOOD_LOG_PATH`).
    pub log_path: Option<PathBuf>,
    /// Log directory (`WRITEGOOD_LOG_DIR`, falling back to config `log_dir`).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's `log_dir`
    /// as the fallback directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os("WRITEGOOD_LOG_PATH").map(PathBuf::from),
            log_dir: std::env::var_os("WRITEGOOD_LOG_DIR")
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }
}

/// Build the stderr filter from CLI flags and the configured level.
///
/// `RUST_LOG` always wins. Otherwise: `--quiet` forces errors only, each
/// `-v` raises verbosity past the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Returns the file appender's worker guard when file logging is active.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match file_writer(config)? {
        Some((writer, guard)) => {
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

/// Resolve the non-blocking file writer, if file logging is configured.
///
/// An explicit path wins over a directory; a directory gets daily-rotated
/// `writegood.jsonl` files.
fn file_writer(
    config: &ObservabilityConfig,
) -> anyhow::Result<Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)>> {
    if let Some(ref path) = config.log_path {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        return Ok(Some(tracing_appender::non_blocking(file)));
    }

    if let Some(ref dir) = config.log_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, "writegood.jsonl");
        return Ok(Some(tracing_appender::non_blocking(appender)));
    }

    Ok(None)
}
