//! Logging setup.
//!
//! - one-line JSON records in a daily rotated `daily-bingo.log`
//! - coloured human-readable output on stdout in debug builds
//! - `log` crate records are bridged into `tracing`
//!
//! Filter precedence: `RUST_LOG`, then the configured level, then the
//! build profile default.

mod formatter;

use log::LevelFilter;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use formatter::{HumanReadableFormatter, JsonFormatter};

pub const LOG_FILE_NAME: &str = "daily-bingo.log";

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. Later calls are no-ops.
///
/// `level` is a directive such as `info` or `debug,bingo_app=trace`.
pub fn init_logger(log_dir: PathBuf, level: Option<&str>) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(&log_dir)?;

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let file_appender = rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    let json_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(JsonFormatter::new(env!("CARGO_PKG_VERSION")))
        .with_filter(build_filter(level, cfg!(debug_assertions)));

    let stdout_layer = if cfg!(debug_assertions) {
        Some(
            fmt::layer()
                .with_ansi(true)
                .event_format(HumanReadableFormatter::new())
                .with_filter(build_filter(level, true)),
        )
    } else {
        None
    };

    let subscriber = Registry::default().with(json_layer).with(stdout_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        target: "bingo::logging",
        log_dir = %log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "Debug" } else { "Release" },
        "Logger initialized"
    );

    Ok(())
}

fn build_filter(level: Option<&str>, debug_build: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level, debug_build)))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn default_directives(level: Option<&str>, debug_build: bool) -> String {
    match level.map(str::trim).filter(|l| !l.is_empty()) {
        Some(level) => level.to_string(),
        None if debug_build => "debug,bingo_app=trace,bingo_infrastructure=trace".to_string(),
        None => "info".to_string(),
    }
}
