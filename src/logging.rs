//! File logging. The terminal belongs to the TUI, so nothing is written to
//! stdout or stderr.

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "post-project";

/// Install the global subscriber writing daily-rotated files under
/// `logs_dir`. `RUST_LOG` wins over `filter`. Keep the guard alive until
/// exit so buffered lines get flushed.
pub fn init_logging_to_dir(logs_dir: &Path, filter: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}
