use std::{path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::fmt::{format::FmtSpan, writer::MakeWriterExt};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "awdigest";
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber. Logs are written to daily rotated files under
/// `{state_dir}/logs`, `show_std` mirrors them to stdout.
pub fn enable_logging(
    state_dir: &Path,
    log_level: Option<LevelFilter>,
    show_std: bool,
) -> Result<()> {
    let log_dir = state_dir.join(LOG_DIR);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {log_dir:?}"))?;

    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(&log_dir)?;

    let stdout = std::io::stdout.with_filter(move |_| show_std);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter_directive(
            log_level,
            std::env::var("RUST_LOG").ok(),
        )))
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(stdout.and(appender))
        .pretty()
        .init();
    Ok(())
}

/// Only this crate's events are kept. An explicit level beats `RUST_LOG`.
fn filter_directive(log_level: Option<LevelFilter>, rust_log: Option<String>) -> String {
    let level = log_level
        .map(|v| v.to_string())
        .or(rust_log)
        .unwrap_or_else(|| DEFAULT_LEVEL.into());
    format!("{}={level}", env!("CARGO_PKG_NAME").replace('-', "_"))
}

pub static TEST_LOGGING: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .pretty()
        .init()
});
