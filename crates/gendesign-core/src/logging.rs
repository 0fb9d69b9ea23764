//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/gendesign/logs/` because the terminal
/// itself is owned by the UI. Log level is controlled by the `GENDESIGN_LOG`
/// environment variable.
///
/// # Examples
/// ```bash
/// GENDESIGN_LOG=debug gendesign
/// GENDESIGN_LOG=gendesign_gen=trace gendesign
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "gendesign.log");

    // Default to info for our crates, warn for dependencies
    let env_filter = EnvFilter::try_from_env("GENDESIGN_LOG").unwrap_or_else(|_| {
        EnvFilter::new(
            "gendesign=info,gendesign_core=info,gendesign_gen=info,gendesign_app=info,gendesign_tui=info,warn",
        )
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("gendesign starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Base directory for all per-user data (logs, appearance store)
pub fn data_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("gendesign")
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    Ok(data_directory().join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("gendesign.log"))
}
