//! Tracing setup for the `dualbat` binary.
//!
//! The interactive view owns the terminal, so it logs to a rolling file in
//! the runtime dir; every other command logs to stderr. Our own crates log
//! at the configured level while dependencies stay at `warn` or quieter.
//! `RUST_LOG`, when set, replaces the whole filter.

use std::path::Path;
use std::sync::OnceLock;

use color_eyre::eyre::{Result, WrapErr};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{runtime_dir, LogLevel};

const LOG_FILE_PREFIX: &str = "dualbat";
const LOG_FILES_KEPT: usize = 7;

/// Targets that follow the configured level.
const CRATE_TARGETS: [&str; 3] = ["dualbat", "dualbat_engine", "dualbat_platform"];

static INIT: OnceLock<()> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    File,
    Stderr,
}

/// Keeps the file writer alive and remembers why file logging could not be
/// set up, if it couldn't.
#[derive(Default)]
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
    file_error: Option<String>,
}

impl LogGuard {
    pub fn file_error(&self) -> Option<&str> {
        self.file_error.as_deref()
    }
}

pub fn init(level: LogLevel, mode: LogMode, cli_override: Option<LogLevel>) -> LogGuard {
    let mut guard = LogGuard::default();

    INIT.get_or_init(|| {
        let Some(level) = cli_override.unwrap_or(level).as_tracing_level() else {
            return;
        };

        match mode {
            LogMode::File => match init_file_logging(level, &runtime_dir()) {
                Ok(worker) => guard._worker = Some(worker),
                Err(e) => guard.file_error = Some(format!("{:#}", e)),
            },
            LogMode::Stderr => init_stderr_logging(level),
        }
    });

    guard
}

fn build_env_filter(level: Level) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => scoped_filter(level),
    }
}

fn scoped_filter(level: Level) -> EnvFilter {
    let others = LevelFilter::from_level(level).min(LevelFilter::WARN);
    let level = level.as_str().to_lowercase();
    let directives = CRATE_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::builder()
        .with_default_directive(others.into())
        .parse_lossy(directives)
}

fn init_file_logging(level: Level, log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .wrap_err_with(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(LOG_FILES_KEPT)
        .build(log_dir)
        .wrap_err_with(|| format!("Failed to open log file in {}", log_dir.display()))?;

    let (writer, worker) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    Ok(worker)
}

fn init_stderr_logging(level: Level) {
    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(UtcTime::rfc_3339()),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scoped_filter_targets_our_crates() {
        let filter = scoped_filter(Level::DEBUG).to_string().to_lowercase();
        for target in CRATE_TARGETS {
            assert!(filter.contains(&format!("{}=debug", target)), "{}", filter);
        }
        assert!(filter.contains("warn"), "{}", filter);
    }

    #[test]
    fn test_quiet_levels_stay_quiet_for_dependencies() {
        let filter = scoped_filter(Level::ERROR).to_string().to_lowercase();
        assert!(filter.contains("dualbat_platform=error"), "{}", filter);
        assert!(!filter.contains("warn"), "{}", filter);
    }

    #[test]
    fn test_unusable_log_dir_is_reported() {
        let td = TempDir::new().unwrap();
        let blocker = td.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = init_file_logging(Level::INFO, &blocker.join("logs")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to create log directory"));
    }
}
