//! File logging
//!
//! The dashboard owns the terminal, so log records go to a file named on the
//! command line. Filtering follows `RUST_LOG` directives. Records from the
//! `log` macros are bridged into the subscriber.

use std::path::Path;
use thiserror::Error;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Filter used when `RUST_LOG` is unset or does not parse.
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("log file path has no file name")]
    NoFileName,

    #[error("cannot open log file: {0}")]
    Appender(#[from] InitError),

    #[error("logger already initialized: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Filter built from `RUST_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Append log records matching `filter` to `path`, creating it if needed.
pub fn init_file_logger(path: &Path, filter: EnvFilter) -> Result<(), LoggingError> {
    let file_name = path.file_name().ok_or(LoggingError::NoFileName)?;
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(appender)
        .finish()
        .try_init()?;
    Ok(())
}
