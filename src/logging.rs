//! Logging configuration for Rowscope.
//!
//! The bridge usually runs inside a host application whose stdout may
//! carry the inspection transport itself, so the default sink is a file;
//! a stderr variant exists for tests and standalone debugging.

use std::fs::{self, File};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Initializes file-based logging.
///
/// Location: `~/.local/state/rowscope/rowscope.log` on Linux (XDG state
/// directory), or the platform-appropriate state/config directory
/// elsewhere. Failure to set up the file disables logging rather than
/// polluting the host's output streams.
pub fn init_file_logging() {
    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let Ok(log_file) = File::create(&log_path) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();
}

/// Initializes stderr logging for tests and debugging.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Returns the path for the log file.
pub fn get_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("rowscope").join("rowscope.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("rowscope").join("rowscope.log");
    }

    std::env::temp_dir().join("rowscope.log")
}
