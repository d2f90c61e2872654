//! Process-wide logging bootstrap.
//!
//! Logs go to stderr through `flexi_logger`. `RUST_LOG`, when set, takes
//! precedence over the configured level. Initialization happens at most once;
//! later calls with the same level are no-ops.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;
use thiserror::Error;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    UnsupportedLevel(String),
    #[error("logging already initialized with level `{active}`; refusing to switch to `{requested}`")]
    AlreadyInitialized {
        active: &'static str,
        requested: &'static str,
    },
    #[error("failed to start logger: {0}")]
    Backend(#[from] flexi_logger::FlexiLoggerError),
}

pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, LoggingError> {
        let logger = Logger::try_with_env_or_str(level)?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()?;

        info!(
            "event=app_start status=ok platform={} version={} level={}",
            std::env::consts::OS,
            env!("CARGO_PKG_VERSION"),
            level
        );

        Ok(LoggingState {
            level,
            _logger: logger,
        })
    })?;

    if state.level != level {
        return Err(LoggingError::AlreadyInitialized {
            active: state.level,
            requested: level,
        });
    }
    Ok(())
}

/// Level logging was started with, if it was.
pub fn active_level() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert_eq!(normalize_level("trace").unwrap(), "trace");
    }

    #[test]
    fn normalize_level_rejects_unknown() {
        let err = normalize_level("loud").unwrap_err();
        assert!(matches!(err, LoggingError::UnsupportedLevel(ref l) if l == "loud"));
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_level_switch() {
        init_logging("info").expect("first init should succeed");
        init_logging("INFO").expect("same level should be idempotent");

        let err = init_logging("debug").expect_err("level switch should fail");
        assert!(matches!(
            err,
            LoggingError::AlreadyInitialized { active: "info", requested: "debug" }
        ));
        assert!(err.to_string().contains("refusing to switch"));
        assert_eq!(active_level(), Some("info"));
    }
}
