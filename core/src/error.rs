//! Error types for the stopwatch engine

use thiserror::Error;

/// Errors while parsing a refresh interval such as `0.25`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("interval is empty")]
    Empty,

    #[error("missing whole seconds before '.'")]
    MissingInteger,

    #[error("missing digits after '.'")]
    MissingFraction,

    #[error("unexpected character {found:?} at position {position}")]
    UnexpectedCharacter { found: char, position: usize },

    #[error("number of seconds is too large")]
    OutOfRange,
}

/// Errors reading the monotonic clock
#[derive(Debug, Error)]
pub enum StopwatchError {
    #[error("monotonic clock unavailable")]
    ClockUnavailable(#[source] std::io::Error),
}

/// Errors while arming the refresh scheduler
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("refresh interval must be greater than zero")]
    InvalidInterval,

    #[error("refresh interval is too large")]
    IntervalTooLarge,

    #[error("failed to register {what}")]
    Init {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that end the refresh loop early
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to read elapsed time")]
    Clock(#[from] StopwatchError),

    #[error("failed to write elapsed time")]
    Render(#[source] std::io::Error),
}

/// Errors loading the persisted configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("invalid refresh_interval in configuration: {value}")]
    InvalidInterval {
        value: String,
        #[source]
        source: IntervalError,
    },
}
