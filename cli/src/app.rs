//! Startup sequence: resolve the interval, start the stopwatch, arm the
//! scheduler, then hand everything to the refresh loop.

use std::error::Error;
use std::time::Duration;

use stopwatch_core::{
    ConfigError, MonotonicClock, RefreshScheduler, RunError, RunSummary, SchedulerError,
    SignalInterrupt, Stopwatch, StopwatchConfig, StopwatchError, format_interval,
};
use thiserror::Error;

use crate::args::Options;
use crate::render;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("couldn't start stopwatch")]
    Stopwatch(#[from] StopwatchError),

    #[error("couldn't init refresh timer")]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    Run(#[from] RunError),
}

/// Flag value first, then the config file, then the built-in default.
/// `load_config` is only called when the flag is absent.
pub fn resolve_interval<F>(options: &Options, load_config: F) -> Result<Duration, ConfigError>
where
    F: FnOnce() -> StopwatchConfig,
{
    match options.refresh_interval {
        Some(interval) => Ok(interval),
        None => load_config().refresh_interval(),
    }
}

pub async fn run(options: Options) -> Result<RunSummary, AppError> {
    let interval = resolve_interval(&options, StopwatchConfig::load_or_default)?;
    tracing::debug!(interval = %format_interval(interval), "refresh interval resolved");

    let stopwatch = Stopwatch::new(MonotonicClock).start()?;
    let interrupt = SignalInterrupt::install()?;
    let scheduler = RefreshScheduler::arm(interval, interrupt)?;

    let mut renderer = render::stdout_renderer();
    let summary = stopwatch_core::run(stopwatch, scheduler, renderer.as_mut()).await?;
    Ok(summary)
}

/// Render an error with its whole source chain on one line.
pub fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
