pub mod config;
pub mod control;
pub mod error;
pub mod interval;
pub mod scheduler;
pub mod stopwatch;

// Re-exports for convenience
pub use config::{DEFAULT_REFRESH_INTERVAL, StopwatchConfig};
pub use control::{Renderer, RunSummary, run};
pub use error::{ConfigError, IntervalError, RunError, SchedulerError, StopwatchError};
pub use interval::{format_interval, parse_interval};
pub use scheduler::{
    Event, Interrupt, RefreshScheduler, SchedulerState, SignalInterrupt, StopHandle, StopListener,
    stop_channel,
};
pub use stopwatch::{Clock, MonotonicClock, StartedStopwatch, Stopwatch};
