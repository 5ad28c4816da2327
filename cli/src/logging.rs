//! Logging setup
//!
//! Logs go to stderr only, since stdout carries the display. The default level
//! is WARN; set `DEBUG_LOGGING=1` for debug output from the stopwatch crates, or
//! `RUST_LOG` for full control.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_DIRECTIVE: &str = "warn";
const DEBUG_DIRECTIVE: &str = "warn,stopwatch_core=debug,stopwatch_cli=debug";

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if debug_logging {
            DEBUG_DIRECTIVE
        } else {
            DEFAULT_DIRECTIVE
        })
    });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    if tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .try_init()
        .is_ok()
    {
        tracing::debug!(debug_logging, "logging initialized");
    }
}
