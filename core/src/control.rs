//! The refresh loop
//!
//! Waits on the scheduler, reads the stopwatch on every tick and hands the
//! elapsed time to a [`Renderer`]. Returns once the scheduler reports a stop.

use std::io;
use std::time::Duration;

use crate::error::RunError;
use crate::scheduler::{Event, Interrupt, RefreshScheduler};
use crate::stopwatch::{Clock, StartedStopwatch};

/// Displays elapsed time somewhere.
pub trait Renderer {
    /// Called once before the first update.
    fn init(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn update(&mut self, elapsed: Duration) -> io::Result<()>;

    /// Called once after the last update. Ends the display and flushes it.
    fn finish(&mut self) -> io::Result<()>;
}

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of updates rendered
    pub ticks: u64,
    /// Elapsed time when the stop arrived
    pub elapsed: Duration,
}

/// Drive `renderer` from `scheduler` until a stop is requested.
pub async fn run<C, I, R>(
    stopwatch: StartedStopwatch<C>,
    mut scheduler: RefreshScheduler<I>,
    renderer: &mut R,
) -> Result<RunSummary, RunError>
where
    C: Clock,
    I: Interrupt,
    R: Renderer + ?Sized,
{
    renderer.init().map_err(RunError::Render)?;

    let mut ticks = 0u64;
    loop {
        match scheduler.wait().await {
            Event::Tick => {
                let elapsed = stopwatch.elapsed()?;
                renderer.update(elapsed).map_err(|e| {
                    tracing::warn!(error = %e, "renderer update failed");
                    RunError::Render(e)
                })?;
                ticks += 1;
            }
            Event::Stop => break,
        }
    }

    let elapsed = stopwatch.elapsed()?;
    renderer.finish().map_err(RunError::Render)?;

    tracing::debug!(ticks, ?elapsed, "refresh loop stopped");
    Ok(RunSummary { ticks, elapsed })
}
