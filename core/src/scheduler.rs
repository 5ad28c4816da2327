//! Refresh scheduler
//!
//! Merges a repeating timer with an interrupt source and hands the caller one
//! [`Event`] per wakeup. The interrupt always wins over a tick that is ready at
//! the same time, and after [`Event::Stop`] no further ticks are delivered.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::error::SchedulerError;

/// What woke the scheduler up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The refresh interval elapsed
    Tick,
    /// A stop was requested. Terminal.
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Armed,
    Stopped,
}

/// An external "please stop" request.
pub trait Interrupt {
    /// Completes once a stop has been requested. Must be cancel safe.
    fn requested(&mut self) -> impl Future<Output = ()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Interrupt sources
// ─────────────────────────────────────────────────────────────────────────────

/// The process interrupt signal (SIGINT, Ctrl-C on Windows).
#[derive(Debug)]
pub struct SignalInterrupt {
    #[cfg(unix)]
    signal: tokio::signal::unix::Signal,
}

impl SignalInterrupt {
    /// Start listening for the interrupt signal. Must run inside the runtime.
    pub fn install() -> Result<Self, SchedulerError> {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            let signal =
                signal(SignalKind::interrupt()).map_err(|source| SchedulerError::Init {
                    what: "interrupt listener",
                    source,
                })?;
            Ok(Self { signal })
        }
        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }
}

impl Interrupt for SignalInterrupt {
    async fn requested(&mut self) {
        #[cfg(unix)]
        {
            // None means the signal driver shut down, which only happens on exit
            self.signal.recv().await;
        }
        #[cfg(not(unix))]
        {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "interrupt listener failed");
                std::future::pending::<()>().await;
            }
        }
    }
}

/// Create an in-process stop source.
pub fn stop_channel() -> (StopHandle, StopListener) {
    let (tx, rx) = mpsc::unbounded_channel();
    (StopHandle { tx }, StopListener { rx })
}

/// Sending half of [`stop_channel`]
#[derive(Debug, Clone)]
pub struct StopHandle {
    tx: mpsc::UnboundedSender<()>,
}

impl StopHandle {
    pub fn request_stop(&self) {
        // listener already gone means the scheduler is gone too
        let _ = self.tx.send(());
    }
}

/// Receiving half of [`stop_channel`]
#[derive(Debug)]
pub struct StopListener {
    rx: mpsc::UnboundedReceiver<()>,
}

impl Interrupt for StopListener {
    async fn requested(&mut self) {
        if self.rx.recv().await.is_none() {
            // every handle dropped: no request can arrive any more
            std::future::pending::<()>().await;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scheduler
// ─────────────────────────────────────────────────────────────────────────────

/// Periodic wakeups until interrupted
#[derive(Debug)]
pub struct RefreshScheduler<I> {
    period: Duration,
    timer: Interval,
    interrupt: I,
    state: SchedulerState,
}

impl<I: Interrupt> RefreshScheduler<I> {
    /// Register the repeating timer. The first tick fires one full `period`
    /// after arming. Must run inside the runtime.
    pub fn arm(period: Duration, interrupt: I) -> Result<Self, SchedulerError> {
        if period.is_zero() {
            return Err(SchedulerError::InvalidInterval);
        }

        // the timer adds `period` to every deadline, so the second one must fit too
        let start = Instant::now()
            .checked_add(period)
            .filter(|start| start.checked_add(period).is_some())
            .ok_or(SchedulerError::IntervalTooLarge)?;

        let mut timer = time::interval_at(start, period);
        // A slow consumer gets one tick for the whole backlog, not a burst
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::debug!(?period, "refresh timer armed");

        Ok(Self {
            period,
            timer,
            interrupt,
            state: SchedulerState::Armed,
        })
    }

    /// Suspend until the next wakeup and classify it.
    pub async fn wait(&mut self) -> Event {
        if self.state == SchedulerState::Stopped {
            return Event::Stop;
        }

        let event = tokio::select! {
            biased;
            () = self.interrupt.requested() => Event::Stop,
            _ = self.timer.tick() => Event::Tick,
        };

        if event == Event::Stop {
            tracing::debug!("stop requested");
            self.state = SchedulerState::Stopped;
        }
        event
    }

    pub fn interval(&self) -> Duration {
        self.period
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }
}
