//! Countdown toward zero for the dashboard view.
//!
//! [`Countdown`] is the pure state: a remaining-seconds counter with a floor
//! at zero. [`CountdownEngine`] drives it with one repeating one-second tick
//! that ends itself once the counter reaches zero.
//!
//! # States
//!
//! | Remaining | State    | Ticks                    |
//! |-----------|----------|--------------------------|
//! | `> 0`     | Running  | one per second           |
//! | `0`       | Finished | none, done indicator set |

use crate::engine::ticker::Ticker;
use crate::error::{runtime_handle, EngineError};
use serde::Serialize;
use std::time::Duration;

/// Default countdown length in seconds (one hour).
pub const DEFAULT_INITIAL_SECONDS: i64 = 3600;

/// Period between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Formats whole seconds as zero-padded `HH:MM:SS`.
///
/// Hours are not wrapped at 24.
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// What the rendering layer shows for the countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "kebab-case")]
pub enum CountdownDisplay {
    /// Time left, formatted `HH:MM:SS`.
    Remaining(String),
    /// The countdown reached zero.
    Done,
}

/// Remaining-seconds counter with a floor at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
}

impl Countdown {
    /// Creates a countdown. Non-positive values start finished.
    pub fn new(initial_seconds: i64) -> Self {
        Self {
            remaining: u64::try_from(initial_seconds).unwrap_or(0),
        }
    }

    /// Seconds left.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Whether the counter has reached zero.
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Advances by one second. Returns the new remaining value, or `None`
    /// when already finished.
    pub fn tick(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.remaining)
    }

    /// Display form: the formatted time while running, `Done` at zero.
    pub fn display(&self) -> CountdownDisplay {
        if self.is_finished() {
            CountdownDisplay::Done
        } else {
            CountdownDisplay::Remaining(format_hms(self.remaining))
        }
    }
}

/// Ticking driver around [`Countdown`].
///
/// The engine's task emits exactly as many ticks as the countdown has
/// seconds and then exits; the engine applies each tick to its own state.
#[derive(Debug)]
pub struct CountdownEngine {
    period: Duration,
    state: Option<Countdown>,
    ticker: Option<Ticker<()>>,
}

impl CountdownEngine {
    /// Creates an idle engine with one-second ticks.
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    /// Creates an idle engine with a custom tick period.
    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            state: None,
            ticker: None,
        }
    }

    /// Starts a fresh countdown from `initial_seconds`.
    ///
    /// Any countdown in progress is cancelled first. A non-positive value
    /// starts directly in the finished state without scheduling any tick.
    pub fn start(&mut self, initial_seconds: i64) -> Result<(), EngineError> {
        let handle = runtime_handle("countdown")?;
        self.stop();

        let countdown = Countdown::new(initial_seconds);
        self.state = Some(countdown);
        if countdown.is_finished() {
            tracing::warn!(
                initial_seconds,
                "non-positive countdown duration, starting finished"
            );
            return Ok(());
        }

        let mut left = countdown.remaining();
        self.ticker = Some(Ticker::spawn(&handle, self.period, None, move || {
            if left == 0 {
                return None;
            }
            left -= 1;
            Some(())
        }));
        tracing::debug!(initial_seconds, "countdown started");
        Ok(())
    }

    /// Cancels the pending tick and clears the state.
    ///
    /// Safe to call repeatedly or on an engine that was never started.
    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            tracing::debug!("countdown stopped");
        }
        self.state = None;
    }

    /// Applies every queued tick and returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let (Some(ticker), Some(state)) = (self.ticker.as_mut(), self.state.as_mut()) else {
            return 0;
        };
        let mut applied = 0;
        while ticker.try_next().is_some() {
            if state.tick().is_some() {
                applied += 1;
            }
        }
        if state.is_finished() {
            self.ticker = None;
            tracing::info!("countdown finished");
        }
        applied
    }

    /// Waits for the next tick and returns the new remaining value.
    ///
    /// Returns `None` when idle or finished.
    pub async fn next(&mut self) -> Option<u64> {
        let ticker = self.ticker.as_mut()?;
        ticker.recv().await?;
        let state = self.state.as_mut()?;
        let remaining = state.tick()?;
        if state.is_finished() {
            self.ticker = None;
            tracing::info!("countdown finished");
        }
        Some(remaining)
    }

    /// Current countdown state, or `None` while idle.
    pub fn state(&self) -> Option<&Countdown> {
        self.state.as_ref()
    }

    /// Whether a started countdown has reached zero.
    pub fn is_finished(&self) -> bool {
        self.state.is_some_and(|s| s.is_finished())
    }

    /// Whether a tick is still scheduled.
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new()
    }
}
