//! Current-time source for the home view.
//!
//! While active, [`ClockSource`] publishes the formatted wall time once at
//! start and then once per refresh interval. Missed ticks are not caught up.

use crate::engine::ticker::Ticker;
use crate::engine::time_source::TimeSource;
use crate::error::{runtime_handle, EngineError};
use chrono::NaiveDateTime;
use std::sync::Arc;
use std::time::Duration;

/// Default period between clock refreshes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Formats a wall time as 24-hour `HH:MM:SS`.
pub fn format_time(at: &NaiveDateTime) -> String {
    at.format("%H:%M:%S").to_string()
}

/// Periodically refreshed clock display.
#[derive(Debug)]
pub struct ClockSource {
    time: Arc<dyn TimeSource>,
    period: Duration,
    current: Option<String>,
    ticker: Option<Ticker<String>>,
}

impl ClockSource {
    /// Creates a stopped clock with the default one-second refresh.
    pub fn new(time: Arc<dyn TimeSource>) -> Self {
        Self::with_interval(time, DEFAULT_REFRESH_INTERVAL)
    }

    /// Creates a stopped clock with a custom refresh period.
    pub fn with_interval(time: Arc<dyn TimeSource>, period: Duration) -> Self {
        Self {
            time,
            period,
            current: None,
            ticker: None,
        }
    }

    /// Starts periodic production, restarting it if already running.
    ///
    /// The current time is formatted and queued immediately, so
    /// [`current`](Self::current) is populated before this returns.
    pub fn start(&mut self) -> Result<(), EngineError> {
        let handle = runtime_handle("clock")?;
        self.stop();

        let initial = format_time(&self.time.now());
        self.current = Some(initial.clone());

        let time = Arc::clone(&self.time);
        self.ticker = Some(Ticker::spawn(
            &handle,
            self.period,
            Some(initial),
            move || Some(format_time(&time.now())),
        ));
        tracing::debug!(period = ?self.period, "clock started");
        Ok(())
    }

    /// Stops production and discards any undelivered update.
    ///
    /// Safe to call repeatedly or on a clock that was never started.
    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            tracing::debug!("clock stopped");
        }
        self.current = None;
    }

    /// Whether the clock is currently producing.
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Applies every queued update and returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let Some(ticker) = self.ticker.as_mut() else {
            return 0;
        };
        let mut applied = 0;
        while let Some(time) = ticker.try_next() {
            self.current = Some(time);
            applied += 1;
        }
        applied
    }

    /// Waits for the next time string. Returns `None` when stopped.
    pub async fn next(&mut self) -> Option<String> {
        let time = self.ticker.as_mut()?.recv().await?;
        self.current = Some(time.clone());
        Some(time)
    }

    /// Most recent time string, or `None` while stopped.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl Drop for ClockSource {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::time_source::FixedClock;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid datetime")
    }

    /// Clock that advances one second on every read.
    #[derive(Debug)]
    struct SteppingClock(Mutex<NaiveDateTime>);

    impl TimeSource for SteppingClock {
        fn now(&self) -> NaiveDateTime {
            let mut guard = self.0.lock().unwrap_or_else(|e| e.into_inner());
            let now = *guard;
            *guard += chrono::Duration::seconds(1);
            now
        }
    }

    #[test]
    fn format_time_is_zero_padded_24_hour() {
        assert_eq!(format_time(&at(7, 5, 9)), "07:05:09");
        assert_eq!(format_time(&at(23, 59, 59)), "23:59:59");
        assert_eq!(format_time(&at(0, 0, 0)), "00:00:00");
    }

    #[test]
    fn start_outside_runtime_is_environment_error() {
        let mut clock = ClockSource::new(Arc::new(FixedClock(at(6, 0, 0))));
        let err = clock.start().expect_err("no runtime available");
        assert!(matches!(err, EngineError::EnvironmentUnavailable { .. }));
        assert!(!clock.is_running());
        assert_eq!(clock.current(), None);
    }

    #[test]
    fn stop_without_start_is_noop() {
        let mut clock = ClockSource::new(Arc::new(FixedClock(at(6, 0, 0))));
        clock.stop();
        clock.stop();
        assert!(!clock.is_running());
        assert_eq!(clock.poll(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn start_publishes_current_time_immediately() {
        let mut clock = ClockSource::new(Arc::new(FixedClock(at(6, 30, 15))));
        clock.start().expect("runtime available");
        assert_eq!(clock.current(), Some("06:30:15"));
        assert_eq!(clock.poll(), 1, "initial snapshot is queued");
    }

    #[tokio::test(start_paused = true)]
    async fn refreshes_every_second() {
        let mut clock = ClockSource::new(Arc::new(SteppingClock(Mutex::new(at(6, 0, 0)))));
        clock.start().expect("runtime available");
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(clock.poll(), 3);
        assert_eq!(clock.current(), Some("06:00:02"));
    }

    #[tokio::test(start_paused = true)]
    async fn next_yields_in_order() {
        let mut clock = ClockSource::new(Arc::new(SteppingClock(Mutex::new(at(6, 0, 0)))));
        clock.start().expect("runtime available");
        assert_eq!(clock.next().await.as_deref(), Some("06:00:00"));
        assert_eq!(clock.next().await.as_deref(), Some("06:00:01"));
        assert_eq!(clock.current(), Some("06:00:01"));
    }

    #[tokio::test(start_paused = true)]
    async fn no_updates_after_stop() {
        let mut clock = ClockSource::new(Arc::new(SteppingClock(Mutex::new(at(6, 0, 0)))));
        clock.start().expect("runtime available");
        tokio::time::sleep(Duration::from_millis(1500)).await;
        clock.stop();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(clock.poll(), 0);
        assert_eq!(clock.current(), None);
        assert_eq!(clock.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_resets_the_stream() {
        let mut clock = ClockSource::new(Arc::new(FixedClock(at(8, 0, 0))));
        clock.start().expect("runtime available");
        tokio::time::sleep(Duration::from_millis(2500)).await;
        clock.start().expect("restart");
        assert_eq!(clock.poll(), 1, "only the fresh initial snapshot remains");
    }

    #[tokio::test(start_paused = true)]
    async fn custom_interval_is_respected() {
        let mut clock = ClockSource::with_interval(
            Arc::new(FixedClock(at(8, 0, 0))),
            Duration::from_millis(250),
        );
        clock.start().expect("runtime available");
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(clock.poll(), 5);
    }
}
