//! Periodic producer task shared by the clock and the countdown.
//!
//! A [`Ticker`] owns one spawned tokio task and the receiving half of its
//! update channel. Dropping the ticker aborts the task and discards anything
//! still queued, so a torn-down source can never deliver a late update.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Handle to a running periodic producer.
#[derive(Debug)]
pub(crate) struct Ticker<T> {
    rx: mpsc::UnboundedReceiver<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Ticker<T> {
    /// Spawns a producer on `handle` that calls `produce` once per `period`.
    ///
    /// `initial`, when given, is queued before the task starts. The first call
    /// to `produce` happens one full period after spawning; returning `None`
    /// ends production and the task exits on its own. Late ticks are delayed
    /// rather than burst to catch up.
    pub(crate) fn spawn<F>(
        handle: &Handle,
        period: Duration,
        initial: Option<T>,
        mut produce: F,
    ) -> Self
    where
        F: FnMut() -> Option<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        if let Some(value) = initial {
            // rx is still held here, so the send cannot fail.
            let _ = tx.send(value);
        }
        let task = handle.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(value) = produce() else {
                    break;
                };
                if tx.send(value).is_err() {
                    break;
                }
            }
        });
        Self { rx, task }
    }

    /// Returns the next queued update without waiting.
    pub(crate) fn try_next(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Waits for the next update. Returns `None` once production has ended
    /// and the queue is drained.
    pub(crate) async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}

impl<T> Drop for Ticker<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
