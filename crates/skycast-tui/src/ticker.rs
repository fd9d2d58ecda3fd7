//! Cancellable fixed-interval tasks that feed the action channel.
//!
//! A [`PeriodicTask`] is owned by whoever started it. Stopping it, or just
//! dropping it, cancels the timer so nothing keeps firing into a torn-down
//! view.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub struct PeriodicTask {
    name: &'static str,
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl PeriodicTask {
    /// Send `make()` into `tx` every `period`, starting one period from now.
    ///
    /// The task ends on its own if the receiving side goes away.
    pub fn spawn<T, F>(
        name: &'static str,
        period: Duration,
        tx: mpsc::UnboundedSender<T>,
        mut make: F,
    ) -> Self
    where
        T: Send + 'static,
        F: FnMut() -> T + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            debug!(task = name, ?period, "Periodic task started");

            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(make()).is_err() {
                            break;
                        }
                    }
                }
            }

            debug!(task = name, "Periodic task stopped");
        });

        Self {
            name,
            token,
            handle: Some(handle),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Cancel the timer and wait for the task to wind down.
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!(task = self.name, "Periodic task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
