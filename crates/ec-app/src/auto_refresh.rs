//! Auto-refresh timer.
//!
//! A single spawned interval task whose [`AbortHandle`] is kept so the loop
//! can be stopped on toggle-off or shutdown. Each tick invokes the callback,
//! which is expected to spawn its own work so a slow tick never delays the
//! next one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

pub struct AutoRefreshTimer {
    period: Duration,
    handle: Arc<Mutex<Option<AbortHandle>>>,
}

impl AutoRefreshTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            handle: Arc::new(Mutex::new(None)),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts (or restarts) the loop. The first tick fires one full period
    /// from now.
    pub async fn start<F>(&self, on_tick: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut guard = self.handle.lock().await;
        if let Some(existing) = guard.take() {
            existing.abort();
        }

        let period = self.period;
        let first_tick = Instant::now() + period;
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(first_tick, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                on_tick();
            }
        });

        *guard = Some(task.abort_handle());
        debug!(period_ms = period.as_millis() as u64, "auto-refresh started");
    }

    pub async fn stop(&self) {
        if let Some(handle) = self.handle.lock().await.take() {
            handle.abort();
            debug!("auto-refresh stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.lock().await.is_some()
    }
}

impl Drop for AutoRefreshTimer {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.handle.try_lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
            }
        }
    }
}
