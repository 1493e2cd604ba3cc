//! Periodic sky recomputation.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use skyglow_host::{TickFn, TimerHandle};

use crate::state::SkyTheme;

/// Default time between sky recomputations.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Owns the single timer that keeps [`SkyTheme`] in step with the clock.
///
/// Dropping the refresher stops it.
pub struct SkyRefresher {
    theme: Arc<SkyTheme>,
    interval: Mutex<Duration>,
    timer: Mutex<Option<TimerHandle>>,
}

impl SkyRefresher {
    pub fn new(theme: Arc<SkyTheme>) -> Self {
        Self::with_interval(theme, DEFAULT_REFRESH_INTERVAL)
    }

    pub fn with_interval(theme: Arc<SkyTheme>, interval: Duration) -> Self {
        Self {
            theme,
            interval: Mutex::new(interval),
            timer: Mutex::new(None),
        }
    }

    pub fn theme(&self) -> &Arc<SkyTheme> {
        &self.theme
    }

    pub fn interval(&self) -> Duration {
        self.interval
            .lock()
            .map(|i| *i)
            .unwrap_or(DEFAULT_REFRESH_INTERVAL)
    }

    pub fn is_running(&self) -> bool {
        self.timer.lock().map(|t| t.is_some()).unwrap_or(false)
    }

    /// Refresh now and schedule further refreshes.
    ///
    /// Calling again while running refreshes once more but never adds a
    /// second timer. Without a scheduler capability this does nothing.
    pub fn start(&self) {
        let Some(scheduler) = self.theme.host().scheduler() else {
            tracing::debug!("no scheduler available, sky refresh not started");
            return;
        };

        self.theme.refresh();

        let Ok(mut timer) = self.timer.lock() else {
            return;
        };
        if timer.is_some() {
            return;
        }

        let interval = self.interval();
        let theme = Arc::clone(&self.theme);
        let tick: TickFn = Arc::new(move || theme.refresh());
        match scheduler.set_interval(interval, tick) {
            Ok(handle) => {
                *timer = Some(handle);
                tracing::info!(?interval, "sky refresh started");
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to schedule sky refresh");
            }
        }
    }

    /// Cancel the timer. Safe when not running.
    pub fn stop(&self) {
        let handle = self.timer.lock().ok().and_then(|mut t| t.take());
        if let (Some(handle), Some(scheduler)) = (handle, self.theme.host().scheduler()) {
            scheduler.clear_interval(handle);
            tracing::info!("sky refresh stopped");
        }
    }

    /// Change the period, rescheduling if running.
    pub fn set_interval(&self, interval: Duration) {
        if let Ok(mut current) = self.interval.lock() {
            if *current == interval {
                return;
            }
            *current = interval;
        }
        if self.is_running() {
            self.stop();
            self.start();
        }
    }
}

impl Drop for SkyRefresher {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for SkyRefresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkyRefresher")
            .field("interval", &self.interval())
            .field("running", &self.is_running())
            .finish()
    }
}
