//! Periodic timers.
//!
//! [`TokioScheduler`] runs ticks on the current tokio runtime.
//! [`ManualScheduler`] only ticks when told to.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use skyglow_common::HostError;
use tokio::task::JoinHandle;

/// Callback run on every tick.
pub type TickFn = Arc<dyn Fn() + Send + Sync>;

/// Identifies a registered interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

pub trait Scheduler: Send + Sync {
    /// Run `tick` every `period`, first after one full period.
    fn set_interval(&self, period: Duration, tick: TickFn) -> Result<TimerHandle, HostError>;

    /// Cancel an interval. Unknown handles are ignored.
    fn clear_interval(&self, handle: TimerHandle);
}

// =============================================================================
// TOKIO
// =============================================================================

#[derive(Debug, Default)]
pub struct TokioScheduler {
    next_id: AtomicU64,
    tasks: Mutex<HashMap<TimerHandle, JoinHandle<()>>>,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.lock().map(|t| t.len()).unwrap_or(0)
    }
}

impl Scheduler for TokioScheduler {
    fn set_interval(&self, period: Duration, tick: TickFn) -> Result<TimerHandle, HostError> {
        if period.is_zero() {
            return Err(HostError::Scheduler("interval period must be non-zero".into()));
        }

        let runtime = tokio::runtime::Handle::try_current().map_err(|_| {
            tracing::warn!("no tokio runtime, interval not scheduled");
            HostError::NotSupported("timers outside a tokio runtime".into())
        })?;

        let handle = TimerHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        let task = runtime.spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tick();
            }
        });

        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.insert(handle, task);
        }
        tracing::debug!(id = handle.0, ?period, "interval scheduled");
        Ok(handle)
    }

    fn clear_interval(&self, handle: TimerHandle) {
        let task = self.tasks.lock().ok().and_then(|mut t| t.remove(&handle));
        if let Some(task) = task {
            task.abort();
            tracing::debug!(id = handle.0, "interval cleared");
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            for (_, task) in tasks.drain() {
                task.abort();
            }
        }
    }
}

// =============================================================================
// MANUAL
// =============================================================================

/// Scheduler driven by explicit [`ManualScheduler::fire_all`] calls.
#[derive(Default)]
pub struct ManualScheduler {
    next_id: AtomicU64,
    timers: Mutex<Vec<(TimerHandle, Duration, TickFn)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.timers.lock().map(|t| t.len()).unwrap_or(0)
    }

    pub fn periods(&self) -> Vec<Duration> {
        self.timers
            .lock()
            .map(|t| t.iter().map(|(_, period, _)| *period).collect())
            .unwrap_or_default()
    }

    /// Run every registered callback once.
    pub fn fire_all(&self) {
        // Clone out so a callback may touch the scheduler.
        let ticks: Vec<TickFn> = match self.timers.lock() {
            Ok(timers) => timers.iter().map(|(_, _, tick)| tick.clone()).collect(),
            Err(_) => return,
        };
        for tick in ticks {
            tick();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn set_interval(&self, period: Duration, tick: TickFn) -> Result<TimerHandle, HostError> {
        let handle = TimerHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut timers = self
            .timers
            .lock()
            .map_err(|_| HostError::Scheduler("timer table poisoned".into()))?;
        timers.push((handle, period, tick));
        Ok(handle)
    }

    fn clear_interval(&self, handle: TimerHandle) {
        if let Ok(mut timers) = self.timers.lock() {
            timers.retain(|(h, _, _)| *h != handle);
        }
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("active", &self.active_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, TickFn) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let tick: TickFn = Arc::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (count, tick)
    }

    #[test]
    fn manual_fire_and_clear() {
        let scheduler = ManualScheduler::new();
        let (count, tick) = counter();

        let handle = scheduler
            .set_interval(Duration::from_secs(30), tick)
            .unwrap();
        assert_eq!(scheduler.active_count(), 1);
        assert_eq!(scheduler.periods(), vec![Duration::from_secs(30)]);

        scheduler.fire_all();
        scheduler.fire_all();
        assert_eq!(count.load(Ordering::SeqCst), 2);

        scheduler.clear_interval(handle);
        assert_eq!(scheduler.active_count(), 0);
        scheduler.fire_all();
        assert_eq!(count.load(Ordering::SeqCst), 2);

        // Clearing twice is harmless.
        scheduler.clear_interval(handle);
    }

    #[test]
    fn manual_handles_are_distinct() {
        let scheduler = ManualScheduler::new();
        let (_, tick) = counter();
        let a = scheduler.set_interval(Duration::from_secs(1), tick.clone()).unwrap();
        let b = scheduler.set_interval(Duration::from_secs(1), tick).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn tokio_scheduler_without_runtime_is_unsupported() {
        let scheduler = TokioScheduler::new();
        let (_, tick) = counter();
        let err = scheduler
            .set_interval(Duration::from_secs(1), tick)
            .unwrap_err();
        assert!(matches!(err, HostError::NotSupported(_)));
        assert_eq!(scheduler.active_count(), 0);
    }

    #[tokio::test]
    async fn tokio_scheduler_rejects_zero_period() {
        let scheduler = TokioScheduler::new();
        let (_, tick) = counter();
        assert!(scheduler.set_interval(Duration::ZERO, tick).is_err());
    }

    #[tokio::test]
    async fn tokio_scheduler_ticks_until_cleared() {
        let scheduler = TokioScheduler::new();
        let (count, tick) = counter();

        let handle = scheduler
            .set_interval(Duration::from_millis(10), tick)
            .unwrap();
        // No immediate tick.
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(80)).await;
        let ticked = count.load(Ordering::SeqCst);
        assert!(ticked >= 2, "expected several ticks, got {ticked}");

        scheduler.clear_interval(handle);
        assert_eq!(scheduler.active_count(), 0);
        tokio::time::sleep(Duration::from_millis(20)).await;
        let after_clear = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_clear);
    }
}
