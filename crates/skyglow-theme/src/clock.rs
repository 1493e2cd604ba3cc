//! Wall-clock source for sky resolution.

use std::sync::Mutex;

use chrono::{NaiveTime, Timelike};

pub trait Clock: Send + Sync {
    /// Local time of day.
    fn now(&self) -> NaiveTime;
}

/// The system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// A settable time, for previews and tests.
#[derive(Debug)]
pub struct FixedClock {
    time: Mutex<NaiveTime>,
}

impl FixedClock {
    pub fn new(time: NaiveTime) -> Self {
        Self {
            time: Mutex::new(time),
        }
    }

    /// `hour:minute`, wrapped into a day.
    pub fn at(hour: u32, minute: u32) -> Self {
        Self::new(hm(hour, minute))
    }

    pub fn set(&self, time: NaiveTime) {
        if let Ok(mut t) = self.time.lock() {
            *t = time;
        }
    }

    pub fn set_hm(&self, hour: u32, minute: u32) {
        self.set(hm(hour, minute));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        match self.time.lock() {
            Ok(t) => *t,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour % 24, minute % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// `HH:MM` of a time, for logs.
pub fn format_hm<T: Timelike>(time: &T) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
