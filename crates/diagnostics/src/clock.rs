//! Clock port so log timing can be driven by tests.

use chrono::{DateTime, Local};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// System clock - uses real local time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock that only moves when told to.
#[cfg(test)]
pub struct ManualClock(std::sync::Mutex<DateTime<Local>>);

#[cfg(test)]
impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self(std::sync::Mutex::new(start))
    }

    pub fn advance_millis(&self, millis: i64) {
        let mut now = self.0.lock().expect("clock lock");
        *now += chrono::Duration::milliseconds(millis);
    }
}

#[cfg(test)]
impl ClockPort for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.0.lock().expect("clock lock")
    }
}
