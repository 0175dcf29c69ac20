//! Time source port.
//!
//! Abstracted so publish dates and article codes are deterministic in tests.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use parking_lot::Mutex;

/// Time source for consistent timestamp handling.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date (UTC), as stamped into `published_date`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Default system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for tests and replays.
#[derive(Debug)]
pub struct FixedClock {
    time: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(initial: DateTime<Utc>) -> Self {
        Self {
            time: Mutex::new(initial),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut time = self.time.lock();
        *time += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.time.lock() = to;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.time.lock()
    }
}
