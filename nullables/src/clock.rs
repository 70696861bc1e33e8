//! Nullable clock — deterministic time for testing.

use ballot_types::Clock;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Mutex;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Mutex<DateTime<Utc>>,
}

impl NullClock {
    /// Start the clock at a given Unix timestamp (seconds).
    pub fn new(initial_secs: i64) -> Self {
        Self {
            current: Mutex::new(Utc.timestamp_opt(initial_secs, 0).unwrap()),
        }
    }

    /// Start the clock at a specific instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(instant),
        }
    }

    /// Advance time by a number of seconds.
    pub fn advance(&self, secs: i64) {
        let mut current = self.current.lock().unwrap();
        *current += chrono::Duration::seconds(secs);
    }

    /// Set the time to a specific instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock().unwrap() = instant;
    }
}

impl Clock for NullClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap()
    }
}
