//! Clock abstraction for voting-window checks.
//!
//! Timestamps are timezone-aware (`chrono::DateTime<Utc>`); the wire format
//! carries them as RFC 3339 strings with an offset. The ballot processor
//! never calls `Utc::now()` directly — it reads time through a `Clock`
//! collaborator so tests can pin the instant.

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The production clock — system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
