use std::sync::atomic::{ AtomicU64, Ordering };

use chrono::Utc;

use crate::models::common::Timestamp;
use crate::traits::clock::Clock;

/// Wall clock that never reports a time earlier than one it already handed out
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicU64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let wall = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let previous = self.last.fetch_max(wall, Ordering::SeqCst);
        Timestamp::from_millis(previous.max(wall))
    }
}

/// Deterministic clock: starts at a fixed time and moves forward by `step` on every read
#[derive(Debug)]
pub struct ManualClock {
    current: AtomicU64,
    step: u64,
}

impl ManualClock {
    pub fn new(start: Timestamp, step_ms: u64) -> Self {
        Self {
            current: AtomicU64::new(start.as_millis()),
            step: step_ms,
        }
    }

    /// A clock frozen at `start`
    pub fn fixed(start: Timestamp) -> Self {
        Self::new(start, 0)
    }

    /// The time the next read will return, without advancing
    pub fn peek(&self) -> Timestamp {
        Timestamp::from_millis(self.current.load(Ordering::SeqCst))
    }

    /// Move the clock forward by `millis`, stopping at the largest representable time
    pub fn advance(&self, millis: u64) {
        self.bump(millis);
    }

    /// Move the clock forward to `to`; earlier times are ignored
    pub fn set(&self, to: Timestamp) {
        self.current.fetch_max(to.as_millis(), Ordering::SeqCst);
    }

    /// Add `millis` without wrapping and return the time before the addition
    fn bump(&self, millis: u64) -> u64 {
        match self.current.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
            Some(current.saturating_add(millis))
        }) {
            Ok(previous) | Err(previous) => previous,
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.bump(self.step))
    }
}
