// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time source for the store.
//!
//! Every window check and ballot timestamp reads "now" from the store's
//! clock, so a fixed clock makes behavior at window boundaries reproducible.

use std::sync::{Arc, Mutex, PoisonError};
use time::{Duration, OffsetDateTime};

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant (UTC).
    fn now(&self) -> OffsetDateTime;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A manually controlled clock.
///
/// Clones share the same instant, so a test can keep a handle and move time
/// while the store holds another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Arc<Mutex<OffsetDateTime>>,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    #[must_use]
    pub fn new(instant: OffsetDateTime) -> Self {
        Self {
            instant: Arc::new(Mutex::new(instant)),
        }
    }

    /// Moves the clock to `instant`.
    pub fn set(&self, instant: OffsetDateTime) {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    /// Moves the clock forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        let mut guard = self.instant.lock().unwrap_or_else(PoisonError::into_inner);
        *guard += duration;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
