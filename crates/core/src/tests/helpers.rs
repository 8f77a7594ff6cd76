// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FixedClock, Store};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

pub const TEST_NOW: OffsetDateTime = datetime!(2026-03-04 12:00 UTC);

pub fn create_test_clock() -> FixedClock {
    FixedClock::new(TEST_NOW)
}

/// Returns a seeded store and a handle on its clock.
pub fn create_sample_store() -> (Store, FixedClock) {
    let clock: FixedClock = create_test_clock();
    let store: Store = Store::with_sample_data(clock.clone()).expect("Valid sample data");
    (store, clock)
}

pub fn days(n: i64) -> Duration {
    Duration::days(n)
}
