// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sample data for demonstrations and tests.
//!
//! One administrator, three voters, and three elections placed relative to
//! the store's clock:
//!
//! | Id | Window | Type | Candidates |
//! |---|---|---|---|
//! | "1" | last week to yesterday | plurality | none |
//! | "2" | yesterday to tomorrow | plurality | "1", "2", "3" |
//! | "3" | tomorrow to next week | ranked | "4", "5" |

use crate::clock::Clock;
use crate::error::CoreError;
use crate::store::Store;
use poll_vote_domain::{Candidate, Election, ElectionType, Identity};
use time::{Duration, OffsetDateTime};
use tracing::info;

/// Id of the seeded administrator.
pub const SAMPLE_ADMIN_ID: &str = "1";

impl Store {
    /// Creates a store populated with the sample data.
    ///
    /// # Errors
    ///
    /// Returns an error if a sample election window cannot be built.
    pub fn with_sample_data(clock: impl Clock + 'static) -> Result<Self, CoreError> {
        let mut store: Self = Self::with_clock(clock);
        let now: OffsetDateTime = store.now();

        store.insert_identity(Identity::administrator(
            SAMPLE_ADMIN_ID,
            "Admin User",
            "admin@example.com",
            "admin123",
            Identity::DEFAULT_ADMIN_LEVEL,
        ));
        store.insert_identity(Identity::voter(
            "2",
            "John Doe",
            "john@example.com",
            "password123",
            "V001",
        ));
        store.insert_identity(Identity::voter(
            "3",
            "Jane Smith",
            "jane@example.com",
            "password123",
            "V002",
        ));
        store.insert_identity(Identity::voter(
            "4",
            "Bob Brown",
            "bob@example.com",
            "password123",
            "V003",
        ));

        let last_week: OffsetDateTime = now - Duration::days(7);
        let yesterday: OffsetDateTime = now - Duration::days(1);
        let tomorrow: OffsetDateTime = now + Duration::days(1);
        let next_week: OffsetDateTime = now + Duration::days(7);

        store.insert_election(Election::new(
            "1",
            "Past Election",
            "This election has already ended",
            last_week,
            yesterday,
            SAMPLE_ADMIN_ID,
            ElectionType::SimpleMajority,
        )?);
        store.insert_election(Election::new(
            "2",
            "Current School President Election",
            "Vote for the next school president for the academic year 2025",
            yesterday,
            tomorrow,
            SAMPLE_ADMIN_ID,
            ElectionType::SimpleMajority,
        )?);
        store.insert_election(Election::new(
            "3",
            "Future Class Representative Election",
            "Vote for your class representatives",
            tomorrow,
            next_week,
            SAMPLE_ADMIN_ID,
            ElectionType::RankedChoice,
        )?);

        store.insert_candidate(Candidate::new(
            "1",
            "Alice Johnson",
            "Junior, Honor Student, Student Council Experience",
            "/candidate1.jpg",
            "2",
        ));
        store.insert_candidate(Candidate::new(
            "2",
            "Michael Chen",
            "Senior, Debate Team Captain, Leadership Experience",
            "/candidate2.jpg",
            "2",
        ));
        store.insert_candidate(Candidate::new(
            "3",
            "Sofia Rodriguez",
            "Sophomore, Class Treasurer, Community Service Leader",
            "/candidate3.jpg",
            "2",
        ));
        store.insert_candidate(Candidate::new(
            "4",
            "David Wilson",
            "Junior, Math Club President",
            "/candidate4.jpg",
            "3",
        ));
        store.insert_candidate(Candidate::new(
            "5",
            "Emily Turner",
            "Senior, Arts Committee Chair",
            "/candidate5.jpg",
            "3",
        ));

        info!("Loaded sample data: 4 identities, 3 elections, 5 candidates");
        Ok(store)
    }
}
