// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use poll_vote::{FixedClock, Store};
use poll_vote_domain::Role;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::{AuthenticatedActor, CastVoteRequest, CreateElectionRequest};

pub const TEST_NOW: OffsetDateTime = datetime!(2026-03-04 12:00 UTC);

/// Returns a seeded store whose clock is frozen at `TEST_NOW`.
pub fn create_test_store() -> Store {
    Store::with_sample_data(FixedClock::new(TEST_NOW)).expect("Valid sample data")
}

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("1"), Role::Administrator)
}

pub fn create_test_voter() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("2"), Role::Voter)
}

pub fn create_valid_election_request() -> CreateElectionRequest {
    CreateElectionRequest {
        name: String::from("Club Treasurer"),
        description: String::from("Annual treasurer election"),
        start_date: TEST_NOW - Duration::hours(1),
        end_date: TEST_NOW + Duration::days(2),
        election_type: None,
    }
}

pub fn create_vote_request(voter_id: &str, selection: &str) -> CastVoteRequest {
    CastVoteRequest {
        voter_id: voter_id.to_string(),
        selection: selection.to_string(),
    }
}
