// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An immutable record of one cast ballot.
///
/// The selection is kept exactly as submitted: a single candidate id for
/// plurality elections, or comma-separated candidate ids in preference order
/// for ranked elections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotRecord {
    /// The unique identifier.
    id: String,
    /// The voter who cast this ballot.
    voter_id: String,
    /// The election the ballot was cast in.
    election_id: String,
    /// The raw candidate selection.
    selection: String,
    /// When the ballot was accepted (UTC).
    #[serde(with = "time::serde::rfc3339")]
    cast_at: OffsetDateTime,
}

impl BallotRecord {
    /// Creates a new `BallotRecord`.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier
    /// * `voter_id` - The voter casting the ballot
    /// * `election_id` - The election the ballot belongs to
    /// * `selection` - The raw candidate selection
    /// * `cast_at` - The acceptance timestamp
    #[must_use]
    pub fn new(
        id: &str,
        voter_id: &str,
        election_id: &str,
        selection: &str,
        cast_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: id.to_string(),
            voter_id: voter_id.to_string(),
            election_id: election_id.to_string(),
            selection: selection.to_string(),
            cast_at,
        }
    }

    /// Returns the unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the voter id.
    #[must_use]
    pub fn voter_id(&self) -> &str {
        &self.voter_id
    }

    /// Returns the election id.
    #[must_use]
    pub fn election_id(&self) -> &str {
        &self.election_id
    }

    /// Returns the raw selection.
    #[must_use]
    pub fn selection(&self) -> &str {
        &self.selection
    }

    /// Returns the acceptance timestamp.
    #[must_use]
    pub const fn cast_at(&self) -> OffsetDateTime {
        self.cast_at
    }
}
