// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Elections and their voting windows.
//!
//! ## Invariants
//!
//! - `end >= start`
//! - The tally strategy is bound at construction from the election type and
//!   never replaced
//! - The window is inclusive at both ends: at exactly `start` or `end` the
//!   election is active, not upcoming or ended

use crate::candidate::Candidate;
use crate::error::DomainError;
use crate::tally::{ElectionType, TallyStrategy, VoteCounts};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Where an election sits relative to a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectionStatus {
    /// Voting has not started yet.
    Upcoming,
    /// Voting is open.
    Active,
    /// Voting has closed.
    Ended,
}

impl ElectionStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Active => "Active",
            Self::Ended => "Ended",
        }
    }
}

impl std::fmt::Display for ElectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An election: a candidate roster, a voting window and a bound tally strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Election {
    /// The unique identifier.
    id: String,
    /// The election name.
    name: String,
    /// A longer description.
    description: String,
    /// Start of the voting window (inclusive).
    start: OffsetDateTime,
    /// End of the voting window (inclusive).
    end: OffsetDateTime,
    /// The identity that created this election.
    created_by: String,
    /// Candidates in insertion order.
    candidates: Vec<Candidate>,
    /// The bound counting algorithm.
    voting_method: TallyStrategy,
}

impl Election {
    /// Creates a new `Election` with an empty roster.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier
    /// * `name` - The election name
    /// * `description` - A longer description
    /// * `start` - Start of the voting window
    /// * `end` - End of the voting window
    /// * `created_by` - The creating identity's id
    /// * `election_type` - Selects the tally strategy
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidElectionWindow` if `end` is before `start`.
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        start: OffsetDateTime,
        end: OffsetDateTime,
        created_by: &str,
        election_type: ElectionType,
    ) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidElectionWindow { start, end });
        }

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            start,
            end,
            created_by: created_by.to_string(),
            candidates: Vec::new(),
            voting_method: TallyStrategy::for_election_type(election_type),
        })
    }

    /// Returns the unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the election name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the start of the voting window.
    #[must_use]
    pub const fn start(&self) -> OffsetDateTime {
        self.start
    }

    /// Returns the end of the voting window.
    #[must_use]
    pub const fn end(&self) -> OffsetDateTime {
        self.end
    }

    /// Returns the creating identity's id.
    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Returns the roster in insertion order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Returns the election type.
    #[must_use]
    pub const fn election_type(&self) -> ElectionType {
        self.voting_method.election_type()
    }

    /// Returns the bound tally strategy.
    #[must_use]
    pub const fn voting_method(&self) -> &TallyStrategy {
        &self.voting_method
    }

    /// Appends a candidate to the roster.
    ///
    /// Duplicate ids are not checked.
    pub fn add_candidate(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Returns whether `now` falls inside the inclusive voting window.
    #[must_use]
    pub fn is_active_at(&self, now: OffsetDateTime) -> bool {
        now >= self.start && now <= self.end
    }

    /// Returns whether voting has not yet started at `now`.
    #[must_use]
    pub fn is_future_at(&self, now: OffsetDateTime) -> bool {
        now < self.start
    }

    /// Returns whether voting has closed at `now`.
    #[must_use]
    pub fn is_past_at(&self, now: OffsetDateTime) -> bool {
        now > self.end
    }

    /// Classifies the election relative to `now`.
    #[must_use]
    pub fn status_at(&self, now: OffsetDateTime) -> ElectionStatus {
        if self.is_active_at(now) {
            ElectionStatus::Active
        } else if self.is_future_at(now) {
            ElectionStatus::Upcoming
        } else {
            ElectionStatus::Ended
        }
    }

    /// Records a voter's selection in the bound tally strategy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateVote` if the strategy's ledger already
    /// holds a selection for this voter, or `DomainError::EmptyRanking` if a
    /// ranked selection names no candidate.
    pub fn record_selection(&mut self, voter_id: &str, selection: &str) -> Result<(), DomainError> {
        self.voting_method.cast_vote(voter_id, selection)
    }

    /// Returns the current counts from the bound tally strategy.
    #[must_use]
    pub fn results(&self) -> VoteCounts {
        self.voting_method.calculate_results()
    }
}
