// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The process-wide election store.
//!
//! The store owns every identity, election, candidate and ballot record, plus
//! the single current-session identity. It enforces the rules that span
//! entities: ballot eligibility, one ballot per voter per election, and the
//! active-window check.
//!
//! ## Invariants
//!
//! - A voter's voted flag, the ballot record collection and the election's
//!   tally ledger are written together by `cast_vote` or not at all
//! - `votes_cast_count(e)` equals the number of ledger entries of `e`
//! - Candidates are written to the global collection and, when the owning
//!   election exists, to its roster, in the same call
//!
//! Mutating operations take `&mut self`; wrapping the store in a lock scoped
//! to the whole store serializes them across threads.

use crate::clock::{Clock, SystemClock};
use crate::error::CoreError;
use poll_vote_domain::{
    BallotRecord, Candidate, Election, ElectionType, Identity, ResultsSummary, VoteCounts,
    summarize_results,
};
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// In-memory owner of all election state.
pub struct Store {
    /// All identities in insertion order.
    identities: Vec<Identity>,
    /// All elections in insertion order.
    elections: Vec<Election>,
    /// All candidates in insertion order.
    candidates: Vec<Candidate>,
    /// All accepted ballots in cast order.
    ballots: Vec<BallotRecord>,
    /// The identity of the current session, if logged in.
    current_identity: Option<String>,
    /// Source of "now" for window checks and timestamps.
    clock: Box<dyn Clock>,
}

impl Store {
    /// Creates an empty store reading the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty store reading the given clock.
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            identities: Vec::new(),
            elections: Vec::new(),
            candidates: Vec::new(),
            ballots: Vec::new(),
            current_identity: None,
            clock: Box::new(clock),
        }
    }

    /// Returns the current instant from the store's clock.
    #[must_use]
    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    // ---- Session ----

    /// Authenticates by email and credential.
    ///
    /// Scans identities in insertion order and takes the first match. On
    /// success the match becomes the current-session identity.
    ///
    /// # Returns
    ///
    /// The authenticated identity, or `None` if nothing matched. Never fails.
    pub fn login(&mut self, email: &str, credential: &str) -> Option<&Identity> {
        let Some(identity) = self
            .identities
            .iter()
            .find(|identity| identity.authenticate(email, credential))
        else {
            info!(email = %email, "Login rejected");
            return None;
        };

        self.current_identity = Some(identity.id().to_string());
        info!(
            identity_id = %identity.id(),
            role = %identity.role(),
            "Login succeeded"
        );
        Some(identity)
    }

    /// Clears the current-session identity.
    pub fn logout(&mut self) {
        if let Some(identity_id) = self.current_identity.take() {
            info!(identity_id = %identity_id, "Logged out");
        }
    }

    /// Returns the current-session identity, if any.
    #[must_use]
    pub fn current_identity(&self) -> Option<&Identity> {
        self.current_identity
            .as_deref()
            .and_then(|id| self.identity(id))
    }

    /// Looks up an identity by id.
    #[must_use]
    pub fn identity(&self, identity_id: &str) -> Option<&Identity> {
        self.identities
            .iter()
            .find(|identity| identity.id() == identity_id)
    }

    // ---- Elections ----

    /// Returns all elections in insertion order.
    #[must_use]
    pub fn list_elections(&self) -> Vec<&Election> {
        self.elections.iter().collect()
    }

    /// Looks up an election by id.
    #[must_use]
    pub fn election(&self, election_id: &str) -> Option<&Election> {
        self.elections
            .iter()
            .find(|election| election.id() == election_id)
    }

    /// Returns elections whose window contains the current instant.
    #[must_use]
    pub fn active_elections(&self) -> Vec<&Election> {
        let now: OffsetDateTime = self.now();
        self.elections
            .iter()
            .filter(|election| election.is_active_at(now))
            .collect()
    }

    /// Returns elections that have not started at the current instant.
    #[must_use]
    pub fn future_elections(&self) -> Vec<&Election> {
        let now: OffsetDateTime = self.now();
        self.elections
            .iter()
            .filter(|election| election.is_future_at(now))
            .collect()
    }

    /// Returns elections that have ended at the current instant.
    #[must_use]
    pub fn past_elections(&self) -> Vec<&Election> {
        let now: OffsetDateTime = self.now();
        self.elections
            .iter()
            .filter(|election| election.is_past_at(now))
            .collect()
    }

    /// Creates and stores an election under a freshly generated id.
    ///
    /// The election type selects the tally strategy bound to the election.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if `end` is before `start`.
    pub fn create_election(
        &mut self,
        name: &str,
        description: &str,
        start: OffsetDateTime,
        end: OffsetDateTime,
        creator_id: &str,
        election_type: ElectionType,
    ) -> Result<Election, CoreError> {
        let election_id: String = Uuid::new_v4().to_string();
        let election: Election = Election::new(
            &election_id,
            name,
            description,
            start,
            end,
            creator_id,
            election_type,
        )?;

        self.elections.push(election.clone());
        info!(
            election_id = %election_id,
            election_type = %election_type,
            creator_id = %creator_id,
            "Created election"
        );
        Ok(election)
    }

    // ---- Candidates ----

    /// Returns the candidates of an election in global insertion order.
    ///
    /// Unknown elections yield an empty list.
    #[must_use]
    pub fn candidates_for(&self, election_id: &str) -> Vec<&Candidate> {
        self.candidates
            .iter()
            .filter(|candidate| candidate.election_id() == election_id)
            .collect()
    }

    /// Creates and stores a candidate under a freshly generated id.
    ///
    /// If the owning election exists the candidate is also appended to its
    /// roster. A candidate for an unknown election is still stored.
    pub fn create_candidate(
        &mut self,
        name: &str,
        description: &str,
        image_url: &str,
        election_id: &str,
    ) -> Candidate {
        let candidate: Candidate = Candidate::new(
            &Uuid::new_v4().to_string(),
            name,
            description,
            image_url,
            election_id,
        );
        self.insert_candidate(candidate.clone());
        info!(
            candidate_id = %candidate.id(),
            election_id = %election_id,
            "Created candidate"
        );
        candidate
    }

    // ---- Ballots ----

    /// Casts a ballot.
    ///
    /// Preconditions are checked in order, and any failure returns before
    /// anything is written:
    ///
    /// 1. The election and the identity exist
    /// 2. The identity is a voter
    /// 3. The voter has not voted in this election
    /// 4. The election is active at the instant of the call
    ///
    /// On success the selection is recorded in the election's tally ledger,
    /// a ballot record is stored, and the voter is marked as having voted.
    ///
    /// # Errors
    ///
    /// - `CoreError::NotFound` if the election or identity is unknown
    /// - `CoreError::NotAVoter` if the identity is not a voter
    /// - `CoreError::AlreadyVoted` if the voter already voted here
    /// - `CoreError::InactiveElection` if the election is not active
    /// - `CoreError::DomainViolation` if the tally ledger already holds a
    ///   selection for this voter, or the selection of a ranked election
    ///   names no candidate
    pub fn cast_vote(
        &mut self,
        voter_id: &str,
        election_id: &str,
        selection: &str,
    ) -> Result<BallotRecord, CoreError> {
        let now: OffsetDateTime = self.now();

        let election: &Election = self.election(election_id).ok_or_else(|| {
            warn!(election_id = %election_id, "Ballot rejected: unknown election");
            not_found("Election", election_id)
        })?;
        let voter: &Identity = self.identity(voter_id).ok_or_else(|| {
            warn!(voter_id = %voter_id, "Ballot rejected: unknown identity");
            not_found("Identity", voter_id)
        })?;

        if !voter.is_voter() {
            warn!(voter_id = %voter_id, role = %voter.role(), "Ballot rejected: not a voter");
            return Err(CoreError::NotAVoter {
                identity_id: voter_id.to_string(),
                role: voter.role(),
            });
        }

        if voter.has_voted_in_election(election_id) {
            warn!(
                voter_id = %voter_id,
                election_id = %election_id,
                "Ballot rejected: already voted"
            );
            return Err(CoreError::AlreadyVoted {
                voter_id: voter_id.to_string(),
                election_id: election_id.to_string(),
            });
        }

        if !election.is_active_at(now) {
            let status = election.status_at(now);
            warn!(
                election_id = %election_id,
                status = %status,
                "Ballot rejected: election not active"
            );
            return Err(CoreError::InactiveElection {
                election_id: election_id.to_string(),
                status,
            });
        }

        // The ledger is the only fallible write, so it goes first.
        self.election_mut(election_id)?
            .record_selection(voter_id, selection)
            .inspect_err(|err| {
                warn!(
                    voter_id = %voter_id,
                    election_id = %election_id,
                    error = %err,
                    "Ballot rejected by tally ledger"
                );
            })?;

        let ballot: BallotRecord = BallotRecord::new(
            &Uuid::new_v4().to_string(),
            voter_id,
            election_id,
            selection,
            now,
        );
        self.ballots.push(ballot.clone());
        self.identity_mut(voter_id)?.mark_as_voted(election_id);

        info!(
            ballot_id = %ballot.id(),
            voter_id = %voter_id,
            election_id = %election_id,
            "Ballot accepted"
        );
        Ok(ballot)
    }

    /// Returns the ballot records of an election in cast order.
    #[must_use]
    pub fn ballots_for(&self, election_id: &str) -> Vec<&BallotRecord> {
        self.ballots
            .iter()
            .filter(|ballot| ballot.election_id() == election_id)
            .collect()
    }

    /// Returns the number of ballot records cast in an election.
    ///
    /// Counted from the ballot records, independently of the tally ledger.
    #[must_use]
    pub fn votes_cast_count(&self, election_id: &str) -> usize {
        self.ballots
            .iter()
            .filter(|ballot| ballot.election_id() == election_id)
            .count()
    }

    /// Returns whether a voter has cast a ballot in an election.
    ///
    /// False for unknown identities and for non-voters.
    #[must_use]
    pub fn has_voted(&self, voter_id: &str, election_id: &str) -> bool {
        self.identity(voter_id)
            .is_some_and(|identity| identity.is_voter() && identity.has_voted_in_election(election_id))
    }

    // ---- Results ----

    /// Returns the tally counts of an election.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the election is unknown.
    pub fn election_results(&self, election_id: &str) -> Result<VoteCounts, CoreError> {
        let election: &Election = self
            .election(election_id)
            .ok_or_else(|| not_found("Election", election_id))?;
        debug!(election_id = %election_id, "Calculating election results");
        Ok(election.results())
    }

    /// Returns the tally counts of an election summarized against its
    /// candidates.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the election is unknown.
    pub fn results_summary(&self, election_id: &str) -> Result<ResultsSummary, CoreError> {
        let counts: VoteCounts = self.election_results(election_id)?;
        let candidates: Vec<Candidate> = self
            .candidates_for(election_id)
            .into_iter()
            .cloned()
            .collect();
        Ok(summarize_results(&candidates, &counts))
    }

    // ---- Internal ----

    /// Adds an identity.
    pub(crate) fn insert_identity(&mut self, identity: Identity) {
        self.identities.push(identity);
    }

    /// Adds an election as constructed.
    pub(crate) fn insert_election(&mut self, election: Election) {
        self.elections.push(election);
    }

    /// Adds a candidate to the global collection and its election's roster.
    pub(crate) fn insert_candidate(&mut self, candidate: Candidate) {
        if let Some(election) = self
            .elections
            .iter_mut()
            .find(|election| election.id() == candidate.election_id())
        {
            election.add_candidate(candidate.clone());
        } else {
            debug!(
                candidate_id = %candidate.id(),
                election_id = %candidate.election_id(),
                "Candidate stored without a matching election"
            );
        }
        self.candidates.push(candidate);
    }

    fn election_mut(&mut self, election_id: &str) -> Result<&mut Election, CoreError> {
        self.elections
            .iter_mut()
            .find(|election| election.id() == election_id)
            .ok_or_else(|| not_found("Election", election_id))
    }

    fn identity_mut(&mut self, identity_id: &str) -> Result<&mut Identity, CoreError> {
        self.identities
            .iter_mut()
            .find(|identity| identity.id() == identity_id)
            .ok_or_else(|| not_found("Identity", identity_id))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(resource: &'static str, id: &str) -> CoreError {
    CoreError::NotFound {
        resource,
        id: id.to_string(),
    }
}
