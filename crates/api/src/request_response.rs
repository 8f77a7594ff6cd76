// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use poll_vote_domain::{
    BallotRecord, Candidate, CandidateResult, Election, ElectionStatus, ElectionType, Identity,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The email address.
    pub email: String,
    /// The credential.
    pub password: String,
}

/// Public view of an identity. Never carries the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityInfo {
    /// The identity id.
    pub id: String,
    /// The display name.
    pub name: String,
    /// The email address.
    pub email: String,
    /// The role tag ("Admin" or "Voter").
    pub role: String,
    /// The administrator level, for administrators.
    pub admin_level: Option<u8>,
    /// The external voter number, for voters.
    pub voter_number: Option<String>,
}

impl From<&Identity> for IdentityInfo {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id().to_string(),
            name: identity.name().to_string(),
            email: identity.email().to_string(),
            role: identity.role().as_str().to_string(),
            admin_level: identity.admin_level(),
            voter_number: identity.voter_number().map(String::from),
        }
    }
}

/// API response for a logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    /// A success message.
    pub message: String,
}

/// Which elections to list, relative to the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElectionFilter {
    /// Every election.
    #[default]
    All,
    /// Elections whose window contains now.
    Active,
    /// Elections that have not started.
    Upcoming,
    /// Elections that have ended.
    Past,
}

/// Summary view of an election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionInfo {
    /// The election id.
    pub id: String,
    /// The election name.
    pub name: String,
    /// The description.
    pub description: String,
    /// Start of the voting window.
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    /// End of the voting window.
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
    /// The creating identity's id.
    pub created_by: String,
    /// The election type tag.
    pub election_type: ElectionType,
    /// The human-readable counting method.
    pub voting_method: String,
    /// Status at the time the view was built.
    pub status: ElectionStatus,
    /// Number of candidates on the roster.
    pub candidate_count: usize,
    /// Number of ballots cast.
    pub votes_cast: usize,
}

impl ElectionInfo {
    /// Builds the view of an election at the given instant.
    #[must_use]
    pub fn new(election: &Election, now: OffsetDateTime, votes_cast: usize) -> Self {
        Self {
            id: election.id().to_string(),
            name: election.name().to_string(),
            description: election.description().to_string(),
            start_date: election.start(),
            end_date: election.end(),
            created_by: election.created_by().to_string(),
            election_type: election.election_type(),
            voting_method: election.voting_method().method_name().to_string(),
            status: election.status_at(now),
            candidate_count: election.candidates().len(),
            votes_cast,
        }
    }
}

/// API response listing elections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListElectionsResponse {
    /// The elections in insertion order.
    pub elections: Vec<ElectionInfo>,
}

/// API response for a single election with its candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionDetailsResponse {
    /// The election.
    pub election: ElectionInfo,
    /// The candidates in insertion order.
    pub candidates: Vec<CandidateInfo>,
}

/// API request to create an election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateElectionRequest {
    /// The election name.
    pub name: String,
    /// The description.
    #[serde(default)]
    pub description: String,
    /// Start of the voting window (RFC 3339).
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    /// End of the voting window (RFC 3339).
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
    /// `SIMPLE_MAJORITY` or `RANKED_CHOICE`; defaults to `SIMPLE_MAJORITY`.
    #[serde(default)]
    pub election_type: Option<String>,
}

/// Public view of a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateInfo {
    /// The candidate id.
    pub id: String,
    /// The candidate name.
    pub name: String,
    /// The description.
    pub description: String,
    /// The image location.
    pub image_url: String,
    /// The owning election id.
    pub election_id: String,
}

impl From<&Candidate> for CandidateInfo {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id().to_string(),
            name: candidate.name().to_string(),
            description: candidate.description().to_string(),
            image_url: candidate.image_url().to_string(),
            election_id: candidate.election_id().to_string(),
        }
    }
}

/// API response listing the candidates of an election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCandidatesResponse {
    /// The election id.
    pub election_id: String,
    /// The candidates in insertion order.
    pub candidates: Vec<CandidateInfo>,
}

/// API request to add a candidate to an election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCandidateRequest {
    /// The candidate name.
    pub name: String,
    /// The description.
    #[serde(default)]
    pub description: String,
    /// The image location.
    #[serde(default)]
    pub image_url: String,
}

/// API request to cast a ballot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastVoteRequest {
    /// The voter casting the ballot.
    pub voter_id: String,
    /// A candidate id, or a comma-separated ranking for ranked elections.
    pub selection: String,
}

/// Public view of an accepted ballot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotInfo {
    /// The ballot id.
    pub id: String,
    /// The voter id.
    pub voter_id: String,
    /// The election id.
    pub election_id: String,
    /// The raw selection.
    pub selection: String,
    /// When the ballot was accepted.
    #[serde(with = "time::serde::rfc3339")]
    pub cast_at: OffsetDateTime,
}

impl From<&BallotRecord> for BallotInfo {
    fn from(ballot: &BallotRecord) -> Self {
        Self {
            id: ballot.id().to_string(),
            voter_id: ballot.voter_id().to_string(),
            election_id: ballot.election_id().to_string(),
            selection: ballot.selection().to_string(),
            cast_at: ballot.cast_at(),
        }
    }
}

/// API response for an accepted ballot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastVoteResponse {
    /// The accepted ballot.
    pub ballot: BallotInfo,
    /// A success message.
    pub message: String,
}

/// API response with an election's results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionResultsResponse {
    /// The election id.
    pub election_id: String,
    /// The election name.
    pub election_name: String,
    /// The human-readable counting method.
    pub voting_method: String,
    /// Status when the results were read.
    pub status: ElectionStatus,
    /// Sum of all tallies.
    pub total_votes: usize,
    /// Number of ballot records cast.
    pub votes_cast: usize,
    /// One row per candidate, in roster order.
    pub candidates: Vec<CandidateResult>,
    /// The leading candidate's id, if any.
    pub winner: Option<String>,
}

/// API response telling whether a voter has voted in an election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteStatusResponse {
    /// The election id.
    pub election_id: String,
    /// The voter id.
    pub voter_id: String,
    /// Whether the voter has cast a ballot.
    pub has_voted: bool,
}
