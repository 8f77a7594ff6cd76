// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use poll_vote_domain::{DomainError, ElectionStatus, Role};

/// Errors raised by store operations.
///
/// Every variant is raised before the store is mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A referenced election or identity does not exist.
    NotFound {
        /// The kind of resource ("Election", "Identity").
        resource: &'static str,
        /// The id that was looked up.
        id: String,
    },
    /// The operation requires a voter, but the identity has another role.
    NotAVoter {
        /// The identity that was used.
        identity_id: String,
        /// The identity's actual role.
        role: Role,
    },
    /// The voter has already cast a ballot in this election.
    AlreadyVoted {
        /// The voter.
        voter_id: String,
        /// The election.
        election_id: String,
    },
    /// The election is outside its voting window.
    InactiveElection {
        /// The election.
        election_id: String,
        /// Where the election sat at the time of the call.
        status: ElectionStatus,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, id } => write!(f, "{resource} '{id}' not found"),
            Self::NotAVoter { identity_id, role } => {
                write!(
                    f,
                    "Identity '{identity_id}' is not a voter (role: {role})"
                )
            }
            Self::AlreadyVoted {
                voter_id,
                election_id,
            } => {
                write!(
                    f,
                    "Voter '{voter_id}' has already voted in election '{election_id}'"
                )
            }
            Self::InactiveElection {
                election_id,
                status,
            } => {
                write!(
                    f,
                    "Election '{election_id}' is not currently active (status: {status})"
                )
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
