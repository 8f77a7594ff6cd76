// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::validation::RequestValidationError;
use poll_vote::CoreError;
use poll_vote_domain::DomainError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<RequestValidationError> for ApiError {
    fn from(err: RequestValidationError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DuplicateVote { voter_id } => ApiError::DomainRuleViolation {
            rule: String::from("one_ballot_per_voter"),
            message: format!("Voter '{voter_id}' has already cast a vote"),
        },
        DomainError::InvalidElectionWindow { start, end } => ApiError::InvalidInput {
            field: String::from("end_date"),
            message: format!("End {end} is before start {start}"),
        },
        DomainError::InvalidElectionType(msg) => ApiError::InvalidInput {
            field: String::from("election_type"),
            message: msg,
        },
        DomainError::EmptyRanking { voter_id } => ApiError::InvalidInput {
            field: String::from("selection"),
            message: format!("Ranked selection from voter '{voter_id}' names no candidate"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::NotFound { resource, id } => ApiError::ResourceNotFound {
            resource_type: resource.to_string(),
            message: format!("{resource} '{id}' does not exist"),
        },
        CoreError::NotAVoter { identity_id, role } => ApiError::DomainRuleViolation {
            rule: String::from("voter_role"),
            message: format!("Identity '{identity_id}' has role {role} and cannot vote"),
        },
        CoreError::AlreadyVoted {
            voter_id,
            election_id,
        } => ApiError::DomainRuleViolation {
            rule: String::from("one_ballot_per_election"),
            message: format!("Voter '{voter_id}' has already voted in election '{election_id}'"),
        },
        CoreError::InactiveElection {
            election_id,
            status,
        } => ApiError::DomainRuleViolation {
            rule: String::from("active_voting_window"),
            message: format!("Election '{election_id}' is not open for voting (status: {status})"),
        },
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
