// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request validation.
//!
//! Checks the shape of incoming requests before they reach the store. Rules
//! that depend on stored state (windows, eligibility, duplicates) are left to
//! the store.

use poll_vote_domain::{ElectionType, parse_ranking};
use std::str::FromStr;
use thiserror::Error;

use crate::request_response::{
    CastVoteRequest, CreateCandidateRequest, CreateElectionRequest, ElectionFilter,
};

/// Request validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestValidationError {
    /// A required text field is empty or whitespace.
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// The election type tag is not recognized.
    #[error("Unknown election type '{value}' (expected SIMPLE_MAJORITY or RANKED_CHOICE)")]
    UnknownElectionType { value: String },

    /// The selection contains only separators.
    #[error("Selection must name at least one candidate id")]
    NoCandidateSelected,

    /// The election status filter is not recognized.
    #[error("Unknown status filter '{value}' (expected all, active, upcoming or past)")]
    UnknownStatusFilter { value: String },
}

impl RequestValidationError {
    /// Returns the request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field } => *field,
            Self::UnknownElectionType { .. } => "election_type",
            Self::NoCandidateSelected => "selection",
            Self::UnknownStatusFilter { .. } => "status",
        }
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), RequestValidationError> {
    if value.trim().is_empty() {
        return Err(RequestValidationError::EmptyField { field });
    }
    Ok(())
}

/// Validates a create-election request and resolves its election type.
///
/// A missing election type selects the default (Simple Majority).
///
/// # Errors
///
/// Returns an error if the name is empty or the election type is unknown.
pub fn validate_create_election(
    request: &CreateElectionRequest,
) -> Result<ElectionType, RequestValidationError> {
    require_text("name", &request.name)?;
    request.election_type.as_deref().map_or_else(
        || Ok(ElectionType::default()),
        |value| {
            ElectionType::from_str(value).map_err(|_| RequestValidationError::UnknownElectionType {
                value: value.to_string(),
            })
        },
    )
}

/// Validates a create-candidate request.
///
/// # Errors
///
/// Returns an error if the name is empty.
pub fn validate_create_candidate(
    request: &CreateCandidateRequest,
) -> Result<(), RequestValidationError> {
    require_text("name", &request.name)
}

/// Validates a cast-vote request.
///
/// # Errors
///
/// Returns an error if the voter id is empty, or if the selection is empty
/// or names no candidate id (for example `","`).
pub fn validate_cast_vote(request: &CastVoteRequest) -> Result<(), RequestValidationError> {
    require_text("voter_id", &request.voter_id)?;
    require_text("selection", &request.selection)?;
    if parse_ranking(&request.selection).is_empty() {
        return Err(RequestValidationError::NoCandidateSelected);
    }
    Ok(())
}

/// Parses an election status filter.
///
/// A missing filter means `all`.
///
/// # Errors
///
/// Returns an error if the filter is not one of `all`, `active`, `upcoming`
/// or `past`.
pub fn parse_election_filter(value: Option<&str>) -> Result<ElectionFilter, RequestValidationError> {
    match value.map(str::trim) {
        None | Some("" | "all") => Ok(ElectionFilter::All),
        Some("active") => Ok(ElectionFilter::Active),
        Some("upcoming") => Ok(ElectionFilter::Upcoming),
        Some("past") => Ok(ElectionFilter::Past),
        Some(other) => Err(RequestValidationError::UnknownStatusFilter {
            value: other.to_string(),
        }),
    }
}
