// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod error;
mod handlers;
mod request_response;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    cast_vote, create_candidate, create_election, get_election, get_results, get_vote_status,
    list_candidates, list_elections, login, logout, whoami,
};
pub use request_response::{
    BallotInfo, CandidateInfo, CastVoteRequest, CastVoteResponse, CreateCandidateRequest,
    CreateElectionRequest, ElectionDetailsResponse, ElectionFilter, ElectionInfo,
    ElectionResultsResponse, IdentityInfo, ListCandidatesResponse, ListElectionsResponse,
    LoginRequest, LogoutResponse, VoteStatusResponse,
};
pub use validation::RequestValidationError;
