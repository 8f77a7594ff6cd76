// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers that change state take `&mut Store` and an authenticated actor;
//! queries take `&Store`. Every handler authorizes first, then validates the
//! request, then calls the store and translates its errors.

use poll_vote::Store;
use poll_vote_domain::{
    BallotRecord, Candidate, Election, ElectionType, Identity, ResultsSummary,
};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService};
use crate::error::{ApiError, AuthError, translate_core_error};
use crate::request_response::{
    BallotInfo, CandidateInfo, CastVoteRequest, CastVoteResponse, CreateCandidateRequest,
    CreateElectionRequest, ElectionDetailsResponse, ElectionFilter, ElectionInfo,
    ElectionResultsResponse, IdentityInfo, ListCandidatesResponse, ListElectionsResponse,
    LoginRequest, LogoutResponse, VoteStatusResponse,
};
use crate::validation::{
    parse_election_filter, validate_cast_vote, validate_create_candidate,
    validate_create_election,
};

fn election_not_found(election_id: &str) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Election"),
        message: format!("Election '{election_id}' does not exist"),
    }
}

fn find_election<'a>(store: &'a Store, election_id: &str) -> Result<&'a Election, ApiError> {
    store
        .election(election_id)
        .ok_or_else(|| election_not_found(election_id))
}

fn election_info(store: &Store, election: &Election, now: OffsetDateTime) -> ElectionInfo {
    ElectionInfo::new(election, now, store.votes_cast_count(election.id()))
}

// ========================================================================
// Session
// ========================================================================

/// Logs in and makes the matching identity the current session.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` if no identity matches the
/// email and credential.
pub fn login(store: &mut Store, request: &LoginRequest) -> Result<IdentityInfo, ApiError> {
    let identity: &Identity = store
        .login(&request.email, &request.password)
        .ok_or_else(|| AuthError::AuthenticationFailed {
            reason: String::from("Invalid email or password"),
        })?;
    Ok(IdentityInfo::from(identity))
}

/// Ends the current session. Succeeds even when nobody is logged in.
pub fn logout(store: &mut Store) -> LogoutResponse {
    store.logout();
    LogoutResponse {
        message: String::from("Logged out"),
    }
}

/// Returns the current-session identity.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` if nobody is logged in.
pub fn whoami(store: &Store) -> Result<IdentityInfo, ApiError> {
    let identity: &Identity = store
        .current_identity()
        .ok_or_else(|| AuthError::AuthenticationFailed {
            reason: String::from("No identity is logged in"),
        })?;
    Ok(IdentityInfo::from(identity))
}

// ========================================================================
// Elections
// ========================================================================

/// Lists elections, optionally filtered by status relative to now.
///
/// # Arguments
///
/// * `store` - The election store
/// * `status` - `all`, `active`, `upcoming` or `past`; `None` means `all`
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an unknown status filter.
pub fn list_elections(
    store: &Store,
    status: Option<&str>,
) -> Result<ListElectionsResponse, ApiError> {
    let filter: ElectionFilter = parse_election_filter(status)?;
    let now: OffsetDateTime = store.now();

    let selected: Vec<&Election> = match filter {
        ElectionFilter::All => store.list_elections(),
        ElectionFilter::Active => store.active_elections(),
        ElectionFilter::Upcoming => store.future_elections(),
        ElectionFilter::Past => store.past_elections(),
    };
    debug!(filter = ?filter, count = selected.len(), "Listing elections");

    Ok(ListElectionsResponse {
        elections: selected
            .into_iter()
            .map(|election| election_info(store, election, now))
            .collect(),
    })
}

/// Returns an election together with its candidates.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the election is unknown.
pub fn get_election(store: &Store, election_id: &str) -> Result<ElectionDetailsResponse, ApiError> {
    let election: &Election = find_election(store, election_id)?;
    let candidates: Vec<CandidateInfo> = store
        .candidates_for(election_id)
        .into_iter()
        .map(CandidateInfo::from)
        .collect();

    Ok(ElectionDetailsResponse {
        election: election_info(store, election, store.now()),
        candidates,
    })
}

/// Creates an election owned by the acting administrator.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an Administrator
/// - The name is empty or the election type is unknown
/// - The end of the window is before its start
pub fn create_election(
    store: &mut Store,
    request: &CreateElectionRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ElectionInfo, ApiError> {
    AuthorizationService::authorize_create_election(authenticated_actor)?;
    let election_type: ElectionType = validate_create_election(request)?;

    let election: Election = store
        .create_election(
            request.name.trim(),
            &request.description,
            request.start_date,
            request.end_date,
            &authenticated_actor.id,
            election_type,
        )
        .map_err(translate_core_error)?;

    Ok(election_info(store, &election, store.now()))
}

// ========================================================================
// Candidates
// ========================================================================

/// Lists the candidates of an election.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the election is unknown.
pub fn list_candidates(
    store: &Store,
    election_id: &str,
) -> Result<ListCandidatesResponse, ApiError> {
    find_election(store, election_id)?;
    Ok(ListCandidatesResponse {
        election_id: election_id.to_string(),
        candidates: store
            .candidates_for(election_id)
            .into_iter()
            .map(CandidateInfo::from)
            .collect(),
    })
}

/// Adds a candidate to an existing election.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an Administrator
/// - The name is empty
/// - The election is unknown
pub fn create_candidate(
    store: &mut Store,
    election_id: &str,
    request: &CreateCandidateRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<CandidateInfo, ApiError> {
    AuthorizationService::authorize_create_candidate(authenticated_actor)?;
    validate_create_candidate(request)?;
    find_election(store, election_id)?;

    let candidate: Candidate = store.create_candidate(
        request.name.trim(),
        &request.description,
        &request.image_url,
        election_id,
    );
    Ok(CandidateInfo::from(&candidate))
}

// ========================================================================
// Ballots and results
// ========================================================================

/// Casts a ballot for the acting voter.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not the Voter named in the request
/// - The voter id or selection is empty, or the selection names no candidate
/// - The store rejects the ballot (unknown election, already voted,
///   election not active)
pub fn cast_vote(
    store: &mut Store,
    election_id: &str,
    request: &CastVoteRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<CastVoteResponse, ApiError> {
    validate_cast_vote(request)?;
    AuthorizationService::authorize_cast_vote(authenticated_actor, &request.voter_id)?;

    let ballot: BallotRecord = store
        .cast_vote(&request.voter_id, election_id, &request.selection)
        .map_err(translate_core_error)?;

    info!(ballot_id = %ballot.id(), election_id = %election_id, "Ballot recorded via API");
    Ok(CastVoteResponse {
        ballot: BallotInfo::from(&ballot),
        message: String::from("Vote cast successfully"),
    })
}

/// Returns the results of an election summarized against its candidates.
///
/// Results are readable at any time, including while voting is open.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the election is unknown.
pub fn get_results(store: &Store, election_id: &str) -> Result<ElectionResultsResponse, ApiError> {
    let election: &Election = find_election(store, election_id)?;
    let summary: ResultsSummary = store
        .results_summary(election_id)
        .map_err(translate_core_error)?;

    Ok(ElectionResultsResponse {
        election_id: election.id().to_string(),
        election_name: election.name().to_string(),
        voting_method: election.voting_method().method_name().to_string(),
        status: election.status_at(store.now()),
        total_votes: summary.total_votes,
        votes_cast: store.votes_cast_count(election_id),
        candidates: summary.candidates,
        winner: summary.winner,
    })
}

/// Returns whether a voter has voted in an election.
///
/// When `voter_id` is `None` the current-session identity is used.
///
/// # Errors
///
/// Returns an error if the election is unknown, or if no voter id is given
/// and nobody is logged in.
pub fn get_vote_status(
    store: &Store,
    election_id: &str,
    voter_id: Option<&str>,
) -> Result<VoteStatusResponse, ApiError> {
    find_election(store, election_id)?;
    let voter_id: String = match voter_id {
        Some(id) => id.to_string(),
        None => AuthenticationService::current_actor(store)?.id,
    };

    Ok(VoteStatusResponse {
        election_id: election_id.to_string(),
        has_voted: store.has_voted(&voter_id, election_id),
        voter_id,
    })
}
