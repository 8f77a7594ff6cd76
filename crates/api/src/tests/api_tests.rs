// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Handler behavior against a seeded store.

use poll_vote::{CoreError, Store};
use poll_vote_domain::{DomainError, ElectionStatus, ElectionType, Role};
use time::Duration;

use crate::{
    ApiError, AuthenticatedActor, CandidateInfo, CastVoteResponse, CreateCandidateRequest,
    CreateElectionRequest, ElectionDetailsResponse, ElectionInfo, ElectionResultsResponse,
    IdentityInfo, ListCandidatesResponse, ListElectionsResponse, LoginRequest, VoteStatusResponse,
    cast_vote, create_candidate, create_election, get_election, get_results, get_vote_status,
    list_candidates, list_elections, login, logout, translate_core_error, whoami,
};

use super::helpers::{
    TEST_NOW, create_test_admin, create_test_store, create_test_voter,
    create_valid_election_request, create_vote_request,
};

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn test_login_and_whoami() {
    let mut store: Store = create_test_store();

    let info: IdentityInfo = login(&mut store, &login_request("admin@example.com", "admin123"))
        .unwrap();

    assert_eq!(info.id, "1");
    assert_eq!(info.role, "Admin");
    assert_eq!(info.admin_level, Some(1));
    assert_eq!(info.voter_number, None);
    assert_eq!(whoami(&store).unwrap(), info);
}

#[test]
fn test_login_with_wrong_password_fails() {
    let mut store: Store = create_test_store();

    let result = login(&mut store, &login_request("admin@example.com", "nope"));

    assert!(matches!(result, Err(ApiError::AuthenticationFailed { .. })));
    assert!(whoami(&store).is_err());
}

#[test]
fn test_logout_clears_whoami() {
    let mut store: Store = create_test_store();
    login(&mut store, &login_request("jane@example.com", "password123")).unwrap();

    logout(&mut store);

    assert!(matches!(
        whoami(&store),
        Err(ApiError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_list_elections_by_status() {
    let store: Store = create_test_store();

    let all: ListElectionsResponse = list_elections(&store, None).unwrap();
    let active: ListElectionsResponse = list_elections(&store, Some("active")).unwrap();
    let upcoming: ListElectionsResponse = list_elections(&store, Some("upcoming")).unwrap();
    let past: ListElectionsResponse = list_elections(&store, Some("past")).unwrap();

    assert_eq!(all.elections.len(), 3);
    assert_eq!(active.elections[0].id, "2");
    assert_eq!(active.elections[0].status, ElectionStatus::Active);
    assert_eq!(active.elections[0].candidate_count, 3);
    assert_eq!(upcoming.elections[0].id, "3");
    assert_eq!(upcoming.elections[0].voting_method, "Ranked Choice");
    assert_eq!(past.elections[0].status, ElectionStatus::Ended);
}

#[test]
fn test_list_elections_rejects_unknown_filter() {
    let store: Store = create_test_store();

    let result = list_elections(&store, Some("someday"));

    assert_eq!(
        result.map(|response| response.elections.len()),
        Err(ApiError::InvalidInput {
            field: String::from("status"),
            message: String::from(
                "Unknown status filter 'someday' (expected all, active, upcoming or past)"
            ),
        })
    );
}

#[test]
fn test_get_election_includes_candidates() {
    let store: Store = create_test_store();

    let details: ElectionDetailsResponse = get_election(&store, "3").unwrap();

    assert_eq!(details.election.name, store.election("3").unwrap().name());
    let names: Vec<&str> = details
        .candidates
        .iter()
        .map(|candidate| candidate.name.as_str())
        .collect();
    assert_eq!(names, vec!["David Wilson", "Emily Turner"]);
}

#[test]
fn test_get_unknown_election_is_not_found() {
    let store: Store = create_test_store();

    assert!(matches!(
        get_election(&store, "99"),
        Err(ApiError::ResourceNotFound { .. })
    ));
    assert!(matches!(
        list_candidates(&store, "99"),
        Err(ApiError::ResourceNotFound { .. })
    ));
    assert!(matches!(
        get_results(&store, "99"),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_create_election_records_acting_admin() {
    let mut store: Store = create_test_store();
    let admin: AuthenticatedActor = create_test_admin();
    let request: CreateElectionRequest = CreateElectionRequest {
        election_type: Some(String::from("RANKED_CHOICE")),
        ..create_valid_election_request()
    };

    let info: ElectionInfo = create_election(&mut store, &request, &admin).unwrap();

    assert_eq!(info.created_by, "1");
    assert_eq!(info.election_type, ElectionType::RankedChoice);
    assert_eq!(info.status, ElectionStatus::Active);
    assert_eq!(info.votes_cast, 0);
    assert!(store.election(&info.id).is_some());
}

#[test]
fn test_create_election_with_inverted_window_is_invalid_input() {
    let mut store: Store = create_test_store();
    let admin: AuthenticatedActor = create_test_admin();
    let request: CreateElectionRequest = CreateElectionRequest {
        start_date: TEST_NOW,
        end_date: TEST_NOW - Duration::days(1),
        ..create_valid_election_request()
    };

    let result = create_election(&mut store, &request, &admin);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "end_date"
    ));
}

#[test]
fn test_create_candidate_then_list() {
    let mut store: Store = create_test_store();
    let admin: AuthenticatedActor = create_test_admin();
    let request: CreateCandidateRequest = CreateCandidateRequest {
        name: String::from("  Grace Hopper "),
        description: String::from("Senior"),
        image_url: String::from("/grace.jpg"),
    };

    let created: CandidateInfo = create_candidate(&mut store, "1", &request, &admin).unwrap();
    let listed: ListCandidatesResponse = list_candidates(&store, "1").unwrap();

    assert_eq!(created.name, "Grace Hopper");
    assert_eq!(listed.candidates, vec![created]);
}

#[test]
fn test_create_candidate_for_unknown_election_is_not_found() {
    let mut store: Store = create_test_store();
    let admin: AuthenticatedActor = create_test_admin();
    let request: CreateCandidateRequest = CreateCandidateRequest {
        name: String::from("Nobody"),
        description: String::new(),
        image_url: String::new(),
    };

    let result = create_candidate(&mut store, "99", &request, &admin);

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
    assert!(store.candidates_for("99").is_empty());
}

#[test]
fn test_cast_vote_and_read_results() {
    let mut store: Store = create_test_store();
    let john: AuthenticatedActor = create_test_voter();
    let jane: AuthenticatedActor = AuthenticatedActor::new(String::from("3"), Role::Voter);

    let response: CastVoteResponse =
        cast_vote(&mut store, "2", &create_vote_request("2", "1"), &john).unwrap();
    cast_vote(&mut store, "2", &create_vote_request("3", "1"), &jane).unwrap();

    assert_eq!(response.ballot.voter_id, "2");
    assert_eq!(response.ballot.cast_at, TEST_NOW);

    let results: ElectionResultsResponse = get_results(&store, "2").unwrap();
    assert_eq!(results.total_votes, 2);
    assert_eq!(results.votes_cast, 2);
    assert_eq!(results.winner.as_deref(), Some("1"));
    assert_eq!(results.candidates[0].votes, 2);
    assert!((results.candidates[0].percentage - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_second_vote_is_rule_violation() {
    let mut store: Store = create_test_store();
    let john: AuthenticatedActor = create_test_voter();
    cast_vote(&mut store, "2", &create_vote_request("2", "1"), &john).unwrap();

    let result = cast_vote(&mut store, "2", &create_vote_request("2", "2"), &john);

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "one_ballot_per_election"
    ));
    assert_eq!(store.votes_cast_count("2"), 1);
}

#[test]
fn test_vote_in_upcoming_election_is_rule_violation() {
    let mut store: Store = create_test_store();
    let john: AuthenticatedActor = create_test_voter();

    let result = cast_vote(&mut store, "3", &create_vote_request("2", "4,5"), &john);

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "active_voting_window"
    ));
}

#[test]
fn test_selection_of_only_separators_is_invalid_input() {
    let mut store: Store = create_test_store();
    let john: AuthenticatedActor = create_test_voter();

    let result = cast_vote(&mut store, "2", &create_vote_request("2", ","), &john);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "selection"
    ));
    assert_eq!(store.votes_cast_count("2"), 0);
    assert!(!store.has_voted("2", "2"));
}

#[test]
fn test_vote_status_for_explicit_and_session_voter() {
    let mut store: Store = create_test_store();
    let john: AuthenticatedActor = create_test_voter();
    cast_vote(&mut store, "2", &create_vote_request("2", "3"), &john).unwrap();

    let explicit: VoteStatusResponse = get_vote_status(&store, "2", Some("2")).unwrap();
    assert!(explicit.has_voted);

    assert!(matches!(
        get_vote_status(&store, "2", None),
        Err(ApiError::AuthenticationFailed { .. })
    ));

    store.login("jane@example.com", "password123");
    let session: VoteStatusResponse = get_vote_status(&store, "2", None).unwrap();
    assert_eq!(session.voter_id, "3");
    assert!(!session.has_voted);
}

#[test]
fn test_translate_core_errors() {
    assert_eq!(
        translate_core_error(CoreError::NotFound {
            resource: "Identity",
            id: String::from("42"),
        }),
        ApiError::ResourceNotFound {
            resource_type: String::from("Identity"),
            message: String::from("Identity '42' does not exist"),
        }
    );
    assert!(matches!(
        translate_core_error(CoreError::NotAVoter {
            identity_id: String::from("1"),
            role: Role::Administrator,
        }),
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "voter_role"
    ));
    assert!(matches!(
        translate_core_error(CoreError::DomainViolation(DomainError::DuplicateVote {
            voter_id: String::from("2"),
        })),
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "one_ballot_per_voter"
    ));
    assert_eq!(
        translate_core_error(CoreError::DomainViolation(DomainError::EmptyRanking {
            voter_id: String::from("2"),
        })),
        ApiError::InvalidInput {
            field: String::from("selection"),
            message: String::from("Ranked selection from voter '2' names no candidate"),
        }
    );
}

#[test]
fn test_election_info_wire_format() {
    let store: Store = create_test_store();
    let info: ElectionInfo = list_elections(&store, Some("upcoming"))
        .unwrap()
        .elections
        .remove(0);

    let json: serde_json::Value = serde_json::to_value(&info).unwrap();

    assert_eq!(json["election_type"], "RANKED_CHOICE");
    assert_eq!(json["status"], "Upcoming");
    assert_eq!(json["start_date"], "2026-03-05T12:00:00Z");
}
