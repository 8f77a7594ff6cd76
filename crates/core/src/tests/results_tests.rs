// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_sample_store;
use crate::{CoreError, FixedClock, Store};
use poll_vote_domain::{ResultsSummary, VoteCounts};

#[test]
fn test_results_for_election_without_votes_are_empty() {
    let (store, _clock): (Store, FixedClock) = create_sample_store();

    let results: VoteCounts = store.election_results("1").unwrap();

    assert!(results.is_empty());
    assert_eq!(results.values().sum::<usize>(), 0);
    assert_eq!(store.votes_cast_count("1"), 0);
}

#[test]
fn test_results_for_unknown_election_is_not_found() {
    let (store, _clock): (Store, FixedClock) = create_sample_store();

    assert_eq!(
        store.election_results("99"),
        Err(CoreError::NotFound {
            resource: "Election",
            id: String::from("99"),
        })
    );
    assert!(store.results_summary("99").is_err());
    assert_eq!(store.votes_cast_count("99"), 0);
}

#[test]
fn test_results_summary_reports_leader_and_shares() {
    let (mut store, _clock): (Store, FixedClock) = create_sample_store();
    store.cast_vote("2", "2", "2").unwrap();
    store.cast_vote("3", "2", "2").unwrap();
    store.cast_vote("4", "2", "3").unwrap();

    let summary: ResultsSummary = store.results_summary("2").unwrap();

    assert_eq!(summary.total_votes, 3);
    assert_eq!(summary.total_votes, store.votes_cast_count("2"));
    assert_eq!(summary.winner.as_deref(), Some("2"));
    assert_eq!(summary.candidates.len(), 3);
    assert_eq!(summary.candidates[0].votes, 0);
    assert_eq!(summary.candidates[1].votes, 2);
    assert_eq!(summary.candidates[2].votes, 1);
}

#[test]
fn test_results_summary_without_votes_has_no_winner() {
    let (store, _clock): (Store, FixedClock) = create_sample_store();

    let summary: ResultsSummary = store.results_summary("3").unwrap();

    assert_eq!(summary.total_votes, 0);
    assert!(summary.winner.is_none());
    assert_eq!(summary.candidates.len(), 2);
}
