// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, ElectionType, TallyStrategy, VoteCounts, parse_ranking};

#[test]
fn test_plurality_counts_each_selection() {
    let mut tally: TallyStrategy = TallyStrategy::for_election_type(ElectionType::SimpleMajority);

    tally.cast_vote("2", "1").unwrap();
    tally.cast_vote("3", "1").unwrap();
    tally.cast_vote("4", "3").unwrap();

    let results: VoteCounts = tally.calculate_results();
    assert_eq!(results.len(), 2);
    assert_eq!(results.get("1"), Some(&2));
    assert_eq!(results.get("3"), Some(&1));
    assert_eq!(results.get("2"), None);
}

#[test]
fn test_second_selection_from_same_voter_is_rejected_without_mutation() {
    let mut tally: TallyStrategy = TallyStrategy::for_election_type(ElectionType::SimpleMajority);
    tally.cast_vote("2", "1").unwrap();

    let result: Result<(), DomainError> = tally.cast_vote("2", "3");

    assert_eq!(
        result,
        Err(DomainError::DuplicateVote {
            voter_id: String::from("2")
        })
    );
    assert_eq!(tally.ballots_recorded(), 1);
    assert_eq!(tally.calculate_results().get("1"), Some(&1));
    assert_eq!(tally.calculate_results().get("3"), None);
}

#[test]
fn test_ranked_counts_first_preference_only() {
    let mut tally: TallyStrategy = TallyStrategy::for_election_type(ElectionType::RankedChoice);

    tally.cast_vote("2", "4,5").unwrap();
    tally.cast_vote("3", "5,4").unwrap();
    tally.cast_vote("4", "4").unwrap();

    let results: VoteCounts = tally.calculate_results();
    assert_eq!(results.get("4"), Some(&2));
    assert_eq!(results.get("5"), Some(&1));
}

#[test]
fn test_ranked_selection_without_candidates_is_rejected_without_mutation() {
    let mut tally: TallyStrategy = TallyStrategy::for_election_type(ElectionType::RankedChoice);

    for selection in ["", ",", ",,", " , "] {
        assert_eq!(
            tally.cast_vote("2", selection),
            Err(DomainError::EmptyRanking {
                voter_id: String::from("2")
            })
        );
    }

    assert_eq!(tally.ballots_recorded(), 0);
    assert!(tally.calculate_results().is_empty());
    tally.cast_vote("2", "4").unwrap();
    assert_eq!(tally.calculate_results().get("4"), Some(&1));
}

#[test]
fn test_every_recorded_ballot_contributes_one_tally() {
    let mut tally: TallyStrategy = TallyStrategy::for_election_type(ElectionType::RankedChoice);

    tally.cast_vote("2", "4,5").unwrap();
    tally.cast_vote("3", ",5,4").unwrap();
    assert!(tally.cast_vote("4", ",").is_err());

    let counted: usize = tally.calculate_results().values().sum();
    assert_eq!(counted, tally.ballots_recorded());
}

#[test]
fn test_results_are_fresh_and_empty_ledger_is_empty() {
    let tally: TallyStrategy = TallyStrategy::for_election_type(ElectionType::SimpleMajority);

    let mut first: VoteCounts = tally.calculate_results();
    first.insert(String::from("1"), 10);

    assert!(tally.calculate_results().is_empty());
}

#[test]
fn test_method_names_and_types() {
    let plurality: TallyStrategy = TallyStrategy::for_election_type(ElectionType::SimpleMajority);
    let ranked: TallyStrategy = TallyStrategy::for_election_type(ElectionType::RankedChoice);

    assert_eq!(plurality.method_name(), "Simple Majority");
    assert_eq!(ranked.method_name(), "Ranked Choice");
    assert_eq!(plurality.election_type(), ElectionType::SimpleMajority);
    assert_eq!(ranked.election_type(), ElectionType::RankedChoice);
}

#[test]
fn test_parse_ranking() {
    assert_eq!(parse_ranking("4,5"), vec![String::from("4"), String::from("5")]);
    assert_eq!(parse_ranking(" 4 , 5 ,"), vec![String::from("4"), String::from("5")]);
    assert!(parse_ranking("").is_empty());
    assert!(parse_ranking(",,").is_empty());
}

#[test]
fn test_election_type_parse_and_default() {
    assert_eq!(ElectionType::default(), ElectionType::SimpleMajority);
    assert_eq!(
        "RANKED_CHOICE".parse::<ElectionType>().unwrap(),
        ElectionType::RankedChoice
    );
    assert_eq!(ElectionType::SimpleMajority.to_string(), "SIMPLE_MAJORITY");
    assert!("ranked".parse::<ElectionType>().is_err());
}
