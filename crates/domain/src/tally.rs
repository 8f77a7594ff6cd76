// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tally strategies for counting ballots.
//!
//! Each election owns exactly one strategy, chosen from its election type at
//! construction. A strategy keeps its own ledger of voter selections, keyed by
//! voter id, and refuses a second selection from the same voter.
//!
//! ## Variants
//!
//! - Plurality: one tally per ballot to the selected candidate.
//! - Ranked first preference: one tally per ballot to the top-ranked
//!   candidate only. Lower preferences are stored but never counted; there
//!   are no elimination rounds.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::str::FromStr;

/// Vote counts keyed by candidate id.
pub type VoteCounts = BTreeMap<String, usize>;

/// The voting method requested when an election is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ElectionType {
    /// Single-choice plurality.
    #[default]
    #[serde(rename = "SIMPLE_MAJORITY")]
    SimpleMajority,
    /// Ranked ballots counted by first preference.
    #[serde(rename = "RANKED_CHOICE")]
    RankedChoice,
}

impl ElectionType {
    /// Converts this election type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SimpleMajority => "SIMPLE_MAJORITY",
            Self::RankedChoice => "RANKED_CHOICE",
        }
    }
}

impl FromStr for ElectionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SIMPLE_MAJORITY" => Ok(Self::SimpleMajority),
            "RANKED_CHOICE" => Ok(Self::RankedChoice),
            _ => Err(DomainError::InvalidElectionType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ElectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A vote-counting algorithm together with its private ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TallyStrategy {
    /// Voter id to selected candidate id.
    Plurality {
        /// Recorded selections.
        ledger: BTreeMap<String, String>,
    },
    /// Voter id to candidate ids in preference order.
    RankedFirstPreference {
        /// Recorded rankings.
        ledger: BTreeMap<String, Vec<String>>,
    },
}

impl TallyStrategy {
    /// Creates an empty strategy for the given election type.
    #[must_use]
    pub const fn for_election_type(election_type: ElectionType) -> Self {
        match election_type {
            ElectionType::SimpleMajority => Self::Plurality {
                ledger: BTreeMap::new(),
            },
            ElectionType::RankedChoice => Self::RankedFirstPreference {
                ledger: BTreeMap::new(),
            },
        }
    }

    /// Returns the election type this strategy was built for.
    #[must_use]
    pub const fn election_type(&self) -> ElectionType {
        match self {
            Self::Plurality { .. } => ElectionType::SimpleMajority,
            Self::RankedFirstPreference { .. } => ElectionType::RankedChoice,
        }
    }

    /// Returns the human-readable name of the counting method.
    #[must_use]
    pub const fn method_name(&self) -> &'static str {
        match self {
            Self::Plurality { .. } => "Simple Majority",
            Self::RankedFirstPreference { .. } => "Ranked Choice",
        }
    }

    /// Records a voter's selection.
    ///
    /// For plurality the selection is a single candidate id. For ranked
    /// ballots it is a comma-separated list parsed with [`parse_ranking`].
    ///
    /// # Errors
    ///
    /// - `DomainError::DuplicateVote` if the voter already has a recorded
    ///   selection
    /// - `DomainError::EmptyRanking` if a ranked selection names no
    ///   candidate
    ///
    /// The ledger is left untouched on error, so every recorded ballot
    /// contributes exactly one tally.
    pub fn cast_vote(&mut self, voter_id: &str, selection: &str) -> Result<(), DomainError> {
        let duplicate = || DomainError::DuplicateVote {
            voter_id: voter_id.to_string(),
        };
        match self {
            Self::Plurality { ledger } => match ledger.entry(voter_id.to_string()) {
                Entry::Occupied(_) => Err(duplicate()),
                Entry::Vacant(slot) => {
                    slot.insert(selection.to_string());
                    Ok(())
                }
            },
            Self::RankedFirstPreference { ledger } => match ledger.entry(voter_id.to_string()) {
                Entry::Occupied(_) => Err(duplicate()),
                Entry::Vacant(slot) => {
                    let ranking: Vec<String> = parse_ranking(selection);
                    if ranking.is_empty() {
                        return Err(DomainError::EmptyRanking {
                            voter_id: voter_id.to_string(),
                        });
                    }
                    slot.insert(ranking);
                    Ok(())
                }
            },
        }
    }

    /// Counts the ledger into a fresh candidate-to-count mapping.
    ///
    /// Candidates with no tallies are absent from the mapping. Ties are not
    /// broken.
    #[must_use]
    pub fn calculate_results(&self) -> VoteCounts {
        let mut counts: VoteCounts = VoteCounts::new();
        match self {
            Self::Plurality { ledger } => {
                for candidate_id in ledger.values() {
                    *counts.entry(candidate_id.clone()).or_insert(0) += 1;
                }
            }
            Self::RankedFirstPreference { ledger } => {
                for first_choice in ledger.values().filter_map(|ranking| ranking.first()) {
                    *counts.entry(first_choice.clone()).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    /// Returns the number of selections in the ledger.
    #[must_use]
    pub fn ballots_recorded(&self) -> usize {
        match self {
            Self::Plurality { ledger } => ledger.len(),
            Self::RankedFirstPreference { ledger } => ledger.len(),
        }
    }
}

/// Parses a comma-separated ranking into candidate ids in preference order.
///
/// Whitespace around each id is trimmed and empty segments are dropped, so a
/// selection made only of separators yields an empty ranking. Such a ranking
/// is never recorded.
#[must_use]
pub fn parse_ranking(selection: &str) -> Vec<String> {
    selection
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}
