// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Results summary for an election.
//!
//! This module provides read-only aggregation of tally counts against a
//! candidate roster to produce per-candidate shares and a leader.

use crate::candidate::Candidate;
use crate::tally::VoteCounts;
use serde::{Deserialize, Serialize};

/// One candidate's line in a results summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    /// The candidate id.
    pub candidate_id: String,
    /// The candidate name.
    pub name: String,
    /// Tallies credited to this candidate.
    pub votes: usize,
    /// Share of all tallies, in percent (0.0 when nothing has been counted).
    pub percentage: f64,
}

/// Summary of an election's counts against its roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsSummary {
    /// Sum of every count in the tally, including ids not on the roster.
    pub total_votes: usize,
    /// One row per roster candidate, in roster order.
    pub candidates: Vec<CandidateResult>,
    /// The leading candidate's id, if any tallies exist.
    pub winner: Option<String>,
}

/// Summarizes tally counts against a roster.
///
/// # Arguments
///
/// * `candidates` - The roster, in display order
/// * `counts` - Candidate-to-count mapping from a tally strategy
///
/// # Returns
///
/// A `ResultsSummary`. The winner is the first roster candidate holding the
/// strictly greatest positive count; ties resolve to the earlier candidate.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize_results(candidates: &[Candidate], counts: &VoteCounts) -> ResultsSummary {
    let total_votes: usize = counts.values().sum();

    let rows: Vec<CandidateResult> = candidates
        .iter()
        .map(|candidate| {
            let votes: usize = counts.get(candidate.id()).copied().unwrap_or(0);
            let percentage: f64 = if total_votes == 0 {
                0.0
            } else {
                (votes as f64 / total_votes as f64) * 100.0
            };
            CandidateResult {
                candidate_id: candidate.id().to_string(),
                name: candidate.name().to_string(),
                votes,
                percentage,
            }
        })
        .collect();

    let mut winner: Option<&CandidateResult> = None;
    for row in rows.iter().filter(|row| row.votes > 0) {
        if winner.is_none_or(|leader| row.votes > leader.votes) {
            winner = Some(row);
        }
    }
    let winner: Option<String> = winner.map(|row| row.candidate_id.clone());

    ResultsSummary {
        total_votes,
        candidates: rows,
        winner,
    }
}
