// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A tally ledger already holds a selection for this voter.
    DuplicateVote {
        /// The voter whose second selection was rejected.
        voter_id: String,
    },
    /// An election window ends before it starts.
    InvalidElectionWindow {
        /// The requested start of the window.
        start: OffsetDateTime,
        /// The requested end of the window.
        end: OffsetDateTime,
    },
    /// Election type tag is not recognized.
    InvalidElectionType(String),
    /// A ranked selection names no candidate.
    EmptyRanking {
        /// The voter whose selection was rejected.
        voter_id: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateVote { voter_id } => {
                write!(f, "Voter '{voter_id}' has already cast a vote")
            }
            Self::InvalidElectionWindow { start, end } => {
                write!(
                    f,
                    "Election window is invalid: end {end} is before start {start}"
                )
            }
            Self::InvalidElectionType(msg) => write!(f, "Invalid election type: {msg}"),
            Self::EmptyRanking { voter_id } => {
                write!(f, "Ranked selection from voter '{voter_id}' names no candidate")
            }
        }
    }
}

impl std::error::Error for DomainError {}
