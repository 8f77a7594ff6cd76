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

mod ballot;
mod candidate;
mod election;
mod error;
mod identity;
mod results;
mod tally;

#[cfg(test)]
mod tests;

// Re-export public types
pub use ballot::BallotRecord;
pub use candidate::Candidate;
pub use election::{Election, ElectionStatus};
pub use error::DomainError;
pub use identity::{Identity, Role};
pub use results::{CandidateResult, ResultsSummary, summarize_results};
pub use tally::{ElectionType, TallyStrategy, VoteCounts, parse_ranking};
