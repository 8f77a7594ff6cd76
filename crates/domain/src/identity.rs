// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Principals known to the election system.
//!
//! An identity is either an administrator or a voter. The role is fixed at
//! construction. Voters additionally track, per election, whether they have
//! cast a ballot; that flag only ever moves from "not voted" to "voted".

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The role tag of an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May create elections and candidates.
    Administrator,
    /// May cast ballots.
    Voter,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "Admin",
            Self::Voter => "Voter",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role-specific data carried by an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Profile {
    Administrator {
        admin_level: u8,
    },
    Voter {
        voter_number: String,
        voted_in: HashSet<String>,
    },
}

/// An authenticated principal: an administrator or a voter.
///
/// The credential is an opaque string compared verbatim. It is never
/// exposed through an accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The unique identifier.
    id: String,
    /// The display name.
    name: String,
    /// The email address, compared exactly as stored.
    email: String,
    /// The secret credential.
    credential: String,
    /// Role-specific data.
    profile: Profile,
}

impl Identity {
    /// Default level assigned to administrators.
    pub const DEFAULT_ADMIN_LEVEL: u8 = 1;

    /// Creates a new administrator identity.
    #[must_use]
    pub fn administrator(
        id: &str,
        name: &str,
        email: &str,
        credential: &str,
        admin_level: u8,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            credential: credential.to_string(),
            profile: Profile::Administrator { admin_level },
        }
    }

    /// Creates a new voter identity that has not voted in any election.
    ///
    /// # Arguments
    ///
    /// * `voter_number` - The externally visible voter number (e.g. "V001")
    #[must_use]
    pub fn voter(id: &str, name: &str, email: &str, credential: &str, voter_number: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            credential: credential.to_string(),
            profile: Profile::Voter {
                voter_number: voter_number.to_string(),
                voted_in: HashSet::new(),
            },
        }
    }

    /// Returns the unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the role tag.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self.profile {
            Profile::Administrator { .. } => Role::Administrator,
            Profile::Voter { .. } => Role::Voter,
        }
    }

    /// Returns whether this identity is a voter.
    #[must_use]
    pub const fn is_voter(&self) -> bool {
        matches!(self.profile, Profile::Voter { .. })
    }

    /// Returns the administrator level, or `None` for voters.
    #[must_use]
    pub const fn admin_level(&self) -> Option<u8> {
        match self.profile {
            Profile::Administrator { admin_level } => Some(admin_level),
            Profile::Voter { .. } => None,
        }
    }

    /// Returns the external voter number, or `None` for administrators.
    #[must_use]
    pub fn voter_number(&self) -> Option<&str> {
        match &self.profile {
            Profile::Voter { voter_number, .. } => Some(voter_number),
            Profile::Administrator { .. } => None,
        }
    }

    /// Returns true iff both the email and the credential match exactly.
    #[must_use]
    pub fn authenticate(&self, email: &str, credential: &str) -> bool {
        self.email == email && self.credential == credential
    }

    /// Returns whether this voter has cast a ballot in the given election.
    ///
    /// Always false for administrators.
    #[must_use]
    pub fn has_voted_in_election(&self, election_id: &str) -> bool {
        match &self.profile {
            Profile::Voter { voted_in, .. } => voted_in.contains(election_id),
            Profile::Administrator { .. } => false,
        }
    }

    /// Records that this voter has cast a ballot in the given election.
    ///
    /// The flag never reverts. Has no effect on administrators. Callers must
    /// check `has_voted_in_election` first; the store does this as part of
    /// ballot acceptance.
    pub fn mark_as_voted(&mut self, election_id: &str) {
        if let Profile::Voter { voted_in, .. } = &mut self.profile {
            voted_in.insert(election_id.to_string());
        }
    }
}
