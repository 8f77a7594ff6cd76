// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and role-based authorization for API operations.
//!
//! The store holds a single current-session identity. Every actor-bound
//! operation resolves that identity into an [`AuthenticatedActor`] and then
//! asks the [`AuthorizationService`] whether the actor's role permits the
//! action.

use poll_vote::Store;
use poll_vote_domain::{Identity, Role};

use crate::error::AuthError;

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The identity id of this actor.
    pub id: String,
    /// The role of this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The identity id of this actor
    /// * `role` - The role of this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Creates an actor from a stored identity.
    #[must_use]
    pub fn from_identity(identity: &Identity) -> Self {
        Self::new(identity.id().to_string(), identity.role())
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor is authorized to create an election.
    ///
    /// Only Administrators may create elections.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an Administrator.
    pub fn authorize_create_election(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        require_administrator(actor, "create_election")
    }

    /// Checks if an actor is authorized to add a candidate to an election.
    ///
    /// Only Administrators may create candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an Administrator.
    pub fn authorize_create_candidate(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        require_administrator(actor, "create_candidate")
    }

    /// Checks if an actor is authorized to cast a ballot for a voter.
    ///
    /// A Voter may cast only their own ballot.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `voter_id` - The voter the ballot is cast for
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not a Voter or is casting for
    /// another voter.
    pub fn authorize_cast_vote(actor: &AuthenticatedActor, voter_id: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Voter if actor.id == voter_id => Ok(()),
            Role::Voter => Err(AuthError::Unauthorized {
                action: String::from("cast_vote_for_another_voter"),
                required_role: String::from("the same Voter"),
            }),
            Role::Administrator => Err(AuthError::Unauthorized {
                action: String::from("cast_vote"),
                required_role: String::from("Voter"),
            }),
        }
    }
}

fn require_administrator(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
    match actor.role {
        Role::Administrator => Ok(()),
        Role::Voter => Err(AuthError::Unauthorized {
            action: action.to_string(),
            required_role: String::from("Admin"),
        }),
    }
}

/// Resolves the store's session into an actor.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Returns the actor for the current-session identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` if nobody is logged in.
    pub fn current_actor(store: &Store) -> Result<AuthenticatedActor, AuthError> {
        store
            .current_identity()
            .map(AuthenticatedActor::from_identity)
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("No identity is logged in"),
            })
    }
}
