// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A candidate standing in exactly one election.
///
/// The owning election id is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The unique identifier.
    id: String,
    /// The candidate's name.
    name: String,
    /// A short description or platform summary.
    description: String,
    /// Reference to the candidate's image.
    image_url: String,
    /// The election this candidate belongs to.
    election_id: String,
}

impl Candidate {
    /// Creates a new `Candidate`.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier
    /// * `name` - The candidate's name
    /// * `description` - A short description
    /// * `image_url` - Reference to the candidate's image
    /// * `election_id` - The owning election
    #[must_use]
    pub fn new(id: &str, name: &str, description: &str, image_url: &str, election_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            election_id: election_id.to_string(),
        }
    }

    /// Returns the unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the candidate's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the image reference.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Returns the owning election id.
    #[must_use]
    pub fn election_id(&self) -> &str {
        &self.election_id
    }
}
