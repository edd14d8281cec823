use thiserror::Error;

use crate::models::{Match, Profile, ProfilePatch};

/// Errors that can occur when interacting with the profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Persistence and query contract for profiles and matches
///
/// All operations are synchronous and run to completion before the caller
/// observes the result; there is no interleaving of two mutations within a
/// single request. Implementations must be safe to share across handler
/// threads.
///
/// `save_match` records the match only; flipping the participants' matched
/// flags is the caller's responsibility and happens in separate
/// `update_profile` calls.
pub trait ProfileStore: Send + Sync {
    /// All profiles, in insertion order
    fn get_profiles(&self) -> Result<Vec<Profile>, StoreError>;

    /// Fetch a single profile by id
    fn get_profile(&self, id: &str) -> Result<Profile, StoreError>;

    /// Insert a new profile; the id must not already exist
    fn save_profile(&self, profile: Profile) -> Result<(), StoreError>;

    /// Merge the given fields into the profile identified by `id`
    ///
    /// Returns the updated profile, or `NotFound` when the id is unknown.
    fn update_profile(&self, id: &str, patch: ProfilePatch) -> Result<Profile, StoreError>;

    /// Profiles that have not been paired yet
    fn get_unmatched_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        Ok(self
            .get_profiles()?
            .into_iter()
            .filter(|profile| !profile.matched)
            .collect())
    }

    /// All recorded matches
    fn get_matches(&self) -> Result<Vec<Match>, StoreError>;

    /// Insert a new match record
    fn save_match(&self, record: Match) -> Result<(), StoreError>;
}
