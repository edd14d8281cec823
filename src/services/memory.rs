use std::sync::{PoisonError, RwLock};

use crate::models::{Match, Profile, ProfilePatch};
use crate::services::store::{ProfileStore, StoreError};

/// In-memory store
///
/// Backs tests and ephemeral runs; data disappears with the process.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

#[derive(Default)]
struct Collections {
    profiles: Vec<Profile>,
    matches: Vec<Match>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn get_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.profiles.clone())
    }

    fn get_profile(&self, id: &str) -> Result<Profile, StoreError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .profiles
            .iter()
            .find(|profile| profile.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Profile {} does not exist", id)))
    }

    fn save_profile(&self, profile: Profile) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        if inner.profiles.iter().any(|existing| existing.id == profile.id) {
            return Err(StoreError::Conflict(format!(
                "Profile {} already exists",
                profile.id
            )));
        }

        inner.profiles.push(profile);
        Ok(())
    }

    fn update_profile(&self, id: &str, patch: ProfilePatch) -> Result<Profile, StoreError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let profile = inner
            .profiles
            .iter_mut()
            .find(|profile| profile.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Profile {} does not exist", id)))?;

        patch.apply(profile);
        Ok(profile.clone())
    }

    fn get_matches(&self) -> Result<Vec<Match>, StoreError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.matches.clone())
    }

    fn save_match(&self, record: Match) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.matches.push(record);
        Ok(())
    }
}
