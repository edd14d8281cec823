use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::models::{Match, Profile, ProfilePatch};
use crate::services::store::{ProfileStore, StoreError};

const PROFILES_COLLECTION: &str = "profiles";
const MATCHES_COLLECTION: &str = "matches";

/// File-backed key-value store
///
/// Each collection is a JSON array in its own file under the data directory
/// (`profiles.json`, `matches.json`). Every operation reads or rewrites the
/// whole collection, matching the get-all/put-all contract of the
/// persistence boundary.
pub struct JsonFileStore {
    data_dir: PathBuf,
    // Serializes read-modify-write cycles across handler threads
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store rooted at the given directory, creating it if needed
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;

        tracing::debug!("Opened JSON store at {}", data_dir.display());

        Ok(Self {
            data_dir,
            lock: Mutex::new(()),
        })
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }

    fn read_collection<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, StoreError> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }

    fn write_collection<T: Serialize>(
        &self,
        collection: &str,
        records: &[T],
    ) -> Result<(), StoreError> {
        let path = self.collection_path(collection);
        let tmp = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(records)?;
        fs::write(&tmp, json)?;
        // Rename is atomic on the same filesystem, so a crash mid-write
        // never leaves a truncated collection behind
        fs::rename(&tmp, &path)?;

        Ok(())
    }
}

impl ProfileStore for JsonFileStore {
    fn get_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read_collection(PROFILES_COLLECTION)
    }

    fn get_profile(&self, id: &str) -> Result<Profile, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let profiles: Vec<Profile> = self.read_collection(PROFILES_COLLECTION)?;

        profiles
            .into_iter()
            .find(|profile| profile.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Profile {} does not exist", id)))
    }

    fn save_profile(&self, profile: Profile) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut profiles: Vec<Profile> = self.read_collection(PROFILES_COLLECTION)?;

        if profiles.iter().any(|existing| existing.id == profile.id) {
            return Err(StoreError::Conflict(format!(
                "Profile {} already exists",
                profile.id
            )));
        }

        tracing::debug!("Saving profile {} ({})", profile.id, profile.name);

        profiles.push(profile);
        self.write_collection(PROFILES_COLLECTION, &profiles)
    }

    fn update_profile(&self, id: &str, patch: ProfilePatch) -> Result<Profile, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut profiles: Vec<Profile> = self.read_collection(PROFILES_COLLECTION)?;

        let profile = profiles
            .iter_mut()
            .find(|profile| profile.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Profile {} does not exist", id)))?;

        patch.apply(profile);
        let updated = profile.clone();

        self.write_collection(PROFILES_COLLECTION, &profiles)?;

        tracing::debug!("Updated profile {}", id);

        Ok(updated)
    }

    fn get_matches(&self) -> Result<Vec<Match>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read_collection(MATCHES_COLLECTION)
    }

    fn save_match(&self, record: Match) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut matches: Vec<Match> = self.read_collection(MATCHES_COLLECTION)?;

        tracing::debug!(
            "Saving match {} ({} / {})",
            record.id,
            record.profile_id_1,
            record.profile_id_2
        );

        matches.push(record);
        self.write_collection(MATCHES_COLLECTION, &matches)
    }
}
