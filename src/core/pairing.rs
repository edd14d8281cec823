use thiserror::Error;

use crate::models::{Match, ProfilePatch};
use crate::services::{ProfileStore, StoreError};

/// Errors surfaced by manual match creation
#[derive(Debug, Error)]
pub enum PairingError {
    #[error("Two profiles must be selected")]
    MissingSelection,

    #[error("Cannot match a profile with itself")]
    SameProfile,

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Profile already matched: {0}")]
    AlreadyMatched(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Pair two profiles and record the result
///
/// Validation failures leave the store untouched. On success the match is
/// saved first, then each participant is flagged matched in its own update;
/// the three writes run in sequence with no rollback.
pub fn create_match(
    store: &dyn ProfileStore,
    first_id: &str,
    second_id: &str,
) -> Result<Match, PairingError> {
    if first_id.trim().is_empty() || second_id.trim().is_empty() {
        return Err(PairingError::MissingSelection);
    }

    if first_id == second_id {
        return Err(PairingError::SameProfile);
    }

    for id in [first_id, second_id] {
        let profile = match store.get_profile(id) {
            Ok(profile) => profile,
            Err(StoreError::NotFound(_)) => {
                return Err(PairingError::ProfileNotFound(id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        if profile.matched {
            return Err(PairingError::AlreadyMatched(id.to_string()));
        }
    }

    let record = Match::new(first_id.to_string(), second_id.to_string());

    store.save_match(record.clone())?;
    store.update_profile(first_id, ProfilePatch::matched(true))?;
    store.update_profile(second_id, ProfilePatch::matched(true))?;

    tracing::info!(
        "Created match {} ({} / {})",
        record.id,
        first_id,
        second_id
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profile;
    use crate::services::MemoryStore;

    fn seeded_store() -> (MemoryStore, String, String) {
        let store = MemoryStore::new();
        let alice = Profile::new(
            "Alice".to_string(),
            "Hello".to_string(),
            "https://example.com/alice.jpg".to_string(),
        );
        let bob = Profile::new(
            "Bob".to_string(),
            "Hi".to_string(),
            "https://example.com/bob.jpg".to_string(),
        );
        let (alice_id, bob_id) = (alice.id.clone(), bob.id.clone());
        store.save_profile(alice).unwrap();
        store.save_profile(bob).unwrap();
        (store, alice_id, bob_id)
    }

    #[test]
    fn test_create_match_flags_both_profiles() {
        let (store, alice_id, bob_id) = seeded_store();

        let record = create_match(&store, &alice_id, &bob_id).unwrap();

        assert_eq!(record.profile_id_1, alice_id);
        assert_eq!(record.profile_id_2, bob_id);
        assert_eq!(store.get_matches().unwrap().len(), 1);
        assert!(store.get_profile(&alice_id).unwrap().matched);
        assert!(store.get_profile(&bob_id).unwrap().matched);
        assert!(store.get_unmatched_profiles().unwrap().is_empty());
    }

    #[test]
    fn test_same_profile_is_rejected() {
        let (store, alice_id, _bob_id) = seeded_store();

        let result = create_match(&store, &alice_id, &alice_id);

        assert!(matches!(result, Err(PairingError::SameProfile)));
        assert!(store.get_matches().unwrap().is_empty());
        assert!(!store.get_profile(&alice_id).unwrap().matched);
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let (store, alice_id, _bob_id) = seeded_store();

        let result = create_match(&store, &alice_id, "");

        assert!(matches!(result, Err(PairingError::MissingSelection)));
        assert!(store.get_matches().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_profile_is_rejected() {
        let (store, alice_id, _bob_id) = seeded_store();

        let result = create_match(&store, &alice_id, "missing");

        assert!(matches!(result, Err(PairingError::ProfileNotFound(_))));
        assert!(store.get_matches().unwrap().is_empty());
        assert!(!store.get_profile(&alice_id).unwrap().matched);
    }

    #[test]
    fn test_already_matched_profile_is_rejected() {
        let (store, alice_id, bob_id) = seeded_store();
        let carol = Profile::new(
            "Carol".to_string(),
            "Hey".to_string(),
            "https://example.com/carol.jpg".to_string(),
        );
        let carol_id = carol.id.clone();
        store.save_profile(carol).unwrap();

        create_match(&store, &alice_id, &bob_id).unwrap();
        let result = create_match(&store, &alice_id, &carol_id);

        assert!(matches!(result, Err(PairingError::AlreadyMatched(_))));
        assert_eq!(store.get_matches().unwrap().len(), 1);
        assert!(!store.get_profile(&carol_id).unwrap().matched);
    }
}
