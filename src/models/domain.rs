use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A user profile created through the onboarding flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub bio: String,
    #[serde(rename = "photoUrl")]
    pub photo_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub matched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questionnaire: Option<QuestionnaireAnswers>,
}

impl Profile {
    /// Build a fresh profile with a generated id and creation timestamp
    pub fn new(name: String, bio: String, photo_url: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            bio,
            photo_url,
            created_at: chrono::Utc::now(),
            matched: false,
            questionnaire: None,
        }
    }
}

/// Completed questionnaire answers attached to a profile
///
/// The `answers` map is keyed by question id; insertion order carries no
/// meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub answers: HashMap<String, String>,
    #[serde(rename = "completedAt")]
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

/// An operator-created pairing of two profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    #[serde(rename = "profileId1")]
    pub profile_id_1: String,
    #[serde(rename = "profileId2")]
    pub profile_id_2: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Match {
    /// Build a match between two profiles, keeping selection order
    pub fn new(profile_id_1: String, profile_id_2: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            profile_id_1,
            profile_id_2,
            created_at: chrono::Utc::now(),
        }
    }

    /// True if the given profile participates in this match
    pub fn involves(&self, profile_id: &str) -> bool {
        self.profile_id_1 == profile_id || self.profile_id_2 == profile_id
    }

    /// The other participant's id, if the given profile participates
    pub fn partner_of(&self, profile_id: &str) -> Option<&str> {
        if self.profile_id_1 == profile_id {
            Some(&self.profile_id_2)
        } else if self.profile_id_2 == profile_id {
            Some(&self.profile_id_1)
        } else {
            None
        }
    }
}

/// Partial profile update; only fields that are present are merged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "photoUrl", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questionnaire: Option<QuestionnaireAnswers>,
}

impl ProfilePatch {
    /// Patch that flips the matched flag
    pub fn matched(value: bool) -> Self {
        Self {
            matched: Some(value),
            ..Self::default()
        }
    }

    /// Patch that attaches a completed questionnaire
    pub fn questionnaire(answers: QuestionnaireAnswers) -> Self {
        Self {
            questionnaire: Some(answers),
            ..Self::default()
        }
    }

    /// Merge this patch into an existing profile
    pub fn apply(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
        if let Some(photo_url) = self.photo_url {
            profile.photo_url = photo_url;
        }
        if let Some(matched) = self.matched {
            profile.matched = matched;
        }
        if let Some(questionnaire) = self.questionnaire {
            profile.questionnaire = Some(questionnaire);
        }
    }
}
