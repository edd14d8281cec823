use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub bio: String,
    #[validate(length(min = 1))]
    #[serde(alias = "photo_url", rename = "photoUrl")]
    pub photo_url: String,
}

/// Request carrying the answer for the current questionnaire question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

/// Request to pair two profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "profile_id_1", rename = "profileId1")]
    pub profile_id_1: String,
    #[validate(length(min = 1))]
    #[serde(alias = "profile_id_2", rename = "profileId2")]
    pub profile_id_2: String,
}
