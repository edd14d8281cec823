use serde::{Deserialize, Serialize};
use crate::core::questionnaire::QuestionKind;
use crate::models::domain::{Match, Profile};

/// Response for profile creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileResponse {
    #[serde(rename = "profileId")]
    pub profile_id: String,
}

/// The current questionnaire question as shown to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    #[serde(rename = "questionId")]
    pub question_id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub index: usize,
    pub total: usize,
    #[serde(rename = "progressPercent")]
    pub progress_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Response for a questionnaire navigation step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireStepResponse {
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
}

/// Matching-screen data for a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStatusResponse {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub matched: bool,
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_record: Option<Match>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<Profile>,
}

/// Response after creating a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatchResponse {
    pub success: bool,
    #[serde(rename = "match")]
    pub match_record: Match,
}

/// Admin overview counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminStatsResponse {
    #[serde(rename = "totalProfiles")]
    pub total_profiles: usize,
    #[serde(rename = "unmatchedProfiles")]
    pub unmatched_profiles: usize,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
