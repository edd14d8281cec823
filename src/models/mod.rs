// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Match, Profile, ProfilePatch, QuestionnaireAnswers};
pub use requests::{AnswerRequest, CreateMatchRequest, CreateProfileRequest};
pub use responses::{
    AdminStatsResponse, CreateMatchResponse, CreateProfileResponse, ErrorResponse, HealthResponse,
    MatchStatusResponse, QuestionView, QuestionnaireStepResponse,
};
