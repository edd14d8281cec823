// Core flow exports
pub mod pairing;
pub mod questionnaire;

pub use pairing::{create_match, PairingError};
pub use questionnaire::{
    default_questions, FlowStep, Question, QuestionKind, QuestionnaireError, QuestionnaireFlow,
};
