//! Matchbook - profile matching service with manual admin pairing
//!
//! This library backs the Matchbook prototype: users create a profile,
//! answer a fixed questionnaire, and are paired into matches by an operator.
//! Persistence is a local key-value store; pairing is manual, not
//! algorithmic.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::pairing::{create_match, PairingError};
pub use crate::core::questionnaire::{
    default_questions, FlowStep, Question, QuestionKind, QuestionnaireFlow,
};
pub use models::{Match, Profile, ProfilePatch, QuestionnaireAnswers};
pub use services::{JsonFileStore, MemoryStore, ProfileStore, StoreError};
