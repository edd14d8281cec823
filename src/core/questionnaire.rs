use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::models::QuestionnaireAnswers;

/// Errors surfaced by the questionnaire flow
#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("The current question has no answer yet")]
    EmptyAnswer,
}

/// Input widget hint for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    TextArea,
}

/// An ordered questionnaire prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
}

/// The built-in onboarding question set
pub fn default_questions() -> Vec<Question> {
    vec![
        Question {
            id: "q1".to_string(),
            prompt: "What are you looking for in a match?".to_string(),
            kind: QuestionKind::TextArea,
        },
        Question {
            id: "q2".to_string(),
            prompt: "What do you do for fun?".to_string(),
            kind: QuestionKind::TextArea,
        },
        Question {
            id: "q3".to_string(),
            prompt: "Describe your ideal weekend".to_string(),
            kind: QuestionKind::TextArea,
        },
        Question {
            id: "q4".to_string(),
            prompt: "What are your top 3 values?".to_string(),
            kind: QuestionKind::Text,
        },
        Question {
            id: "q5".to_string(),
            prompt: "Where do you see yourself in 5 years?".to_string(),
            kind: QuestionKind::TextArea,
        },
    ]
}

/// Outcome of advancing the flow
#[derive(Debug)]
pub enum FlowStep {
    /// Moved to the next question
    Advanced,
    /// All questions answered; the answer set is ready to persist
    Completed(QuestionnaireAnswers),
}

/// Linear questionnaire state machine
///
/// Holds the in-memory answer sheet for one profile: the current question
/// index and the answers staged so far. Nothing is persisted until the flow
/// advances past the last question; the caller attaches the returned answer
/// set to the profile in a single update. Forward navigation requires a
/// non-empty answer for the current question, backward navigation is
/// unrestricted.
#[derive(Debug, Clone)]
pub struct QuestionnaireFlow {
    profile_id: String,
    questions: Vec<Question>,
    current: usize,
    answers: HashMap<String, String>,
    started_at: chrono::DateTime<chrono::Utc>,
}

impl QuestionnaireFlow {
    pub fn new(profile_id: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            profile_id: profile_id.into(),
            questions,
            current: 0,
            answers: HashMap::new(),
            started_at: chrono::Utc::now(),
        }
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Completion percentage including the question currently shown
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 100.0;
        }
        ((self.current + 1) as f64 / self.questions.len() as f64) * 100.0
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    /// The answer staged for the current question, if any
    pub fn current_answer(&self) -> Option<&str> {
        self.answers
            .get(&self.current_question().id)
            .map(String::as_str)
    }

    pub fn started_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.started_at
    }

    /// Stage an answer for the current question
    pub fn record_answer(&mut self, answer: impl Into<String>) {
        let id = self.current_question().id.clone();
        self.answers.insert(id, answer.into());
    }

    /// Move forward one question, completing the flow past the last one
    ///
    /// The current question must have a non-empty answer after trimming;
    /// otherwise the flow stays on the same question and nothing is
    /// persisted.
    pub fn advance(&mut self) -> Result<FlowStep, QuestionnaireError> {
        let answered = self
            .current_answer()
            .map(|answer| !answer.trim().is_empty())
            .unwrap_or(false);

        if !answered {
            return Err(QuestionnaireError::EmptyAnswer);
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            Ok(FlowStep::Advanced)
        } else {
            Ok(FlowStep::Completed(QuestionnaireAnswers {
                profile_id: self.profile_id.clone(),
                answers: self.answers.clone(),
                completed_at: chrono::Utc::now(),
            }))
        }
    }

    /// Step back one question; the target does not need an answer
    pub fn back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }
}
