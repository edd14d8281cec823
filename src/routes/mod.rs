// Route exports
pub mod admin;
pub mod profiles;

use actix_web::web;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::questionnaire::{Question, QuestionnaireFlow};
use crate::services::ProfileStore;

/// Application state shared across all handlers
///
/// Questionnaire sessions are held in memory only; they do not survive a
/// process restart.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub questions: Arc<Vec<Question>>,
    sessions: Arc<Mutex<HashMap<String, QuestionnaireFlow>>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProfileStore>, questions: Vec<Question>) -> Self {
        Self {
            store,
            questions: Arc::new(questions),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Lock the questionnaire session table
    pub(crate) fn lock_sessions(&self) -> MutexGuard<'_, HashMap<String, QuestionnaireFlow>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Configure the user-facing API and the operator scope
///
/// The admin scope is mounted under a distinguished path token. Knowing the
/// token grants full read/write access; this is not an authentication
/// boundary.
pub fn configure_routes(cfg: &mut web::ServiceConfig, admin_path: &str) {
    cfg.service(web::scope("/api/v1").configure(profiles::configure))
        .service(web::scope(&format!("/{}", admin_path.trim_matches('/'))).configure(admin::configure));
}
