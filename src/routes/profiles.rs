use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::questionnaire::{FlowStep, QuestionnaireError, QuestionnaireFlow};
use crate::models::{
    AnswerRequest, CreateProfileRequest, CreateProfileResponse, ErrorResponse, HealthResponse,
    MatchStatusResponse, Profile, ProfilePatch, QuestionView, QuestionnaireStepResponse,
};
use crate::routes::AppState;
use crate::services::StoreError;

/// Configure the user-facing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/profiles", web::post().to(create_profile))
        .route("/profiles/{id}", web::get().to(get_profile))
        .route("/profiles/{id}/status", web::get().to(profile_status))
        .service(
            web::resource("/profiles/{id}/questionnaire")
                .route(web::post().to(start_questionnaire))
                .route(web::get().to(current_question)),
        )
        .route(
            "/profiles/{id}/questionnaire/answer",
            web::post().to(answer_question),
        )
        .route(
            "/profiles/{id}/questionnaire/back",
            web::post().to(go_back),
        );
}

fn question_view(flow: &QuestionnaireFlow) -> QuestionView {
    let question = flow.current_question();
    QuestionView {
        question_id: question.id.clone(),
        prompt: question.prompt.clone(),
        kind: question.kind,
        index: flow.current_index(),
        total: flow.total(),
        progress_percent: flow.progress_percent(),
        answer: flow.current_answer().map(str::to_string),
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.get_profiles().is_ok();

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Create a new profile
///
/// POST /api/v1/profiles
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "bio": "string",
///   "photoUrl": "string"
/// }
/// ```
async fn create_profile(
    state: web::Data<AppState>,
    req: web::Json<CreateProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_profile request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let profile = Profile::new(req.name, req.bio, req.photo_url);
    let profile_id = profile.id.clone();

    match state.store.save_profile(profile) {
        Ok(()) => {
            tracing::info!("Created profile {}", profile_id);
            HttpResponse::Ok().json(CreateProfileResponse { profile_id })
        }
        Err(e) => {
            tracing::error!("Failed to save profile: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to save profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Fetch a single profile
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.store.get_profile(&id) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e @ StoreError::NotFound(_)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message: e.to_string(),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch profile {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Matching-screen data for a profile
///
/// GET /api/v1/profiles/{id}/status
///
/// Reports the matched flag and, when a pairing exists, the match record and
/// the partner profile. A matched flag without a match record can be left
/// behind by an interrupted match creation; the flag is reported as-is and
/// the pairing omitted.
async fn profile_status(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    let profile = match state.store.get_profile(&id) {
        Ok(profile) => profile,
        Err(e @ StoreError::NotFound(_)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: e.to_string(),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile {}: {}", id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    if !profile.matched {
        return HttpResponse::Ok().json(MatchStatusResponse {
            profile_id: id,
            matched: false,
            match_record: None,
            partner: None,
        });
    }

    let matches = match state.store.get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("Failed to fetch matches: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch matches".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let match_record = matches.into_iter().find(|record| record.involves(&id));
    let partner = match_record
        .as_ref()
        .and_then(|record| record.partner_of(&id))
        .and_then(|partner_id| state.store.get_profile(partner_id).ok());

    HttpResponse::Ok().json(MatchStatusResponse {
        profile_id: id,
        matched: true,
        match_record,
        partner,
    })
}

/// Start (or restart) a questionnaire session for a profile
///
/// POST /api/v1/profiles/{id}/questionnaire
async fn start_questionnaire(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    // The owning profile must exist before a session is opened
    match state.store.get_profile(&id) {
        Ok(_) => {}
        Err(e @ StoreError::NotFound(_)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: e.to_string(),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile {}: {}", id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    }

    let flow = QuestionnaireFlow::new(id.clone(), state.questions.as_ref().clone());
    let view = question_view(&flow);

    state.lock_sessions().insert(id.clone(), flow);

    tracing::info!("Started questionnaire session for profile {}", id);

    HttpResponse::Ok().json(QuestionnaireStepResponse {
        completed: false,
        question: Some(view),
    })
}

/// Current question and progress for an active session
async fn current_question(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let sessions = state.lock_sessions();

    match sessions.get(&id) {
        Some(flow) => HttpResponse::Ok().json(QuestionnaireStepResponse {
            completed: false,
            question: Some(question_view(flow)),
        }),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "No active questionnaire session".to_string(),
            message: format!("Profile {} has no questionnaire in progress", id),
            status_code: 404,
        }),
    }
}

/// Record the answer for the current question and advance
///
/// POST /api/v1/profiles/{id}/questionnaire/answer
///
/// Advancing past the last question persists the full answer set into the
/// owning profile in a single update and closes the session.
async fn answer_question(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<AnswerRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let mut sessions = state.lock_sessions();

    let flow = match sessions.get_mut(&id) {
        Some(flow) => flow,
        None => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "No active questionnaire session".to_string(),
                message: format!("Profile {} has no questionnaire in progress", id),
                status_code: 404,
            });
        }
    };

    flow.record_answer(req.answer.clone());

    match flow.advance() {
        Err(e @ QuestionnaireError::EmptyAnswer) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: e.to_string(),
            status_code: 400,
        }),
        Ok(FlowStep::Advanced) => {
            let view = question_view(flow);
            HttpResponse::Ok().json(QuestionnaireStepResponse {
                completed: false,
                question: Some(view),
            })
        }
        Ok(FlowStep::Completed(answers)) => {
            match state
                .store
                .update_profile(&id, ProfilePatch::questionnaire(answers))
            {
                Ok(_) => {
                    sessions.remove(&id);
                    tracing::info!("Questionnaire completed for profile {}", id);
                    HttpResponse::Ok().json(QuestionnaireStepResponse {
                        completed: true,
                        question: None,
                    })
                }
                Err(e) => {
                    // Session stays open so the submission can be retried
                    tracing::error!("Failed to persist questionnaire for {}: {}", id, e);
                    HttpResponse::InternalServerError().json(ErrorResponse {
                        error: "Failed to persist questionnaire".to_string(),
                        message: e.to_string(),
                        status_code: 500,
                    })
                }
            }
        }
    }
}

/// Step back to the previous question
async fn go_back(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let mut sessions = state.lock_sessions();

    match sessions.get_mut(&id) {
        Some(flow) => {
            flow.back();
            HttpResponse::Ok().json(QuestionnaireStepResponse {
                completed: false,
                question: Some(question_view(flow)),
            })
        }
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "No active questionnaire session".to_string(),
            message: format!("Profile {} has no questionnaire in progress", id),
            status_code: 404,
        }),
    }
}
