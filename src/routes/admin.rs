use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::pairing::{self, PairingError};
use crate::models::{
    AdminStatsResponse, CreateMatchRequest, CreateMatchResponse, ErrorResponse,
};
use crate::routes::AppState;
use crate::services::StoreError;

/// Configure the operator-only routes
///
/// Listing endpoints re-query the store on every request; "refresh" on the
/// operator side is simply another request.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profiles", web::get().to(list_unmatched_profiles))
        .route("/profiles/{id}", web::get().to(profile_detail))
        .service(
            web::resource("/matches")
                .route(web::post().to(create_match))
                .route(web::get().to(list_matches)),
        )
        .route("/stats", web::get().to(stats));
}

/// Profiles still waiting to be paired
async fn list_unmatched_profiles(state: web::Data<AppState>) -> impl Responder {
    match state.store.get_unmatched_profiles() {
        Ok(profiles) => HttpResponse::Ok().json(profiles),
        Err(e) => {
            tracing::error!("Failed to fetch unmatched profiles: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch unmatched profiles".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Read-only profile detail, questionnaire answers included
///
/// Answers are returned as a question-id to answer-text map; the ids are
/// reported verbatim, the prompt texts are not resolved at this layer.
async fn profile_detail(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
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

/// Pair two profiles
///
/// POST /{admin_path}/matches
///
/// Request body:
/// ```json
/// {
///   "profileId1": "string",
///   "profileId2": "string"
/// }
/// ```
async fn create_match(
    state: web::Data<AppState>,
    req: web::Json<CreateMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match pairing::create_match(state.store.as_ref(), &req.profile_id_1, &req.profile_id_2) {
        Ok(record) => HttpResponse::Ok().json(CreateMatchResponse {
            success: true,
            match_record: record,
        }),
        Err(e @ (PairingError::MissingSelection | PairingError::SameProfile)) => {
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
        Err(e @ PairingError::ProfileNotFound(_)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message: e.to_string(),
            status_code: 404,
        }),
        Err(e @ PairingError::AlreadyMatched(_)) => HttpResponse::Conflict().json(ErrorResponse {
            error: "Profile already matched".to_string(),
            message: e.to_string(),
            status_code: 409,
        }),
        Err(PairingError::Store(e)) => {
            tracing::error!("Failed to create match: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create match".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// All recorded matches
async fn list_matches(state: web::Data<AppState>) -> impl Responder {
    match state.store.get_matches() {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => {
            tracing::error!("Failed to fetch matches: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch matches".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Overview counters for the operator screen
async fn stats(state: web::Data<AppState>) -> impl Responder {
    let profiles = match state.store.get_profiles() {
        Ok(profiles) => profiles,
        Err(e) => {
            tracing::error!("Failed to fetch profiles: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profiles".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

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

    let unmatched = profiles.iter().filter(|profile| !profile.matched).count();

    HttpResponse::Ok().json(AdminStatsResponse {
        total_profiles: profiles.len(),
        unmatched_profiles: unmatched,
        total_matches: matches.len(),
    })
}
