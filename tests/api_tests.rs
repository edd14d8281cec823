// HTTP-level tests for the Matchbook route surface

use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

use matchbook::core::questionnaire::default_questions;
use matchbook::routes::{self, AppState};
use matchbook::services::MemoryStore;

const ADMIN_PATH: &str = "admin-secret-xyz789";

fn test_state() -> AppState {
    AppState::new(Arc::new(MemoryStore::new()), default_questions())
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(|cfg| routes::configure_routes(cfg, ADMIN_PATH)),
        )
        .await
    };
}

macro_rules! create_profile {
    ($app:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/profiles")
            .set_json(json!({
                "name": $name,
                "bio": format!("Bio of {}", $name),
                "photoUrl": format!("https://example.com/{}.jpg", $name),
            }))
            .to_request();

        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body["profileId"]
            .as_str()
            .expect("Response should carry the new profile id")
            .to_string()
    }};
}

macro_rules! answer_current_question {
    ($app:expr, $profile_id:expr, $answer:expr) => {{
        let req = test::TestRequest::post()
            .uri(&format!(
                "/api/v1/profiles/{}/questionnaire/answer",
                $profile_id
            ))
            .set_json(json!({ "answer": $answer }))
            .to_request();

        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body
    }};
}

#[actix_web::test]
async fn test_create_and_fetch_profile() {
    let state = test_state();
    let app = test_app!(state);

    let profile_id = create_profile!(app, "Alice");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/profiles/{}", profile_id))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(profile["name"], "Alice");
    assert_eq!(profile["bio"], "Bio of Alice");
    assert_eq!(profile["matched"], false);
    assert!(profile.get("questionnaire").is_none());
}

#[actix_web::test]
async fn test_create_profile_requires_fields() {
    let state = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/profiles")
        .set_json(json!({
            "name": "",
            "bio": "Bio",
            "photoUrl": "https://example.com/p.jpg",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_unknown_profile_is_404() {
    let state = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/profiles/missing")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_questionnaire_flow_over_http() {
    let state = test_state();
    let app = test_app!(state);

    let profile_id = create_profile!(app, "Alice");

    // Start the session
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/profiles/{}/questionnaire", profile_id))
        .to_request();
    let step: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(step["completed"], false);
    assert_eq!(step["question"]["questionId"], "q1");
    assert_eq!(step["question"]["total"], 5);

    // An empty answer is rejected and the flow stays put
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/profiles/{}/questionnaire/answer", profile_id))
        .set_json(json!({ "answer": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/profiles/{}/questionnaire", profile_id))
        .to_request();
    let step: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(step["question"]["questionId"], "q1");

    // Answer all five questions
    for index in 1..=5 {
        let step = answer_current_question!(app, profile_id, format!("answer {}", index));
        if index < 5 {
            assert_eq!(step["completed"], false);
            assert_eq!(step["question"]["index"], index);
        } else {
            assert_eq!(step["completed"], true);
        }
    }

    // The answers are attached to the profile
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/profiles/{}", profile_id))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;
    let answers = profile["questionnaire"]["answers"]
        .as_object()
        .expect("Questionnaire answers should be a map");
    assert_eq!(answers.len(), 5);
    assert_eq!(answers["q1"], "answer 1");

    // The session is closed after completion
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/profiles/{}/questionnaire", profile_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_questionnaire_back_navigation() {
    let state = test_state();
    let app = test_app!(state);

    let profile_id = create_profile!(app, "Alice");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/profiles/{}/questionnaire", profile_id))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    answer_current_question!(app, profile_id, "first");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/profiles/{}/questionnaire/back", profile_id))
        .to_request();
    let step: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(step["question"]["questionId"], "q1");
    // The staged answer is still there for redisplay
    assert_eq!(step["question"]["answer"], "first");
}

#[actix_web::test]
async fn test_admin_match_flow() {
    let state = test_state();
    let app = test_app!(state);

    let alice_id = create_profile!(app, "Alice");
    let bob_id = create_profile!(app, "Bob");

    // Both show up as unmatched
    let req = test::TestRequest::get()
        .uri(&format!("/{}/profiles", ADMIN_PATH))
        .to_request();
    let unmatched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(unmatched.as_array().unwrap().len(), 2);

    // Matching a profile with itself is rejected
    let req = test::TestRequest::post()
        .uri(&format!("/{}/matches", ADMIN_PATH))
        .set_json(json!({ "profileId1": alice_id, "profileId2": alice_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Pair Alice and Bob
    let req = test::TestRequest::post()
        .uri(&format!("/{}/matches", ADMIN_PATH))
        .set_json(json!({ "profileId1": alice_id, "profileId2": bob_id }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["match"]["profileId1"], alice_id.as_str());
    assert_eq!(body["match"]["profileId2"], bob_id.as_str());

    // The unmatched list empties and the counters reflect the pairing
    let req = test::TestRequest::get()
        .uri(&format!("/{}/profiles", ADMIN_PATH))
        .to_request();
    let unmatched: Value = test::call_and_read_body_json(&app, req).await;
    assert!(unmatched.as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/{}/stats", ADMIN_PATH))
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["totalProfiles"], 2);
    assert_eq!(stats["unmatchedProfiles"], 0);
    assert_eq!(stats["totalMatches"], 1);

    // Both participants now see their match
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/profiles/{}/status", alice_id))
        .to_request();
    let status: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(status["matched"], true);
    assert_eq!(status["partner"]["name"], "Bob");
}

#[actix_web::test]
async fn test_admin_detail_shows_answers_verbatim() {
    let state = test_state();
    let app = test_app!(state);

    let profile_id = create_profile!(app, "Alice");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/profiles/{}/questionnaire", profile_id))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;
    for index in 1..=5 {
        answer_current_question!(app, profile_id, format!("answer {}", index));
    }

    let req = test::TestRequest::get()
        .uri(&format!("/{}/profiles/{}", ADMIN_PATH, profile_id))
        .to_request();
    let detail: Value = test::call_and_read_body_json(&app, req).await;

    let answers = detail["questionnaire"]["answers"].as_object().unwrap();
    assert_eq!(answers.len(), 5);
    // Keys are question ids, not prompt texts
    assert!(answers.contains_key("q4"));
}

#[actix_web::test]
async fn test_admin_routes_only_under_path_token() {
    let state = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/admin/profiles").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
}
