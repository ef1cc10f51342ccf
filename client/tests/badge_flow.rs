//! End-to-end exercise of the badge slice against a fake HTTP backend.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use nestling_client::services::{BadgeService, CareService, FamilyService};
use nestling_client::state::BadgeState;
use nestling_client::{ApiClient, ApiError};
use serde_json::{json, Value};
use shared::{AwardBadgeRequest, FamilyRole, InviteMemberRequest};

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/baby-badges-collections", post(award_badge))
        .route("/baby-badges-collections/baby/:baby_id", get(baby_badges))
        .route("/pregnancy-care/articles/:id", get(missing_article))
        .route("/family/invitations", post(rejected_invitation));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fake backend");
    });
    format!("http://{addr}")
}

async fn award_badge(Json(body): Json<Value>) -> impl IntoResponse {
    let record = json!({
        "id": "r-new",
        "babyId": body["babyId"],
        "badgeId": body["badgeId"],
        "completedAt": body["completedAt"],
        "note": body["note"],
    });
    (StatusCode::CREATED, Json(record))
}

async fn baby_badges(Path(baby_id): Path<String>) -> Json<Value> {
    let records = match baby_id.as_str() {
        "b1" => json!([
            {"id": "r1", "babyId": "b1", "badgeId": "g1", "completedAt": "2023-01-01T00:00:00Z"},
            {"id": "r2", "babyId": "b1", "badgeId": "g2", "completedAt": "2023-02-01T00:00:00Z"},
        ]),
        "b2" => json!([
            {"id": "r9", "babyId": "b2", "badgeId": "g1", "completedAt": "2023-03-01T00:00:00Z"},
        ]),
        _ => json!([]),
    };
    Json(records)
}

async fn missing_article() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}

async fn rejected_invitation() -> impl IntoResponse {
    let body = json!({
        "message": ["email must be an email", "role must be a valid role"],
        "statusCode": 400,
        "error": "Bad Request",
    });
    (StatusCode::BAD_REQUEST, Json(body))
}

fn award_request(baby_id: &str, badge_id: &str) -> AwardBadgeRequest {
    AwardBadgeRequest {
        baby_id: baby_id.to_string(),
        badge_id: badge_id.to_string(),
        completed_at: Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
        metadata: Default::default(),
    }
}

#[tokio::test]
async fn awarding_a_badge_prepends_the_new_record() {
    let base_url = spawn_backend().await;
    let service = BadgeService::new(ApiClient::with_base_url(&base_url));
    let mut state = BadgeState::default();

    state.fetch_badges(&service, "b1").await;
    assert!(!state.is_loading);
    assert_eq!(state.baby_badges.len(), 2);
    let before = state.baby_badges.len();

    state.award_badge(&service, &award_request("b1", "g1")).await;
    assert!(!state.is_submitting);
    assert!(state.error.is_none());
    assert_eq!(state.baby_badges.len(), before + 1);
    assert_eq!(state.baby_badges[0].id, "r-new");
    assert_eq!(state.baby_badges[0].baby_id, "b1");
}

#[tokio::test]
async fn fetching_another_baby_discards_the_previous_list() {
    let base_url = spawn_backend().await;
    let service = BadgeService::new(ApiClient::with_base_url(&base_url));
    let mut state = BadgeState::default();

    state.fetch_badges(&service, "b1").await;
    assert_eq!(state.baby_badges.len(), 2);
    assert_eq!(state.selected_baby_id.as_deref(), Some("b1"));

    state.fetch_badges(&service, "b2").await;
    assert_eq!(state.baby_badges.len(), 1);
    assert_eq!(state.baby_badges[0].id, "r9");
    assert_eq!(state.selected_baby_id.as_deref(), Some("b2"));
}

#[tokio::test]
async fn fetching_a_baby_with_no_badges_yields_an_empty_list() {
    let base_url = spawn_backend().await;
    let service = BadgeService::new(ApiClient::with_base_url(&base_url));
    let mut state = BadgeState::default();

    state.fetch_badges(&service, "b-none").await;
    assert!(state.error.is_none());
    assert!(state.baby_badges.is_empty());
    assert_eq!(state.selected_baby_id.as_deref(), Some("b-none"));
}

#[tokio::test]
async fn bare_404_maps_to_the_resource_message() {
    let base_url = spawn_backend().await;
    let service = CareService::new(ApiClient::with_base_url(&base_url));

    let err = service.get_article("a-missing").await.unwrap_err();
    assert_eq!(err.to_string(), "Article not found.");
}

#[tokio::test]
async fn structured_error_body_is_used_verbatim() {
    let base_url = spawn_backend().await;
    let service = FamilyService::new(ApiClient::with_base_url(&base_url));

    let request = InviteMemberRequest {
        email: "grandma@nest.app".to_string(),
        role: FamilyRole::Relative,
    };
    let err = service.invite_member(&request).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "email must be an email. role must be a valid role"
    );
}

#[tokio::test]
async fn unreachable_backend_normalizes_to_network_error() {
    // nothing listens on this port
    let service = BadgeService::new(ApiClient::with_base_url("http://127.0.0.1:59999"));
    let mut state = BadgeState::default();

    state.fetch_badges(&service, "b1").await;
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("Network error"));
    assert!(state.baby_badges.is_empty());

    let err = service.get_baby_badges("b1").await.unwrap_err();
    assert_eq!(err, ApiError::Network);
}
