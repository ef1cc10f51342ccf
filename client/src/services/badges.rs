use chrono::Utc;
use shared::{AwardBadgeRequest, BabyBadgeRecord};
use tracing::info;

use crate::api::{ApiClient, ApiError};

/// Client for the baby-badge award endpoints.
///
/// Award records are immutable once created; the backend exposes no update
/// or delete for them.
#[derive(Debug, Clone)]
pub struct BadgeService {
    api: ApiClient,
}

impl BadgeService {
    const RESOURCE: &'static str = "Badge record";

    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Award a badge to a baby.
    ///
    /// Fails fast with a validation error, before any network call, when a
    /// required field is missing or the completion date lies in the future.
    pub async fn award_badge(
        &self,
        request: &AwardBadgeRequest,
    ) -> Result<BabyBadgeRecord, ApiError> {
        validate_award_request(request)?;
        info!(
            baby_id = %request.baby_id,
            badge_id = %request.badge_id,
            "awarding badge"
        );
        self.api
            .post_json("/baby-badges-collections", request, Self::RESOURCE)
            .await
    }

    /// Fetch every badge a baby has earned, most recent first.
    /// Returns an empty list when the baby has none.
    pub async fn get_baby_badges(&self, baby_id: &str) -> Result<Vec<BabyBadgeRecord>, ApiError> {
        if baby_id.trim().is_empty() {
            return Err(ApiError::validation("Baby id is required"));
        }
        self.api
            .get_json(
                &format!("/baby-badges-collections/baby/{baby_id}"),
                Self::RESOURCE,
            )
            .await
    }
}

fn validate_award_request(request: &AwardBadgeRequest) -> Result<(), ApiError> {
    if request.baby_id.trim().is_empty() {
        return Err(ApiError::validation("Baby id is required"));
    }
    if request.badge_id.trim().is_empty() {
        return Err(ApiError::validation("Badge id is required"));
    }
    let completed_at = request
        .completed_at
        .ok_or_else(|| ApiError::validation("Completion date is required"))?;
    if completed_at > Utc::now() {
        return Err(ApiError::validation(
            "Completion date cannot be in the future",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_request() -> AwardBadgeRequest {
        AwardBadgeRequest {
            baby_id: "b1".to_string(),
            badge_id: "g1".to_string(),
            completed_at: Some(Utc::now() - Duration::days(1)),
            metadata: Default::default(),
        }
    }

    #[test]
    fn accepts_valid_request() {
        assert!(validate_award_request(&valid_request()).is_ok());
    }

    #[test]
    fn rejects_missing_fields() {
        let mut missing_baby = valid_request();
        missing_baby.baby_id.clear();
        assert_eq!(
            validate_award_request(&missing_baby),
            Err(ApiError::validation("Baby id is required"))
        );

        let mut missing_badge = valid_request();
        missing_badge.badge_id = "  ".to_string();
        assert_eq!(
            validate_award_request(&missing_badge),
            Err(ApiError::validation("Badge id is required"))
        );

        let mut missing_date = valid_request();
        missing_date.completed_at = None;
        assert_eq!(
            validate_award_request(&missing_date),
            Err(ApiError::validation("Completion date is required"))
        );
    }

    #[test]
    fn rejects_future_completion_date() {
        let mut request = valid_request();
        request.completed_at = Some(Utc::now() + Duration::hours(1));
        assert_eq!(
            validate_award_request(&request),
            Err(ApiError::validation(
                "Completion date cannot be in the future"
            ))
        );
    }

    // An invalid request must be rejected before any connection attempt: with
    // nothing listening on the target port a network call would surface as
    // `ApiError::Network`, not `Validation`.
    #[tokio::test]
    async fn invalid_award_issues_no_network_call() {
        let service = BadgeService::new(ApiClient::with_base_url("http://127.0.0.1:9"));
        let mut request = valid_request();
        request.baby_id.clear();

        let err = service.award_badge(&request).await.unwrap_err();
        assert_eq!(err, ApiError::validation("Baby id is required"));
    }

    #[tokio::test]
    async fn empty_baby_id_issues_no_network_call() {
        let service = BadgeService::new(ApiClient::with_base_url("http://127.0.0.1:9"));
        let err = service.get_baby_badges("").await.unwrap_err();
        assert_eq!(err, ApiError::validation("Baby id is required"));
    }
}
