use serde_json::Value;
use shared::{ListEnvelope, MutationEnvelope, Notification, NotificationQuery};
use tracing::debug;

use crate::api::{ApiClient, ApiError};

/// Client for the notification endpoints
#[derive(Debug, Clone)]
pub struct NotificationService {
    api: ApiClient,
}

impl NotificationService {
    const RESOURCE: &'static str = "Notification";

    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch one page of notifications, newest first
    pub async fn get_notifications(
        &self,
        query: &NotificationQuery,
    ) -> Result<ListEnvelope<Notification>, ApiError> {
        let mut params = Vec::new();
        if let Some(page) = query.page {
            params.push(format!("page={page}"));
        }
        if let Some(limit) = query.limit {
            params.push(format!("limit={limit}"));
        }
        if let Some(unread_only) = query.unread_only {
            params.push(format!("unreadOnly={unread_only}"));
        }
        let path = if params.is_empty() {
            "/notifications".to_string()
        } else {
            format!("/notifications?{}", params.join("&"))
        };
        debug!(%path, "fetching notifications");
        self.api.get_json(&path, Self::RESOURCE).await
    }

    /// Mark a single notification as read and return the updated record
    pub async fn mark_as_read(&self, notification_id: &str) -> Result<Notification, ApiError> {
        if notification_id.trim().is_empty() {
            return Err(ApiError::validation("Notification id is required"));
        }
        let envelope: MutationEnvelope<Notification> = self
            .api
            .patch_json(
                &format!("/notifications/{notification_id}/read"),
                &Value::Null,
                Self::RESOURCE,
            )
            .await?;
        Ok(envelope.data)
    }

    /// Mark every notification for the current user as read
    pub async fn mark_all_as_read(&self) -> Result<(), ApiError> {
        let _: MutationEnvelope<Value> = self
            .api
            .patch_json("/notifications/read-all", &Value::Null, Self::RESOURCE)
            .await?;
        Ok(())
    }
}
