use serde_json::Value;
use shared::{ClosetPost, ClosetQuery, CreateClosetPostRequest, ListEnvelope, MutationEnvelope};
use tracing::{debug, info};

use crate::api::{ApiClient, ApiError};

const MAX_TITLE_LEN: usize = 100;

/// Client for the kindness-closet endpoints
#[derive(Debug, Clone)]
pub struct ClosetService {
    api: ApiClient,
}

impl ClosetService {
    const RESOURCE: &'static str = "Post";

    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch one page of the closet feed, newest first
    pub async fn get_posts(&self, query: &ClosetQuery) -> Result<ListEnvelope<ClosetPost>, ApiError> {
        let mut params = Vec::new();
        if let Some(page) = query.page {
            params.push(format!("page={page}"));
        }
        if let Some(limit) = query.limit {
            params.push(format!("limit={limit}"));
        }
        if let Some(region) = &query.region {
            params.push(format!("region={region}"));
        }
        if let Some(category_id) = &query.category_id {
            params.push(format!("categoryId={category_id}"));
        }
        let path = if params.is_empty() {
            "/kindness-closet/posts".to_string()
        } else {
            format!("/kindness-closet/posts?{}", params.join("&"))
        };
        debug!(%path, "fetching closet posts");
        self.api.get_json(&path, Self::RESOURCE).await
    }

    /// Publish a new post offering items to other families
    pub async fn create_post(
        &self,
        request: &CreateClosetPostRequest,
    ) -> Result<ClosetPost, ApiError> {
        validate_create_request(request)?;
        info!(title = %request.title, "publishing closet post");
        let envelope: MutationEnvelope<ClosetPost> = self
            .api
            .post_json("/kindness-closet/posts", request, Self::RESOURCE)
            .await?;
        Ok(envelope.data)
    }

    /// Take down one of the current user's posts
    pub async fn delete_post(&self, post_id: &str) -> Result<(), ApiError> {
        if post_id.trim().is_empty() {
            return Err(ApiError::validation("Post id is required"));
        }
        let _: MutationEnvelope<Value> = self
            .api
            .delete_json(&format!("/kindness-closet/posts/{post_id}"), Self::RESOURCE)
            .await?;
        Ok(())
    }
}

fn validate_create_request(request: &CreateClosetPostRequest) -> Result<(), ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::validation("Title is required"));
    }
    if request.title.chars().count() > MAX_TITLE_LEN {
        return Err(ApiError::validation("Title is too long"));
    }
    if request.description.trim().is_empty() {
        return Err(ApiError::validation("Description is required"));
    }
    Ok(())
}
