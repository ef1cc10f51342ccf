use shared::{Category, ListEnvelope, Tag};

use crate::api::{ApiClient, ApiError};

/// Client for the category and tag endpoints
#[derive(Debug, Clone)]
pub struct TaxonomyService {
    api: ApiClient,
}

impl TaxonomyService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        let envelope: ListEnvelope<Category> = self.api.get_json("/categories", "Category").await?;
        Ok(envelope.data)
    }

    pub async fn get_tags(&self) -> Result<Vec<Tag>, ApiError> {
        let envelope: ListEnvelope<Tag> = self.api.get_json("/tags", "Tag").await?;
        Ok(envelope.data)
    }
}
