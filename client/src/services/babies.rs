use chrono::NaiveDate;
use shared::{Baby, CreateBabyRequest, ListEnvelope, MutationEnvelope};
use tracing::info;

use crate::api::{ApiClient, ApiError};

/// Client for the baby-profile endpoints
#[derive(Debug, Clone)]
pub struct BabyService {
    api: ApiClient,
}

impl BabyService {
    const RESOURCE: &'static str = "Baby";

    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch all babies registered in the family account
    pub async fn get_babies(&self) -> Result<Vec<Baby>, ApiError> {
        let envelope: ListEnvelope<Baby> = self.api.get_json("/babies", Self::RESOURCE).await?;
        Ok(envelope.data)
    }

    /// Register a new baby profile
    pub async fn create_baby(&self, request: &CreateBabyRequest) -> Result<Baby, ApiError> {
        validate_create_request(request)?;
        info!(name = %request.name, "creating baby profile");
        let envelope: MutationEnvelope<Baby> = self
            .api
            .post_json("/babies", request, Self::RESOURCE)
            .await?;
        Ok(envelope.data)
    }
}

fn validate_create_request(request: &CreateBabyRequest) -> Result<(), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("Name is required"));
    }
    if NaiveDate::parse_from_str(&request.birthdate, "%Y-%m-%d").is_err() {
        return Err(ApiError::validation("Birthdate must be YYYY-MM-DD"));
    }
    Ok(())
}
