use shared::{FamilyMember, InviteMemberRequest, ListEnvelope, MutationEnvelope};
use tracing::info;

use crate::api::{ApiClient, ApiError};

/// Client for the family-member endpoints
#[derive(Debug, Clone)]
pub struct FamilyService {
    api: ApiClient,
}

impl FamilyService {
    const RESOURCE: &'static str = "Family member";

    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch everyone in the family account
    pub async fn get_members(&self) -> Result<Vec<FamilyMember>, ApiError> {
        let envelope: ListEnvelope<FamilyMember> =
            self.api.get_json("/family/members", Self::RESOURCE).await?;
        Ok(envelope.data)
    }

    /// Invite another caregiver by email. The backend sends the invitation
    /// mail and returns the pending member record.
    pub async fn invite_member(
        &self,
        request: &InviteMemberRequest,
    ) -> Result<FamilyMember, ApiError> {
        validate_invite_request(request)?;
        info!(email = %request.email, "inviting family member");
        let envelope: MutationEnvelope<FamilyMember> = self
            .api
            .post_json("/family/invitations", request, Self::RESOURCE)
            .await?;
        Ok(envelope.data)
    }
}

fn validate_invite_request(request: &InviteMemberRequest) -> Result<(), ApiError> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    // Rough shape check only; the backend does real address validation
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(ApiError::validation("Email address is invalid"));
    }
    Ok(())
}
