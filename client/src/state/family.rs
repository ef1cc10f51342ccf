use shared::{FamilyMember, InviteMemberRequest};

use crate::services::FamilyService;

/// In-memory view of the family account's members
#[derive(Debug, Default)]
pub struct FamilyState {
    pub members: Vec<FamilyMember>,
    pub is_loading: bool,
    /// An invitation is in flight
    pub is_inviting: bool,
    pub error: Option<String>,
}

impl FamilyState {
    pub async fn fetch_members(&mut self, service: &FamilyService) {
        self.fetch_pending();
        match service.get_members().await {
            Ok(members) => self.fetch_fulfilled(members),
            Err(err) => self.fetch_rejected(err.to_string()),
        }
    }

    pub async fn invite_member(&mut self, service: &FamilyService, request: &InviteMemberRequest) {
        self.invite_pending();
        match service.invite_member(request).await {
            Ok(member) => self.invite_fulfilled(member),
            Err(err) => self.invite_rejected(err.to_string()),
        }
    }

    pub fn fetch_pending(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn fetch_fulfilled(&mut self, members: Vec<FamilyMember>) {
        self.is_loading = false;
        self.error = None;
        self.members = members;
    }

    pub fn fetch_rejected(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn invite_pending(&mut self) {
        self.is_inviting = true;
        self.error = None;
    }

    /// The pending member shows up in the list right away
    pub fn invite_fulfilled(&mut self, member: FamilyMember) {
        self.is_inviting = false;
        self.error = None;
        self.members.push(member);
    }

    pub fn invite_rejected(&mut self, message: String) {
        self.is_inviting = false;
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
