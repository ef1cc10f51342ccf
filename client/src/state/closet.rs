use shared::{ClosetPost, ClosetQuery, CreateClosetPostRequest, ListEnvelope};

use crate::services::ClosetService;

/// In-memory view of the kindness-closet feed
#[derive(Debug, Default)]
pub struct ClosetState {
    pub posts: Vec<ClosetPost>,
    pub total: u64,
    pub page: u32,
    pub has_next_page: bool,
    pub is_loading: bool,
    /// A create or delete is in flight
    pub is_submitting: bool,
    pub error: Option<String>,
}

impl ClosetState {
    pub async fn fetch_posts(&mut self, service: &ClosetService, query: &ClosetQuery) {
        self.fetch_pending();
        match service.get_posts(query).await {
            Ok(envelope) => self.fetch_fulfilled(envelope),
            Err(err) => self.fetch_rejected(err.to_string()),
        }
    }

    pub async fn create_post(&mut self, service: &ClosetService, request: &CreateClosetPostRequest) {
        self.submit_pending();
        match service.create_post(request).await {
            Ok(post) => self.create_fulfilled(post),
            Err(err) => self.submit_rejected(err.to_string()),
        }
    }

    pub async fn delete_post(&mut self, service: &ClosetService, post_id: &str) {
        self.submit_pending();
        match service.delete_post(post_id).await {
            Ok(()) => self.delete_fulfilled(post_id),
            Err(err) => self.submit_rejected(err.to_string()),
        }
    }

    pub fn fetch_pending(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn fetch_fulfilled(&mut self, envelope: ListEnvelope<ClosetPost>) {
        self.is_loading = false;
        self.error = None;
        self.posts = envelope.data;
        self.total = envelope.total;
        self.page = envelope.page;
        self.has_next_page = envelope.has_next_page;
    }

    pub fn fetch_rejected(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn submit_pending(&mut self) {
        self.is_submitting = true;
        self.error = None;
    }

    /// A freshly published post goes to the front of the feed
    pub fn create_fulfilled(&mut self, post: ClosetPost) {
        self.is_submitting = false;
        self.error = None;
        self.posts.insert(0, post);
    }

    pub fn delete_fulfilled(&mut self, post_id: &str) {
        self.is_submitting = false;
        self.error = None;
        self.posts.retain(|p| p.id != post_id);
    }

    pub fn submit_rejected(&mut self, message: String) {
        self.is_submitting = false;
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
