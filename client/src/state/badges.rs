use shared::{AwardBadgeRequest, BabyBadgeRecord};
use tracing::warn;

use crate::services::BadgeService;

/// In-memory view of one baby's earned badges.
///
/// Mutated only through the transition methods below; every async operation
/// runs the pending / fulfilled / rejected lifecycle. Concurrent calls of the
/// same operation are neither deduplicated nor cancelled; whichever resolution
/// lands last overwrites the flag, error, and data.
#[derive(Debug, Default)]
pub struct BadgeState {
    /// Awarded badges, most recent first
    pub baby_badges: Vec<BabyBadgeRecord>,
    /// Baby the current list belongs to
    pub selected_baby_id: Option<String>,
    /// A fetch is in flight
    pub is_loading: bool,
    /// An award is in flight
    pub is_submitting: bool,
    /// Message of the most recent failed operation
    pub error: Option<String>,
}

impl BadgeState {
    /// Award a badge and, on success, insert the new record at the front
    pub async fn award_badge(&mut self, service: &BadgeService, request: &AwardBadgeRequest) {
        self.award_pending();
        match service.award_badge(request).await {
            Ok(record) => self.award_fulfilled(record),
            Err(err) => self.award_rejected(err.to_string()),
        }
    }

    /// Replace the list with the badges of `baby_id`
    pub async fn fetch_badges(&mut self, service: &BadgeService, baby_id: &str) {
        self.fetch_pending();
        match service.get_baby_badges(baby_id).await {
            Ok(records) => self.fetch_fulfilled(baby_id.to_string(), records),
            Err(err) => {
                warn!(baby_id, %err, "badge fetch failed");
                self.fetch_rejected(err.to_string());
            }
        }
    }

    pub fn award_pending(&mut self) {
        self.is_submitting = true;
        self.error = None;
    }

    pub fn award_fulfilled(&mut self, record: BabyBadgeRecord) {
        self.is_submitting = false;
        self.error = None;
        self.baby_badges.insert(0, record);
    }

    pub fn award_rejected(&mut self, message: String) {
        self.is_submitting = false;
        self.error = Some(message);
    }

    pub fn fetch_pending(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn fetch_fulfilled(&mut self, baby_id: String, records: Vec<BabyBadgeRecord>) {
        self.is_loading = false;
        self.error = None;
        self.baby_badges = records;
        self.selected_baby_id = Some(baby_id);
    }

    pub fn fetch_rejected(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Drop the loaded badges and the selected-baby reference
    pub fn clear_collection(&mut self) {
        self.baby_badges.clear();
        self.selected_baby_id = None;
    }

    pub fn set_selected_baby(&mut self, baby_id: Option<String>) {
        self.selected_baby_id = baby_id;
    }
}
