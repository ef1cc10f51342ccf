use shared::{Baby, CreateBabyRequest};

use crate::services::BabyService;

/// In-memory view of the family's baby profiles
#[derive(Debug, Default)]
pub struct BabyState {
    pub babies: Vec<Baby>,
    pub selected_baby_id: Option<String>,
    pub is_loading: bool,
    pub is_submitting: bool,
    pub error: Option<String>,
}

impl BabyState {
    pub async fn fetch_babies(&mut self, service: &BabyService) {
        self.fetch_pending();
        match service.get_babies().await {
            Ok(babies) => self.fetch_fulfilled(babies),
            Err(err) => self.fetch_rejected(err.to_string()),
        }
    }

    pub async fn create_baby(&mut self, service: &BabyService, request: &CreateBabyRequest) {
        self.create_pending();
        match service.create_baby(request).await {
            Ok(baby) => self.create_fulfilled(baby),
            Err(err) => self.create_rejected(err.to_string()),
        }
    }

    pub fn fetch_pending(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn fetch_fulfilled(&mut self, babies: Vec<Baby>) {
        self.is_loading = false;
        self.error = None;
        // Keep the selection when the baby still exists, otherwise drop it
        let selection_gone = self
            .selected_baby_id
            .as_ref()
            .is_some_and(|selected| !babies.iter().any(|b| &b.id == selected));
        if selection_gone {
            self.selected_baby_id = None;
        }
        self.babies = babies;
    }

    pub fn fetch_rejected(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn create_pending(&mut self) {
        self.is_submitting = true;
        self.error = None;
    }

    /// A newly registered baby goes to the front of the list
    pub fn create_fulfilled(&mut self, baby: Baby) {
        self.is_submitting = false;
        self.error = None;
        self.babies.insert(0, baby);
    }

    pub fn create_rejected(&mut self, message: String) {
        self.is_submitting = false;
        self.error = Some(message);
    }

    pub fn set_selected_baby(&mut self, baby_id: Option<String>) {
        self.selected_baby_id = baby_id;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn baby(id: &str) -> Baby {
        Baby {
            id: id.to_string(),
            name: format!("baby-{id}"),
            birthdate: "2024-05-01".to_string(),
            gender: None,
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn fetch_keeps_selection_only_if_still_present() {
        let mut state = BabyState::default();
        state.set_selected_baby(Some("b1".to_string()));

        state.fetch_fulfilled(vec![baby("b1"), baby("b2")]);
        assert_eq!(state.selected_baby_id.as_deref(), Some("b1"));

        state.fetch_fulfilled(vec![baby("b2")]);
        assert!(state.selected_baby_id.is_none());
    }

    #[test]
    fn create_inserts_at_the_front() {
        let mut state = BabyState::default();
        state.fetch_fulfilled(vec![baby("b1")]);

        state.create_pending();
        assert!(state.is_submitting);
        state.create_fulfilled(baby("b9"));
        assert_eq!(state.babies[0].id, "b9");
        assert_eq!(state.babies.len(), 2);
        assert!(!state.is_submitting);
    }
}
