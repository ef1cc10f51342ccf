use shared::{Category, Tag};

use crate::services::TaxonomyService;

/// In-memory view of categories and tags.
/// The two lists load independently and track independent flags.
#[derive(Debug, Default)]
pub struct TaxonomyState {
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub is_loading_categories: bool,
    pub is_loading_tags: bool,
    pub error: Option<String>,
}

impl TaxonomyState {
    pub async fn fetch_categories(&mut self, service: &TaxonomyService) {
        self.categories_pending();
        match service.get_categories().await {
            Ok(categories) => self.categories_fulfilled(categories),
            Err(err) => self.categories_rejected(err.to_string()),
        }
    }

    pub async fn fetch_tags(&mut self, service: &TaxonomyService) {
        self.tags_pending();
        match service.get_tags().await {
            Ok(tags) => self.tags_fulfilled(tags),
            Err(err) => self.tags_rejected(err.to_string()),
        }
    }

    pub fn categories_pending(&mut self) {
        self.is_loading_categories = true;
        self.error = None;
    }

    pub fn categories_fulfilled(&mut self, categories: Vec<Category>) {
        self.is_loading_categories = false;
        self.error = None;
        self.categories = categories;
    }

    pub fn categories_rejected(&mut self, message: String) {
        self.is_loading_categories = false;
        self.error = Some(message);
    }

    pub fn tags_pending(&mut self) {
        self.is_loading_tags = true;
        self.error = None;
    }

    pub fn tags_fulfilled(&mut self, tags: Vec<Tag>) {
        self.is_loading_tags = false;
        self.error = None;
        self.tags = tags;
    }

    pub fn tags_rejected(&mut self, message: String) {
        self.is_loading_tags = false;
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_flags_are_independent() {
        let mut state = TaxonomyState::default();
        state.categories_pending();
        state.tags_pending();
        assert!(state.is_loading_categories && state.is_loading_tags);

        state.categories_fulfilled(vec![Category {
            id: "c1".to_string(),
            name: "Strollers".to_string(),
            slug: "strollers".to_string(),
            parent_id: None,
        }]);
        assert!(!state.is_loading_categories);
        assert!(state.is_loading_tags);

        state.tags_rejected("Network error".to_string());
        assert!(!state.is_loading_tags);
        assert_eq!(state.error.as_deref(), Some("Network error"));
        // the category list is untouched by the tag failure
        assert_eq!(state.categories.len(), 1);
    }
}
