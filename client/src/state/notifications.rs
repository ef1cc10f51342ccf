use shared::{ListEnvelope, Notification, NotificationQuery};

use crate::services::NotificationService;

/// In-memory view of the user's notification feed
#[derive(Debug, Default)]
pub struct NotificationState {
    pub notifications: Vec<Notification>,
    pub total: u64,
    pub page: u32,
    pub has_next_page: bool,
    pub is_loading: bool,
    /// A mark-as-read call is in flight
    pub is_updating: bool,
    pub error: Option<String>,
}

impl NotificationState {
    /// Fetch one page; the fetched set replaces whatever was loaded before
    pub async fn fetch_notifications(
        &mut self,
        service: &NotificationService,
        query: &NotificationQuery,
    ) {
        self.fetch_pending();
        match service.get_notifications(query).await {
            Ok(envelope) => self.fetch_fulfilled(envelope),
            Err(err) => self.fetch_rejected(err.to_string()),
        }
    }

    pub async fn mark_as_read(&mut self, service: &NotificationService, notification_id: &str) {
        self.update_pending();
        match service.mark_as_read(notification_id).await {
            Ok(updated) => self.mark_read_fulfilled(updated),
            Err(err) => self.update_rejected(err.to_string()),
        }
    }

    pub async fn mark_all_as_read(&mut self, service: &NotificationService) {
        self.update_pending();
        match service.mark_all_as_read().await {
            Ok(()) => self.mark_all_read_fulfilled(),
            Err(err) => self.update_rejected(err.to_string()),
        }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    pub fn fetch_pending(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn fetch_fulfilled(&mut self, envelope: ListEnvelope<Notification>) {
        self.is_loading = false;
        self.error = None;
        self.notifications = envelope.data;
        self.total = envelope.total;
        self.page = envelope.page;
        self.has_next_page = envelope.has_next_page;
    }

    pub fn fetch_rejected(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn update_pending(&mut self) {
        self.is_updating = true;
        self.error = None;
    }

    /// Swap in the updated record; unknown ids are ignored
    pub fn mark_read_fulfilled(&mut self, updated: Notification) {
        self.is_updating = false;
        self.error = None;
        if let Some(existing) = self.notifications.iter_mut().find(|n| n.id == updated.id) {
            *existing = updated;
        }
    }

    pub fn mark_all_read_fulfilled(&mut self) {
        self.is_updating = false;
        self.error = None;
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
    }

    pub fn update_rejected(&mut self, message: String) {
        self.is_updating = false;
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
        self.total = 0;
        self.page = 0;
        self.has_next_page = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn notification(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: format!("title-{id}"),
            body: "body".to_string(),
            category: "badge".to_string(),
            is_read,
            link: None,
            created_at: Utc::now(),
        }
    }

    fn page_of(data: Vec<Notification>) -> ListEnvelope<Notification> {
        let total = data.len() as u64;
        ListEnvelope {
            data,
            total,
            page: 1,
            limit: 20,
            has_next_page: false,
        }
    }

    #[test]
    fn mark_as_read_updates_only_the_matching_record() {
        let mut state = NotificationState::default();
        state.fetch_fulfilled(page_of(vec![
            notification("n1", false),
            notification("n2", false),
        ]));
        assert_eq!(state.unread_count(), 2);

        state.update_pending();
        assert!(state.is_updating);
        state.mark_read_fulfilled(notification("n2", true));
        assert!(!state.is_updating);
        assert!(!state.notifications[0].is_read);
        assert!(state.notifications[1].is_read);
        assert_eq!(state.unread_count(), 1);
    }

    #[test]
    fn mark_read_with_unknown_id_changes_nothing() {
        let mut state = NotificationState::default();
        state.fetch_fulfilled(page_of(vec![notification("n1", false)]));
        state.mark_read_fulfilled(notification("ghost", true));
        assert_eq!(state.notifications.len(), 1);
        assert!(!state.notifications[0].is_read);
    }

    #[test]
    fn mark_all_flips_every_record() {
        let mut state = NotificationState::default();
        state.fetch_fulfilled(page_of(vec![
            notification("n1", false),
            notification("n2", true),
            notification("n3", false),
        ]));
        state.mark_all_read_fulfilled();
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn fetch_replaces_the_previous_page() {
        let mut state = NotificationState::default();
        state.fetch_fulfilled(page_of(vec![notification("n1", false)]));

        let mut second = page_of(vec![notification("n9", true)]);
        second.page = 2;
        second.total = 41;
        second.has_next_page = true;
        state.fetch_fulfilled(second);

        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].id, "n9");
        assert_eq!(state.page, 2);
        assert_eq!(state.total, 41);
        assert!(state.has_next_page);
    }
}
