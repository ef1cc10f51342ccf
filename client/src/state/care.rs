use shared::{ArticleQuery, CareArticle, ListEnvelope};

use crate::services::CareService;

/// In-memory view of pregnancy-care content
#[derive(Debug, Default)]
pub struct CareState {
    pub articles: Vec<CareArticle>,
    /// Article opened in the detail view, with full body
    pub selected_article: Option<CareArticle>,
    pub total: u64,
    pub has_next_page: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl CareState {
    pub async fn fetch_articles(&mut self, service: &CareService, query: &ArticleQuery) {
        self.fetch_pending();
        match service.get_articles(query).await {
            Ok(envelope) => self.fetch_fulfilled(envelope),
            Err(err) => self.fetch_rejected(err.to_string()),
        }
    }

    pub async fn open_article(&mut self, service: &CareService, article_id: &str) {
        self.fetch_pending();
        match service.get_article(article_id).await {
            Ok(article) => self.open_fulfilled(article),
            Err(err) => self.fetch_rejected(err.to_string()),
        }
    }

    pub fn fetch_pending(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn fetch_fulfilled(&mut self, envelope: ListEnvelope<CareArticle>) {
        self.is_loading = false;
        self.error = None;
        self.articles = envelope.data;
        self.total = envelope.total;
        self.has_next_page = envelope.has_next_page;
    }

    pub fn open_fulfilled(&mut self, article: CareArticle) {
        self.is_loading = false;
        self.error = None;
        self.selected_article = Some(article);
    }

    pub fn fetch_rejected(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn close_article(&mut self) {
        self.selected_article = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
