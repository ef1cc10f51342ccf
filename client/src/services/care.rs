use shared::{ArticleQuery, CareArticle, ItemEnvelope, ListEnvelope};
use tracing::debug;

use crate::api::{ApiClient, ApiError};

/// Client for the pregnancy-care content endpoints
#[derive(Debug, Clone)]
pub struct CareService {
    api: ApiClient,
}

impl CareService {
    const RESOURCE: &'static str = "Article";

    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Browse care articles, optionally scoped to a pregnancy week or category
    pub async fn get_articles(
        &self,
        query: &ArticleQuery,
    ) -> Result<ListEnvelope<CareArticle>, ApiError> {
        let mut params = Vec::new();
        if let Some(week) = query.week {
            params.push(format!("week={week}"));
        }
        if let Some(category_id) = &query.category_id {
            params.push(format!("categoryId={category_id}"));
        }
        if let Some(page) = query.page {
            params.push(format!("page={page}"));
        }
        if let Some(limit) = query.limit {
            params.push(format!("limit={limit}"));
        }
        let path = if params.is_empty() {
            "/pregnancy-care/articles".to_string()
        } else {
            format!("/pregnancy-care/articles?{}", params.join("&"))
        };
        debug!(%path, "fetching care articles");
        self.api.get_json(&path, Self::RESOURCE).await
    }

    /// Fetch one article with its full body
    pub async fn get_article(&self, article_id: &str) -> Result<CareArticle, ApiError> {
        if article_id.trim().is_empty() {
            return Err(ApiError::validation("Article id is required"));
        }
        let envelope: ItemEnvelope<CareArticle> = self
            .api
            .get_json(
                &format!("/pregnancy-care/articles/{article_id}"),
                Self::RESOURCE,
            )
            .await?;
        Ok(envelope.data)
    }
}
