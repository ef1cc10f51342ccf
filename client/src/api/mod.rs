//! HTTP plumbing shared by every entity service.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

mod error;

pub use error::{ApiError, GENERIC_ERROR};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Connection settings for the backend API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Bearer token attached to every request when present
    pub auth_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
        }
    }
}

impl ClientConfig {
    /// Read settings from `NESTLING_API_URL` / `NESTLING_API_TOKEN`,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("NESTLING_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            auth_token: std::env::var("NESTLING_API_TOKEN").ok(),
        }
    }
}

/// Thin wrapper over [`reqwest::Client`] that owns the base URL, attaches
/// auth, and funnels every response through the error normalization in
/// [`ApiError`]. Cheap to clone; all services share one instance.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client with the default base URL
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client pointing at a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig {
            base_url: base_url.into(),
            auth_token: None,
        })
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.config.auth_token = token;
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
    ) -> Result<T, ApiError> {
        let builder = self.http.get(self.url(path));
        self.execute(builder, path, resource).await
    }

    pub(crate) async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        resource: &str,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.http.post(self.url(path)).json(body);
        self.execute(builder, path, resource).await
    }

    pub(crate) async fn patch_json<B, T>(
        &self,
        path: &str,
        body: &B,
        resource: &str,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.http.patch(self.url(path)).json(body);
        self.execute(builder, path, resource).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
    ) -> Result<T, ApiError> {
        let builder = self.http.delete(self.url(path));
        self.execute(builder, path, resource).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        path: &str,
        resource: &str,
    ) -> Result<T, ApiError> {
        let builder = match &self.config.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();
        debug!(path, status = status.as_u16(), "api response");

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(ApiError::from_failure(status.as_u16(), &body, resource));
        }
        response.json::<T>().await.map_err(ApiError::from_decode)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
