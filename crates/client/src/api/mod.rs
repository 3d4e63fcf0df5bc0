//! REST API client for the RoboTech backend.
//!
//! One client instance is shared by every store and controller; it is
//! cheap to clone (`Arc` inner). The bearer token is injected by the
//! session store and attached to every request. Category and featured
//! product responses are cached for five minutes.
//!
//! Error policy follows the backend contract: every response is a
//! `{ success, data?, message? }` envelope; `success=false` and non-2xx
//! statuses become [`ApiError::Api`] carrying the backend's message, and
//! a 401 always becomes [`ApiError::Unauthorized`] so the session layer
//! can fail closed. There is no automatic retry.

mod auth;
mod cache;
mod categories;
mod messages;
mod products;
mod reviews;
mod types;

pub use auth::{AuthPayload, Credentials, NewUser, PasswordChange, ProfileUpdate};
pub use categories::CategoryPayload;
pub use types::{Page, Pagination};

use std::sync::{Arc, RwLock};
use std::time::Duration;

use moka::future::Cache;
use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::ClientConfig;

use cache::CacheValue;
use types::Envelope;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection refused, DNS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request (non-2xx or `success=false`).
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Backend returned 401; the caller's session is no longer valid.
    #[error("authentication required")]
    Unauthorized,

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Local file attached to a request could not be read.
    #[error("attachment error: {0}")]
    Attachment(#[from] std::io::Error),
}

/// Client for the RoboTech REST backend.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: Url,
    token: RwLock<Option<SecretString>>,
    cache: Cache<String, CacheValue>,
}

impl ApiClient {
    /// Read-mostly cache TTL.
    const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Create a new API client from configuration.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self::from_base_url(config.api_base_url.clone())
    }

    /// Create a new API client against an explicit base URL.
    #[must_use]
    pub fn from_base_url(base_url: Url) -> Self {
        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(Self::CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url,
                token: RwLock::new(None),
                cache,
            }),
        }
    }

    /// Attach a bearer token to all subsequent requests.
    pub fn set_token(&self, token: SecretString) {
        let mut guard = self
            .inner
            .token
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Some(token);
    }

    /// Stop attaching a bearer token.
    pub fn clear_token(&self) {
        let mut guard = self
            .inner
            .token
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = None;
    }

    /// Whether a bearer token is currently attached.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.inner
            .token
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .is_some()
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    /// Build the URL for an endpoint from path segments.
    ///
    /// Segments are pushed (and therefore percent-encoded) individually,
    /// so opaque IDs can never change the path shape.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.inner.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ApiError::Parse("base URL cannot be a base".to_string()))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Start a request with the bearer token (if any) attached.
    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments)?;
        let mut builder = self.inner.http.request(method, url);

        let token = self
            .inner
            .token
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(token) = token.as_ref() {
            builder = builder.bearer_auth(token.expose_secret());
        }

        Ok(builder)
    }

    /// Send a request and unwrap the response envelope.
    async fn send_envelope<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await?;

        if !status.is_success() {
            // Best-effort extraction of the backend's message.
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });

            if status == StatusCode::NOT_FOUND {
                return Err(ApiError::NotFound(message));
            }
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;

        if !envelope.success {
            let message = envelope
                .message()
                .unwrap_or_else(|| "request rejected".to_string());
            tracing::debug!(status = status.as_u16(), %message, "backend rejected request");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(envelope)
    }

    /// Send a request expecting `data` in the envelope.
    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let envelope = self.send_envelope::<T>(builder).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Parse("response envelope missing data".to_string()))
    }

    /// Send a request expecting a list plus optional pagination.
    async fn fetch_list<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<(Vec<T>, Option<Pagination>), ApiError> {
        let envelope = self.send_envelope::<Vec<T>>(builder).await?;
        let pagination = envelope.pagination;
        let items = envelope
            .data
            .ok_or_else(|| ApiError::Parse("response envelope missing data".to_string()))?;
        Ok((items, pagination))
    }

    /// Send a request where the envelope's `data` is irrelevant.
    async fn execute(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send_envelope::<serde_json::Value>(builder).await?;
        Ok(())
    }

    // =========================================================================
    // Cache access (used by the resource modules)
    // =========================================================================

    async fn cache_get(&self, key: &str) -> Option<CacheValue> {
        self.inner.cache.get(key).await
    }

    async fn cache_put(&self, key: &str, value: CacheValue) {
        self.inner.cache.insert(key.to_string(), value).await;
    }

    /// Drop cached catalog reads after an admin mutation.
    async fn invalidate_catalog_caches(&self) {
        self.inner.cache.invalidate(cache::keys::CATEGORIES).await;
        self.inner.cache.invalidate(cache::keys::FEATURED).await;
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::from_base_url("http://localhost:5000/api".parse().unwrap())
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let url = client().endpoint(&["products", "p1"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/products/p1");
    }

    #[test]
    fn test_endpoint_encodes_opaque_ids() {
        let url = client().endpoint(&["products", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/products/a%2Fb%20c");
    }

    #[test]
    fn test_endpoint_handles_trailing_slash_base() {
        let client = ApiClient::from_base_url("http://localhost:5000/api/".parse().unwrap());
        let url = client.endpoint(&["categories"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/categories");
    }

    #[test]
    fn test_token_lifecycle() {
        let client = client();
        assert!(!client.has_token());

        client.set_token(SecretString::from("tok-1"));
        assert!(client.has_token());

        client.clear_token();
        assert!(!client.has_token());
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = client();
        client.set_token(SecretString::from("super-secret-token"));
        let output = format!("{client:?}");
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("super-secret-token"));
    }
}
