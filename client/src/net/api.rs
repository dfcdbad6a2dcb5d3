//! Data-access interface for the remote blog API.
//!
//! Views never issue HTTP calls directly. They pull a [`BlogClient`] from
//! context and call the [`BlogApi`] operations on it, which lets tests drive
//! the same flows with a scripted implementation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! a timeout.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! views only fetch after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every operation checks the response status before decoding. Errors are
//! returned, never panicked on; views log them and render a short message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::ops::Deref;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{Credentials, NewPost, Post, PostCount, PostDetail};

pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

const POSTS_ENDPOINT: &str = "/api/posts";
const POST_COUNT_ENDPOINT: &str = "/api/posts/count";
const CREATE_POST_ENDPOINT: &str = "/api/post";
const LOGIN_ENDPOINT: &str = "/api/login";

/// The slug arrives decoded from the route, so it is encoded back into one segment.
fn post_endpoint(slug: &str) -> String {
    format!("{POSTS_ENDPOINT}/{}", urlencoding::encode(slug))
}

/// Failure of a single API call. Terminal for that call; nothing retries.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection reset).
    #[error("request failed: {0}")]
    Network(String),

    /// The API answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// A 2xx body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// No response within the configured timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u32),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Where the API lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin prefix for every endpoint, without trailing slash. Empty means
    /// same-origin, i.e. through the host's `/api` forwarding.
    pub base_url: String,
    pub timeout_ms: u32,
}

impl ApiConfig {
    pub fn new(base_url: &str, timeout_ms: u32) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned(), timeout_ms }
    }

    /// Config baked in at compile time via the `BLOG_API_BASE` env var.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("BLOG_API_BASE").unwrap_or_default(), DEFAULT_TIMEOUT_MS)
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("", DEFAULT_TIMEOUT_MS)
    }
}

/// Operations the views need from the remote API.
///
/// Futures are `?Send` because the browser runtime is single-threaded and
/// `gloo-net` futures hold JS values.
#[async_trait(?Send)]
pub trait BlogApi: Send + Sync {
    /// `GET /api/posts`
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// `GET /api/posts/{slug}`
    async fn fetch_post(&self, slug: &str) -> Result<PostDetail, ApiError>;

    /// `GET /api/posts/count`
    async fn fetch_count(&self) -> Result<u64, ApiError>;

    /// `POST /api/post`
    async fn create_post(&self, post: &NewPost) -> Result<(), ApiError>;

    /// `POST /api/login`. Success carries no token; the caller records the username only.
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;
}

/// Cloneable handle to the active [`BlogApi`], provided via Leptos context.
#[derive(Clone)]
pub struct BlogClient(Arc<dyn BlogApi>);

impl BlogClient {
    pub fn new(api: impl BlogApi + 'static) -> Self {
        Self(Arc::new(api))
    }
}

impl Deref for BlogClient {
    type Target = dyn BlogApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// [`BlogApi`] over HTTP.
#[derive(Clone, Debug, Default)]
pub struct HttpBlogApi {
    config: ApiConfig,
}

impl HttpBlogApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.url(endpoint);
            let request = async {
                let resp = gloo_net::http::Request::get(&url)
                    .header("Accept", "application/json")
                    .send()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                if !resp.ok() {
                    return Err(ApiError::Status(resp.status()));
                }
                resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
            };
            with_timeout(self.config.timeout_ms, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = endpoint;
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.url(endpoint);
            let request = async {
                let resp = gloo_net::http::Request::post(&url)
                    .header("Accept", "application/json")
                    .json(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                if !resp.ok() {
                    return Err(ApiError::Status(resp.status()));
                }
                Ok(())
            };
            with_timeout(self.config.timeout_ms, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl BlogApi for HttpBlogApi {
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json(POSTS_ENDPOINT).await
    }

    async fn fetch_post(&self, slug: &str) -> Result<PostDetail, ApiError> {
        self.get_json(&post_endpoint(slug)).await
    }

    async fn fetch_count(&self) -> Result<u64, ApiError> {
        self.get_json::<PostCount>(POST_COUNT_ENDPOINT).await.map(|c| c.count)
    }

    async fn create_post(&self, post: &NewPost) -> Result<(), ApiError> {
        self.post_json(CREATE_POST_ENDPOINT, post).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.post_json(LOGIN_ENDPOINT, credentials).await
    }
}

/// Race `request` against a browser timer.
#[cfg(feature = "hydrate")]
async fn with_timeout<T>(
    timeout_ms: u32,
    request: impl std::future::Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    use futures::future::{Either, select};

    let request = std::pin::pin!(request);
    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(timeout_ms));
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout(timeout_ms)),
    }
}
