//! Scripted [`BlogApi`] for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::api::{ApiError, BlogApi};
use super::types::{Credentials, NewPost, Post, PostDetail};

/// Returns canned results and records every call it receives.
pub(crate) struct MockApi {
    pub posts: Result<Vec<Post>, ApiError>,
    pub post: Result<PostDetail, ApiError>,
    pub count: Result<u64, ApiError>,
    pub create: Result<(), ApiError>,
    pub login: Result<(), ApiError>,
    pub call_log: Mutex<Vec<String>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            posts: Ok(Vec::new()),
            post: Err(ApiError::Status(404)),
            count: Ok(0),
            create: Ok(()),
            login: Ok(()),
            call_log: Mutex::new(Vec::new()),
        }
    }
}

impl MockApi {
    pub fn calls(&self) -> Vec<String> {
        self.call_log.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.call_log.lock().unwrap().push(call);
    }
}

#[async_trait(?Send)]
impl BlogApi for MockApi {
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.record("fetch_posts".to_owned());
        self.posts.clone()
    }

    async fn fetch_post(&self, slug: &str) -> Result<PostDetail, ApiError> {
        self.record(format!("fetch_post:{slug}"));
        self.post.clone()
    }

    async fn fetch_count(&self) -> Result<u64, ApiError> {
        self.record("fetch_count".to_owned());
        self.count.clone()
    }

    async fn create_post(&self, post: &NewPost) -> Result<(), ApiError> {
        self.record(format!("create_post:{}", post.slug));
        self.create.clone()
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.record(format!("login:{}", credentials.username));
        self.login.clone()
    }
}
