//! JSON wire types exchanged with the remote blog API.
//!
//! DESIGN
//! ======
//! Field names match the API payloads exactly so no serde renames are needed.
//! The client never owns these records; it only holds transient copies.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::routes;

/// A post as returned by `GET /api/posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique, URL-safe identifier; doubles as the detail route segment.
    pub slug: String,
    pub title: String,
    pub description: String,
}

impl Post {
    /// Client route of this post's detail view.
    pub fn href(&self) -> String {
        routes::post_path(&self.slug)
    }
}

/// A single post as returned by `GET /api/posts/{slug}`.
///
/// The detail endpoint omits the slug; the view already has it from the route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub title: String,
    pub description: String,
}

/// Body of `POST /api/post`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub slug: String,
    pub title: String,
    pub description: String,
}

/// Body of `POST /api/login`. Built from form input and dropped after the request.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response of `GET /api/posts/count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct PostCount {
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub count: u64,
}

/// JSON numbers from the API may arrive as `3.0`; accept any integral value.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
