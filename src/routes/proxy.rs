//! `/api/*` forwarding to the remote blog API.
//!
//! The browser bundle calls same-origin `/api/...` by default; this handler
//! relays each request to `BLOG_API_UPSTREAM` once, with no caching and no
//! retry, and streams back the upstream status, headers and body.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Connection-scoped headers plus `Content-Length`, which each side sets for its own body.
const NOT_FORWARDED: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("no upstream API configured")]
    NotConfigured,

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Upstream URL for an incoming `/api/...` request.
///
/// Built from the raw request path so percent-escapes such as `%2F` stay
/// inside their segment.
pub(crate) fn upstream_url(base: &str, uri: &Uri) -> String {
    let mut url = format!("{base}{}", uri.path());
    if let Some(query) = uri.query().filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Copy of `headers` minus [`NOT_FORWARDED`].
pub(crate) fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !NOT_FORWARDED.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// `ANY /api/{*path}`: relay to the upstream API.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let base = state.upstream.as_deref().ok_or(ProxyError::NotConfigured)?;
    let url = upstream_url(base, &uri);
    tracing::debug!(%method, %url, "forwarding api request");

    let mut request = state.http.request(method.clone(), &url).headers(forwardable_headers(&headers));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(error = %e, %method, %url, "upstream request failed");
        ProxyError::from(e)
    })?;
    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    if status.is_server_error() {
        tracing::warn!(%status, %method, %url, "upstream error status");
    }
    Ok((status, response_headers, bytes).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
