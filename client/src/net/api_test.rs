use super::*;

#[test]
fn endpoints_match_remote_api_paths() {
    assert_eq!(POSTS_ENDPOINT, "/api/posts");
    assert_eq!(POST_COUNT_ENDPOINT, "/api/posts/count");
    assert_eq!(CREATE_POST_ENDPOINT, "/api/post");
    assert_eq!(LOGIN_ENDPOINT, "/api/login");
    assert_eq!(post_endpoint("a"), "/api/posts/a");
}

#[test]
fn post_endpoint_keeps_reserved_characters_inside_the_segment() {
    assert_eq!(post_endpoint("hello-world"), "/api/posts/hello-world");
    assert_eq!(post_endpoint("a/b"), "/api/posts/a%2Fb");
    assert_eq!(post_endpoint("what?x"), "/api/posts/what%3Fx");
    assert_eq!(post_endpoint("a b"), "/api/posts/a%20b");
}

#[test]
fn api_config_trims_trailing_slash() {
    let config = ApiConfig::new("https://blog.example.test/", 500);
    assert_eq!(config.base_url, "https://blog.example.test");
    assert_eq!(config.url("/api/posts"), "https://blog.example.test/api/posts");
}

#[test]
fn api_config_default_is_same_origin() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, "");
    assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    assert_eq!(config.url(LOGIN_ENDPOINT), "/api/login");
}

#[test]
fn api_error_messages_include_detail() {
    assert_eq!(ApiError::Status(404).to_string(), "unexpected status: 404");
    assert_eq!(ApiError::Timeout(250).to_string(), "request timed out after 250 ms");
}

#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpBlogApi::new(ApiConfig::default());
    let result = futures::executor::block_on(api.fetch_posts());
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(api.fetch_count());
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn blog_client_dispatches_to_wrapped_api() {
    let client = BlogClient::new(HttpBlogApi::new(ApiConfig::new("http://x", 1)));
    let result = futures::executor::block_on(client.fetch_post("a"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
