use futures::executor::block_on;

use super::*;
use crate::net::mock::MockApi;

fn post(slug: &str, title: &str) -> Post {
    Post { slug: slug.to_owned(), title: title.to_owned(), description: "d".to_owned() }
}

#[test]
fn single_post_renders_one_link_with_title() {
    let api = MockApi { posts: Ok(vec![post("a", "A")]), ..MockApi::default() };
    let entries = block_on(load_posts(&api)).unwrap();
    assert_eq!(entries, vec![PostEntry { href: "/posts/a".to_owned(), title: "A".to_owned() }]);
    assert_eq!(api.calls(), vec!["fetch_posts"]);
}

#[test]
fn list_entries_keep_api_order() {
    let entries = list_entries(vec![post("b", "B"), post("a", "A")]);
    let hrefs: Vec<_> = entries.iter().map(|e| e.href.as_str()).collect();
    assert_eq!(hrefs, vec!["/posts/b", "/posts/a"]);
}

#[test]
fn list_failure_is_returned_not_retried() {
    let api = MockApi { posts: Err(ApiError::Status(500)), ..MockApi::default() };
    assert_eq!(block_on(load_posts(&api)), Err(ApiError::Status(500)));
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn detail_fetch_uses_route_slug() {
    let detail = PostDetail { title: "T".to_owned(), description: "D".to_owned() };
    let api = MockApi { post: Ok(detail.clone()), ..MockApi::default() };
    assert_eq!(block_on(load_post(&api, "hello")), Ok(detail));
    assert_eq!(api.calls(), vec!["fetch_post:hello"]);
}

#[test]
fn detail_non_success_status_is_an_error() {
    let api = MockApi { post: Err(ApiError::Status(404)), ..MockApi::default() };
    assert_eq!(block_on(load_post(&api, "missing")), Err(ApiError::Status(404)));
}
