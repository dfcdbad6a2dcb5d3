//! Client route paths.
//!
//! Views and navigation links refer to these constants instead of repeating
//! string literals, so the route table and the links cannot drift apart.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const POSTS: &str = "/posts";
pub const ABOUT: &str = "/about";
pub const LOGIN: &str = "/login";
pub const STATS: &str = "/stats";
pub const NEW_POST: &str = "/newpost";

/// Detail route for a single post.
pub fn post_path(slug: &str) -> String {
    format!("{POSTS}/{slug}")
}
