//! Blog section: layout, post list and post detail.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PostsLayout` is the parent route for `/posts`; the index child lists posts
//! and the `:slug` child shows one. Each child fetches on mount through a
//! `LocalResource`, so a fetch still in flight when the view unmounts is
//! dropped with it.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_params_map;

use crate::components::post_link::PostLink;
use crate::net::api::{ApiError, BlogApi, BlogClient};
use crate::net::types::{Post, PostDetail};

pub const LIST_FETCH_ERROR: &str = "An error occurred while fetching the data.";
pub const DETAIL_FETCH_ERROR: &str = "An error occurred while fetching the post.";

/// What the list view renders for one post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostEntry {
    pub href: String,
    pub title: String,
}

pub fn list_entries(posts: Vec<Post>) -> Vec<PostEntry> {
    posts
        .into_iter()
        .map(|post| PostEntry { href: post.href(), title: post.title })
        .collect()
}

/// Fetch the list, logging failures.
pub async fn load_posts(api: &dyn BlogApi) -> Result<Vec<PostEntry>, ApiError> {
    match api.fetch_posts().await {
        Ok(posts) => Ok(list_entries(posts)),
        Err(e) => {
            log::error!("error fetching posts: {e}");
            Err(e)
        }
    }
}

/// Fetch one post, logging failures. Non-2xx answers arrive here as
/// `ApiError::Status` and are never rendered as a post.
pub async fn load_post(api: &dyn BlogApi, slug: &str) -> Result<PostDetail, ApiError> {
    api.fetch_post(slug).await.inspect_err(|e| {
        log::error!("error fetching post {slug}: {e}");
    })
}

#[component]
pub fn PostsLayout() -> impl IntoView {
    view! {
        <div class="page posts-layout">
            <h2>"Blog"</h2>
            <Outlet/>
        </div>
    }
}

/// Index child of `/posts`.
#[component]
pub fn PostListPage() -> impl IntoView {
    let api = expect_context::<BlogClient>();
    let posts = LocalResource::new(move || {
        let api = api.clone();
        async move { load_posts(&*api).await }
    });

    view! {
        <Suspense fallback=move || view! { <p class="loading">"Loading posts..."</p> }>
            {move || {
                posts
                    .get()
                    .map(|result| match result {
                        Ok(entries) => {
                            view! {
                                <ul class="post-list">
                                    {entries
                                        .into_iter()
                                        .map(|entry| view! { <PostLink href=entry.href title=entry.title/> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                        Err(_) => view! { <p class="error">{LIST_FETCH_ERROR}</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}

/// `:slug` child of `/posts`. Refetches when the slug changes.
#[component]
pub fn PostPage() -> impl IntoView {
    let api = expect_context::<BlogClient>();
    let params = use_params_map();
    let post = LocalResource::new(move || {
        let api = api.clone();
        let slug = params.with(|p| p.get("slug")).unwrap_or_default();
        async move { load_post(&*api, &slug).await }
    });

    view! {
        <div class="page post-detail">
            <Suspense fallback=move || view! { <p class="loading">"Loading post..."</p> }>
                {move || {
                    post.get()
                        .map(|result| match result {
                            Ok(detail) => {
                                view! {
                                    <h3>{detail.title}</h3>
                                    <p>{detail.description}</p>
                                }
                                    .into_any()
                            }
                            Err(_) => view! { <p class="error">{DETAIL_FETCH_ERROR}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
