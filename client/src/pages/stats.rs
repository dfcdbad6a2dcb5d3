//! Login-gated stats section.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::net::api::{BlogApi, BlogClient};

pub fn count_label(count: u64) -> String {
    format!("Number of posts: {count}")
}

/// Fetch the post count. Failures are logged and shown as zero.
pub async fn load_count(api: &dyn BlogApi) -> u64 {
    match api.fetch_count().await {
        Ok(count) => count,
        Err(e) => {
            log::error!("error fetching post count: {e}");
            0
        }
    }
}

/// Parent route for `/stats`. Mounted behind `RequireSession`.
#[component]
pub fn StatsLayout() -> impl IntoView {
    view! {
        <div class="page stats-layout">
            <h2>"Stats View"</h2>
            <Outlet/>
        </div>
    }
}

/// Index child of `/stats`.
#[component]
pub fn PostCountPage() -> impl IntoView {
    let api = expect_context::<BlogClient>();
    let count = LocalResource::new(move || {
        let api = api.clone();
        async move { load_count(&*api).await }
    });

    view! {
        <div class="post-count">
            <Suspense fallback=move || view! { <p>{count_label(0)}</p> }>
                <p>{move || count.get().map(count_label)}</p>
            </Suspense>
        </div>
    }
}
