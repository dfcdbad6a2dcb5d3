//! Static pages: home, about and the not-found fallback.

use leptos::prelude::*;

const PLACEHOLDER: &str = "Lorem ipsum dolor sit amet, consectetur adip.";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <h2>"Home View"</h2>
            <p>{PLACEHOLDER}</p>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <h2>"About View"</h2>
            <p>{PLACEHOLDER}</p>
        </div>
    }
}

/// Rendered for any path the route table does not match.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <h2>"404: Page Not Found"</h2>
            <p>{PLACEHOLDER}</p>
        </div>
    }
}
