//! List entry linking to a post's detail view.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PostLink(href: String, title: String) -> impl IntoView {
    view! {
        <li class="post-link">
            <A href=href>
                <h3>{title}</h3>
            </A>
        </li>
    }
}
