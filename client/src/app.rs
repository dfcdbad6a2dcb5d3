//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::nav_shell::NavShell;
use crate::components::require_session::RequireSession;
use crate::net::api::{ApiConfig, BlogClient, HttpBlogApi};
use crate::pages::info::{AboutPage, HomePage, NotFoundPage};
use crate::pages::login::LoginPage;
use crate::pages::new_post::NewPostPage;
use crate::pages::posts::{PostListPage, PostPage, PostsLayout};
use crate::pages::stats::{PostCountPage, StatsLayout};
use crate::state::session::SessionState;
use crate::util::session_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session state and the API handle, renders the navigation shell
/// and dispatches routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    provide_context(BlogClient::new(HttpBlogApi::new(ApiConfig::from_build_env())));

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let stored = session_store::load();
        session.update(|s| s.restore(stored));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/blogfront.css"/>
        <Title text="Blog"/>

        <Router>
            <NavShell/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                    <ParentRoute path=path!("/posts") view=PostsLayout>
                        <Route path=path!("") view=PostListPage/>
                        <Route path=path!(":slug") view=PostPage/>
                    </ParentRoute>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <ParentRoute
                        path=path!("/stats")
                        view=|| view! { <RequireSession><StatsLayout/></RequireSession> }
                    >
                        <Route path=path!("") view=PostCountPage/>
                    </ParentRoute>
                    <Route
                        path=path!("/newpost")
                        view=|| view! { <RequireSession><NewPostPage/></RequireSession> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
