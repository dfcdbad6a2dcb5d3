//! Top navigation bar with session-dependent links and the logout action.

#[cfg(test)]
#[path = "nav_shell_test.rs"]
mod nav_shell_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::session::SessionState;
use crate::util::session_store;

/// One entry of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link { label: &'static str, href: &'static str },
    Separator,
    Logout,
}

/// Navigation entries in display order for the given login state.
pub fn nav_items(logged_in: bool) -> Vec<NavItem> {
    let mut items = vec![
        NavItem::Link { label: "Home", href: routes::HOME },
        NavItem::Link { label: "Posts", href: routes::POSTS },
    ];
    if logged_in {
        items.push(NavItem::Link { label: "New Post", href: routes::NEW_POST });
    }
    items.push(NavItem::Link { label: "About", href: routes::ABOUT });
    items.push(NavItem::Separator);
    if logged_in {
        items.push(NavItem::Link { label: "Stats", href: routes::STATS });
        items.push(NavItem::Logout);
    } else {
        items.push(NavItem::Link { label: "Login", href: routes::LOGIN });
    }
    items
}

/// Leave for the home page, then drop the session.
///
/// The route must change first. A protected view still mounted when the
/// session clears would redirect to the login page and replace the home entry.
pub fn log_out(navigate: impl FnOnce(&'static str), clear_session: impl FnOnce()) {
    navigate(routes::HOME);
    clear_session();
}

/// Navigation shell rendered above every route.
#[component]
pub fn NavShell() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        log_out(
            |path| navigate(path, NavigateOptions::default()),
            || {
                session.update(SessionState::sign_out);
                session_store::save(None);
            },
        );
    });

    view! {
        <nav class="nav-shell">
            {move || {
                nav_items(session.with(SessionState::is_logged_in))
                    .into_iter()
                    .map(|item| match item {
                        NavItem::Link { label, href } => {
                            view! {
                                <span class="nav-shell__link">
                                    <A href=href>{label}</A>
                                </span>
                            }
                                .into_any()
                        }
                        NavItem::Separator => {
                            view! { <span class="nav-shell__separator">" | "</span> }.into_any()
                        }
                        NavItem::Logout => {
                            view! {
                                <span
                                    class="nav-shell__link nav-shell__logout"
                                    on:click=move |_| on_logout.run(())
                                >
                                    "Logout"
                                </span>
                            }
                                .into_any()
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
