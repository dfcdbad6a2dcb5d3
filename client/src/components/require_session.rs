//! Guard wrapper used by every protected route.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionState;
use crate::util::guard::{Access, check_access, redirect_options};

/// Renders `children` only while a session exists; otherwise redirects to
/// `/login` with history replacement. Renders nothing until the stored session
/// has been restored.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || match session.with(check_access) {
        Access::Pending => ().into_any(),
        Access::Granted => children().into_any(),
        Access::Redirect(path) => view! { <Redirect path=path options=redirect_options()/> }.into_any(),
    }
}
