//! Route guard decisions shared by every protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RequireSession` renders from [`check_access`]; keeping the decision here
//! lets it be tested without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos_router::NavigateOptions;

use crate::routes;
use crate::state::session::SessionState;

/// Outcome of checking a protected route against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Stored session not read yet; render nothing.
    Pending,
    Granted,
    /// Leave the route, replacing the current history entry.
    Redirect(&'static str),
}

pub fn check_access(state: &SessionState) -> Access {
    if state.is_logged_in() {
        Access::Granted
    } else if !state.restored {
        Access::Pending
    } else {
        Access::Redirect(routes::LOGIN)
    }
}

/// Navigation options for guard redirects: the protected URL is not kept in history.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
