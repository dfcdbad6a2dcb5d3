//! Login page: username/password form against `POST /api/login`.
//!
//! On success only the username is kept as the session marker; the password
//! is dropped with the request body.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiError, BlogApi, BlogClient};
use crate::net::types::Credentials;
use crate::routes;
use crate::state::session::{Session, SessionState};
use crate::util::session_store;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password!";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed!";

/// Inline message for a failed login.
pub fn login_error_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Status(_) => INVALID_CREDENTIALS_MESSAGE,
        _ => LOGIN_FAILED_MESSAGE,
    }
}

/// Send `credentials` once. Consumes them so the password does not outlive the call.
pub async fn attempt_login(api: &dyn BlogApi, credentials: Credentials) -> Result<Session, &'static str> {
    match api.login(&credentials).await {
        Ok(()) => Ok(Session { username: credentials.username }),
        Err(e) => {
            if !matches!(e, ApiError::Status(_)) {
                log::error!("login error: {e}");
            }
            Err(login_error_message(&e))
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<BlogClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = Credentials { username: username.get(), password: password.get() };
        let api = api.clone();
        let navigate = navigate.clone();
        busy.set(true);
        leptos::task::spawn_local(async move {
            match attempt_login(&*api, credentials).await {
                Ok(new_session) => {
                    session_store::save(Some(&new_session));
                    session.update(|s| s.sign_in(new_session));
                    password.set(String::new());
                    error.set(String::new());
                    navigate(routes::STATS, NavigateOptions::default());
                }
                Err(message) => error.set(message.to_owned()),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="page login-form" on:submit=on_submit>
            <label class="form-field">
                <span>"Username:"</span>
                <input
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span>"Password:"</span>
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" disabled=move || busy.get()>
                "Login"
            </button>
            <p class="login-error">{move || error.get()}</p>
        </form>
    }
}
