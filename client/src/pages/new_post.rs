//! Post-creation form.
//!
//! Validates the three required fields locally, then sends one
//! `POST /api/post`. The outcome is shown inline; the list view is not
//! refreshed and there is no redirect.

#[cfg(test)]
#[path = "new_post_test.rs"]
mod new_post_test;

use leptos::prelude::*;

use crate::net::api::{ApiError, BlogApi, BlogClient};
use crate::net::types::NewPost;

pub const SLUG_REQUIRED: &str = "Slug is required";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const CREATED_MESSAGE: &str = "Post created successfully!";
pub const CREATE_FAILED_MESSAGE: &str = "Post created failed!";

/// Raw form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewPostForm {
    pub slug: String,
    pub title: String,
    pub description: String,
}

/// Which required fields were left blank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub slug: bool,
    pub title: bool,
    pub description: bool,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        !(self.slug || self.title || self.description)
    }

    /// Messages for the blank fields, in form order.
    pub fn messages(&self) -> Vec<&'static str> {
        [(self.slug, SLUG_REQUIRED), (self.title, TITLE_REQUIRED), (self.description, DESCRIPTION_REQUIRED)]
            .into_iter()
            .filter_map(|(missing, message)| missing.then_some(message))
            .collect()
    }
}

impl NewPostForm {
    /// Whitespace-only counts as blank. Returns the trimmed payload.
    pub fn validate(&self) -> Result<NewPost, FieldErrors> {
        let slug = self.slug.trim();
        let title = self.title.trim();
        let description = self.description.trim();
        let errors = FieldErrors { slug: slug.is_empty(), title: title.is_empty(), description: description.is_empty() };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewPost { slug: slug.to_owned(), title: title.to_owned(), description: description.to_owned() })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    Created,
    Failed(ApiError),
}

impl SubmitOutcome {
    /// Inline status line. Empty for validation failures, which show per-field messages instead.
    pub fn status_message(&self) -> &'static str {
        match self {
            Self::Invalid(_) => "",
            Self::Created => CREATED_MESSAGE,
            Self::Failed(_) => CREATE_FAILED_MESSAGE,
        }
    }

    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::Invalid(errors) => *errors,
            _ => FieldErrors::default(),
        }
    }
}

/// Validate `form` and, if it passes, send it once.
pub async fn submit_new_post(api: &dyn BlogApi, form: &NewPostForm) -> SubmitOutcome {
    let post = match form.validate() {
        Ok(post) => post,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    match api.create_post(&post).await {
        Ok(()) => SubmitOutcome::Created,
        Err(e) => {
            log::error!("error creating post {}: {e}", post.slug);
            SubmitOutcome::Failed(e)
        }
    }
}

/// `/newpost` view. Mounted behind `RequireSession`.
#[component]
pub fn NewPostPage() -> impl IntoView {
    let api = expect_context::<BlogClient>();
    let slug = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let status = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = NewPostForm { slug: slug.get(), title: title.get(), description: description.get() };
        let api = api.clone();
        busy.set(true);
        leptos::task::spawn_local(async move {
            let outcome = submit_new_post(&*api, &form).await;
            errors.set(outcome.field_errors());
            status.set(outcome.status_message().to_owned());
            busy.set(false);
        });
    };

    view! {
        <form class="page new-post-form" on:submit=on_submit>
            <label class="form-field">
                <span>"Slug:"</span>
                <input type="text" prop:value=move || slug.get() on:input=move |ev| slug.set(event_target_value(&ev))/>
            </label>
            <Show when=move || errors.get().slug>
                <div class="field-error">{SLUG_REQUIRED}</div>
            </Show>
            <label class="form-field">
                <span>"Title:"</span>
                <input type="text" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
            </label>
            <Show when=move || errors.get().title>
                <div class="field-error">{TITLE_REQUIRED}</div>
            </Show>
            <label class="form-field">
                <span>"Description:"</span>
                <input
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || errors.get().description>
                <div class="field-error">{DESCRIPTION_REQUIRED}</div>
            </Show>
            <button type="submit" disabled=move || busy.get()>
                "Add New"
            </button>
            <p class="text-success">{move || status.get()}</p>
        </form>
    }
}
