//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation chrome and route guard while reading or
//! writing the shared session state from Leptos context.

pub mod nav_shell;
pub mod post_link;
pub mod require_session;
