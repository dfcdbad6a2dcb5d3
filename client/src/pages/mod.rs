//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its own fetch lifecycle through the `BlogClient` in context
//! and keeps its state local. Pure decision logic sits next to each page so
//! it can be tested without a browser.

pub mod info;
pub mod login;
pub mod new_post;
pub mod posts;
pub mod stats;
