//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and routing decisions
//! from page and component markup to improve reuse and testability.

pub mod guard;
pub mod session_store;
