//! Browser `sessionStorage` persistence for the session marker.
//!
//! The marker lives as long as the tab: it survives a reload and is gone once
//! the tab closes. Storage failures (private mode, quota) degrade to an
//! in-memory-only session.

use crate::state::session::Session;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "blogfront_session";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Read the stored marker, if any.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("discarding unreadable session marker: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write the marker, or remove it when `session` is `None`.
pub fn save(session: Option<&Session>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        match session {
            Some(session) => {
                let Ok(raw) = serde_json::to_string(session) else {
                    return;
                };
                if storage.set_item(STORAGE_KEY, &raw).is_err() {
                    log::warn!("session marker not persisted");
                }
            }
            None => {
                if storage.remove_item(STORAGE_KEY).is_err() {
                    log::warn!("session marker not cleared");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
