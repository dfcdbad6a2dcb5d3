//! Session marker for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the root component and provided as `RwSignal<SessionState>`.
//! Read by the navigation shell and the route guard; written by the login
//! page and the logout action. The remote API issues no token, so this is a
//! display gate and never an authorization check.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Who is logged in. The password is never kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
}

/// Session plus whether the stored marker has been read back after mount.
///
/// `restored` stays `false` during server rendering and the first client
/// render, so guards can hold off deciding until the browser state is known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub restored: bool,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.restored = true;
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.restored = true;
    }

    /// Apply the marker read from browser storage. A login that completed
    /// before restoration wins over the stored value.
    pub fn restore(&mut self, stored: Option<Session>) {
        if self.session.is_none() {
            self.session = stored;
        }
        self.restored = true;
    }
}
