//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the navbar to coordinate login redirects and
//! identity-dependent rendering. Provided as `RwSignal<AuthState>` context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::Session;

/// Authentication state tracking the current session and loading status.
///
/// `loading` stays true until the browser storage has been read, which only
/// happens after hydration. Guards must not redirect while it is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the stored session is known.
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    pub fn signed_in(session: Session) -> Self {
        Self { session: Some(session), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { session: None, loading: false }
    }

    /// Resolved state for whatever session was found in storage.
    pub fn from_stored(session: Option<Session>) -> Self {
        session.map_or_else(Self::signed_out, Self::signed_in)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Username of the signed-in user, if any.
    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }
}
