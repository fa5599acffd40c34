//! Persisted login session.
//!
//! The bearer token and username live in `localStorage` under the same keys
//! the backend-issued session has always used, so a page reload keeps the
//! user signed in. A missing or blank token means signed out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";

/// A signed-in user's credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
}

impl Session {
    /// Assemble a session from stored parts. Returns `None` without a usable token.
    pub fn from_parts(token: Option<String>, username: Option<String>) -> Option<Self> {
        let token = token.filter(|t| !t.trim().is_empty())?;
        Some(Self { token, username: username.unwrap_or_default() })
    }
}

/// Load the stored session, if any.
pub fn load() -> Option<Session> {
    Session::from_parts(storage::get_item(TOKEN_KEY), storage::get_item(USERNAME_KEY))
}

/// The stored bearer token, if any.
pub fn load_token() -> Option<String> {
    load().map(|session| session.token)
}

/// Persist `session`, replacing any previous one.
pub fn save(session: &Session) {
    storage::set_item(TOKEN_KEY, &session.token);
    storage::set_item(USERNAME_KEY, &session.username);
}

/// Forget the stored session.
pub fn clear() {
    storage::remove_item(TOKEN_KEY);
    storage::remove_item(USERNAME_KEY);
}
