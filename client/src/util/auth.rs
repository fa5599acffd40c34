//! Route guards shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior, so each page
//! declares its [`RouteAccess`] and installs one guard effect. Decisions are
//! deferred while the stored session is still being read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::session;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Signed-in users only; others go to the login page.
    Authenticated,
    /// Signed-out users only; signed-in users go to the dashboard.
    Guest,
    /// Landing route that always forwards based on auth.
    Entry,
    /// Everyone.
    Public,
}

/// Whether a signed-out user on an authenticated route must be bounced.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

/// Where `access` sends a user in `state`, or `None` to stay.
pub fn redirect_target(access: RouteAccess, state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    match access {
        RouteAccess::Authenticated => should_redirect_unauth(state).then_some(LOGIN_PATH),
        RouteAccess::Guest => state.is_authenticated().then_some(DASHBOARD_PATH),
        RouteAccess::Entry => Some(if state.is_authenticated() { DASHBOARD_PATH } else { LOGIN_PATH }),
        RouteAccess::Public => None,
    }
}

/// Navigate away whenever `access` no longer admits the current auth state.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, access: RouteAccess, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let Some(target) = redirect_target(access, &state) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Forget the stored session, mark auth signed out, and return where the
/// user goes next.
pub fn sign_out(auth: RwSignal<AuthState>) -> &'static str {
    session::clear();
    auth.set(AuthState::signed_out());
    LOGIN_PATH
}
