//! `/`: forwards to the dashboard or the login page once auth is known.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{RouteAccess, install_route_guard};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, RouteAccess::Entry, use_navigate());

    view! { <p class="placeholder">"Loading..."</p> }
}
