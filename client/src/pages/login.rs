//! Login page: username + password against the user service.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::util::auth::{RouteAccess, install_route_guard};

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOGIN_FAILED: &str = "Login failed.";

/// Trim the username and require both fields.
pub(crate) fn validate_login(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter your username and password.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, RouteAccess::Guest, use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let request = match validate_login(&username.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        // Success flips auth to signed-in; the guest guard then moves to the dashboard.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request).await {
                Ok(resp) => {
                    let session = crate::state::session::Session { token: resp.token, username: resp.username };
                    crate::state::session::save(&session);
                    auth.set(AuthState::signed_in(session));
                }
                Err(e) => error.set(e.user_message(LOGIN_FAILED)),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1 class="auth-card__title">"Log in"</h1>
                <form on:submit=on_submit>
                    <label class="form-group">
                        "Username"
                        <input
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-group">
                        "Password"
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <div class="error">{move || error.get()}</div>
                    </Show>
                    <button class="btn btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
