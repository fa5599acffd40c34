//! Sign-up page. A successful registration returns to the login page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::types::RegisterRequest;

pub(crate) const MIN_USERNAME_LEN: usize = 3;
pub(crate) const MIN_PASSWORD_LEN: usize = 6;
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const SIGNUP_FAILED: &str = "Sign-up failed.";
/// Pause on the confirmation before moving to the login page.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u64 = 1500;

/// Check the sign-up form and build the register payload.
pub(crate) fn validate_signup(username: &str, email: &str, password: &str) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err("Username must be at least 3 characters.");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || done.get() {
            return;
        }
        error.set(String::new());
        let request = match validate_signup(&username.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request).await {
                    Ok(_) => {
                        done.set(true);
                        busy.set(false);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS)).await;
                        navigate(crate::util::auth::LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(e.user_message(SIGNUP_FAILED));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1 class="auth-card__title">"Sign up"</h1>
                <form on:submit=on_submit>
                    <label class="form-group">
                        "Username"
                        <input
                            type="text"
                            required
                            minlength=MIN_USERNAME_LEN.to_string()
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-group">
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-group">
                        "Password"
                        <input
                            type="password"
                            required
                            minlength=MIN_PASSWORD_LEN.to_string()
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <div class="error">{move || error.get()}</div>
                    </Show>
                    <Show when=move || done.get()>
                        <div class="success">"Account created. Taking you to the login page..."</div>
                    </Show>
                    <button class="btn btn--block" type="submit" disabled=move || busy.get() || done.get()>
                        {move || if busy.get() { "Signing up..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
