//! Top navigation bar shown to signed-in users.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

/// Brand link, page links, the signed-in username and a log-out button.
/// Renders nothing while signed out.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = StoredValue::new_local(use_navigate());

    let on_logout = Callback::new(move |()| {
        let target = sign_out(auth);
        navigate.with_value(|navigate| navigate(target, NavigateOptions::default()));
    });

    view! {
        <Show when=move || auth.get().is_authenticated()>
            <nav class="navbar">
                <div class="navbar__inner">
                    <a class="navbar__brand" href="/dashboard">"Casablanca"</a>
                    <div class="navbar__links">
                        <a class="navbar__link" href="/dashboard">"Home"</a>
                        <a class="navbar__link" href="/search">"Search"</a>
                        <span class="navbar__user">
                            {move || auth.get().username().unwrap_or_default().to_owned()}
                        </span>
                        <button class="btn btn--danger" on:click=move |_| on_logout.run(())>
                            "Log out"
                        </button>
                    </div>
                </div>
            </nav>
        </Show>
    }
}
