//! Company search with add-to-watchlist.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::company_card::CompanyCard;
use crate::net::types::Company;
use crate::state::auth::AuthState;
use crate::util::auth::{RouteAccess, install_route_guard};

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const SEARCH_FAILED: &str = "Search failed.";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const ADD_FAILED: &str = "Failed to add.";
/// How long the add confirmation stays visible.
#[cfg(feature = "hydrate")]
const SUCCESS_TIMEOUT_SECS: u64 = 3;

/// Trimmed query, or `None` when there is nothing to search for.
pub(crate) fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// The usage hint shows whenever the query box is empty.
pub(crate) fn show_hint(query: &str) -> bool {
    query.trim().is_empty()
}

/// "No results." is reserved for a finished, successful search for the
/// query still in the box.
pub(crate) fn show_no_results(query: &str, searched: bool, result_count: usize, busy: bool, failed: bool) -> bool {
    searched && !query.trim().is_empty() && result_count == 0 && !busy && !failed
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn added_message(company_name: &str) -> String {
    format!("{company_name} added to your watchlist.")
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, RouteAccess::Authenticated, use_navigate());

    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<Company>::new());
    let searched = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(q) = normalize_query(&query.get()) else {
            return;
        };
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::search_companies(&q).await {
                Ok(list) => results.set(list),
                Err(e) => {
                    log::error!("company search failed: {e}");
                    error.set(SEARCH_FAILED.to_owned());
                }
            }
            searched.set(true);
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = q;
            busy.set(false);
        }
    };

    let on_add = Callback::new(move |company: Company| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::InterestRequest::for_company(&company);
            match crate::net::api::add_interest(&request).await {
                Ok(_) => {
                    success.set(added_message(&company.name));
                    gloo_timers::future::sleep(std::time::Duration::from_secs(SUCCESS_TIMEOUT_SECS)).await;
                    success.set(String::new());
                }
                Err(e) => error.set(e.user_message(ADD_FAILED)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = company;
    });

    view! {
        <div class="container">
            <h1>"Company search"</h1>
            <form class="search-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Company name or ticker code (e.g. Samsung, 005930)"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Searching..." } else { "Search" }}
                </button>
            </form>

            <Show when=move || !success.get().is_empty()>
                <div class="success">{move || success.get()}</div>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <div class="error">{move || error.get()}</div>
            </Show>

            <Show when=move || !results.get().is_empty()>
                <section class="section">
                    <h2>{move || format!("Results ({})", results.get().len())}</h2>
                    <div class="card-list">
                        {move || {
                            results
                                .get()
                                .into_iter()
                                .map(|company| view! { <CompanyCard company=company on_add=on_add/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
            </Show>

            <Show when=move || {
                show_no_results(
                    &query.get(),
                    searched.get(),
                    results.get().len(),
                    busy.get(),
                    !error.get().is_empty(),
                )
            }>
                <div class="card placeholder">"No results."</div>
            </Show>
            <Show when=move || show_hint(&query.get())>
                <div class="card placeholder">
                    <p>"Search by company name or ticker code."</p>
                    <p class="card__meta">"For example: Samsung Electronics, LG Energy Solution, 005930"</p>
                </div>
            </Show>
        </div>
    }
}
