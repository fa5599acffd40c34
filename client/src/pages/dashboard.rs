//! Dashboard: the signed-in user's watchlist and the latest disclosures for
//! the companies on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The watchlist is requested once
//! auth has resolved; disclosures are then requested for every entry that
//! carries a company reference. Legacy entries without one are listed but
//! contribute no disclosures.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::disclosure_card::DisclosureCard;
use crate::components::interest_card::InterestCard;
use crate::net::types::{Disclosure, Interest};
use crate::state::auth::AuthState;
use crate::util::auth::{RouteAccess, install_route_guard};

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOAD_FAILED: &str = "Failed to load your watchlist.";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const DELETE_FAILED: &str = "Failed to delete.";

/// Distinct company references on the watchlist, in watchlist order.
pub(crate) fn company_ref_ids(interests: &[Interest]) -> Vec<i64> {
    let mut ids = Vec::new();
    for id in interests.iter().filter_map(|i| i.company_ref_id) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Remove the entry with `interest_id`. Returns whether anything was removed.
pub(crate) fn remove_interest(interests: &mut Vec<Interest>, interest_id: i64) -> bool {
    let before = interests.len();
    interests.retain(|i| i.id != interest_id);
    interests.len() != before
}

/// Drop disclosures for companies no longer on the watchlist.
pub(crate) fn retain_watched(disclosures: &mut Vec<Disclosure>, interests: &[Interest]) {
    let watched = company_ref_ids(interests);
    disclosures.retain(|d| watched.contains(&d.company_id));
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, RouteAccess::Authenticated, use_navigate());

    let interests = RwSignal::new(Vec::<Interest>::new());
    let disclosures = RwSignal::new(Vec::<Disclosure>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let state = auth.get();
        if state.loading || !state.is_authenticated() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_watchlist(interests, disclosures, loading, error));
    });

    let on_delete = Callback::new(move |interest_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_interest(interest_id).await {
                Ok(()) => {
                    interests.update(|list| {
                        remove_interest(list, interest_id);
                    });
                    let remaining = interests.get_untracked();
                    disclosures.update(|list| retain_watched(list, &remaining));
                }
                Err(_) => error.set(DELETE_FAILED.to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = interest_id;
    });

    view! {
        <div class="container">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="placeholder">"Loading..."</p> }
            >
                <h1>"Watchlist disclosures"</h1>
                <Show when=move || !error.get().is_empty()>
                    <div class="error">{move || error.get()}</div>
                </Show>
                <Show
                    when=move || !interests.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="card placeholder">
                                <p>"Your watchlist is empty."</p>
                                <a href="/search">"Search companies"</a>
                            </div>
                        }
                    }
                >
                    <section class="section">
                        <h2>{move || format!("Watchlist ({})", interests.get().len())}</h2>
                        <div class="card-list">
                            {move || {
                                interests
                                    .get()
                                    .into_iter()
                                    .map(|interest| view! { <InterestCard interest=interest on_delete=on_delete/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </section>
                    <section class="section">
                        <h2>"Latest disclosures"</h2>
                        <Show
                            when=move || !disclosures.get().is_empty()
                            fallback=|| view! { <div class="card placeholder">"No disclosures yet."</div> }
                        >
                            <div class="card-list">
                                {move || {
                                    disclosures
                                        .get()
                                        .into_iter()
                                        .map(|disclosure| view! { <DisclosureCard disclosure=disclosure/> })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </section>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn load_watchlist(
    interests: RwSignal<Vec<Interest>>,
    disclosures: RwSignal<Vec<Disclosure>>,
    loading: RwSignal<bool>,
    error: RwSignal<String>,
) {
    use crate::net::api;

    match api::list_interests().await {
        Ok(list) => {
            let ids = company_ref_ids(&list);
            interests.set(list);
            if !ids.is_empty() {
                match api::latest_disclosures(Some(&ids), api::LATEST_DISCLOSURE_LIMIT).await {
                    Ok(items) => disclosures.set(items),
                    Err(e) => log::error!("failed to load disclosures: {e}"),
                }
            }
        }
        Err(e) => {
            log::error!("failed to load watchlist: {e}");
            error.set(LOAD_FAILED.to_owned());
        }
    }
    loading.set(false);
}
