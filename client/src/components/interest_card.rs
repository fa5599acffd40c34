//! Watchlist entry row on the dashboard.

use leptos::prelude::*;

use crate::net::types::Interest;

/// Company name and code with a delete button. The name links to the
/// company page when the entry carries a company reference.
#[component]
pub fn InterestCard(interest: Interest, on_delete: Callback<i64>) -> impl IntoView {
    let id = interest.id;
    let name = match interest.company_ref_id {
        Some(ref_id) => view! {
            <a class="card__title" href=format!("/company/{ref_id}")>{interest.company_name}</a>
        }
        .into_any(),
        None => view! { <strong class="card__title">{interest.company_name}</strong> }.into_any(),
    };

    view! {
        <div class="card card--row">
            <div>
                {name}
                <span class="card__meta">{interest.company_code}</span>
            </div>
            <button class="btn btn--danger btn--small" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </div>
    }
}
