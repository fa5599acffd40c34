//! Search result row with an add-to-watchlist action.

use leptos::prelude::*;

use crate::net::types::Company;

#[component]
pub fn CompanyCard(company: Company, on_add: Callback<Company>) -> impl IntoView {
    let href = format!("/company/{}", company.id);
    let summary = company.summary();
    let name = company.name.clone();

    view! {
        <div class="card card--row">
            <div>
                <a class="card__title card__title--large" href=href>{name}</a>
                <p class="card__meta">{summary}</p>
            </div>
            <button class="btn" on:click=move |_| on_add.run(company.clone())>
                "Add to watchlist"
            </button>
        </div>
    }
}
