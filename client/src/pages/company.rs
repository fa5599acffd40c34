//! Company detail: header plus the company's most recent disclosures.

#[cfg(test)]
#[path = "company_test.rs"]
mod company_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::disclosure_card::DisclosureCard;
use crate::net::http::ApiError;
use crate::net::types::{Company, Disclosure};
use crate::state::auth::AuthState;
use crate::util::auth::{RouteAccess, install_route_guard};

/// Parse the `:id` route segment. Ids are positive integers.
pub(crate) fn parse_company_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

async fn load_company(company_id: i64) -> Result<(Company, Vec<Disclosure>), ApiError> {
    use crate::net::api;

    let company = api::fetch_company(company_id).await?;
    let disclosures = api::company_disclosures(company_id, api::COMPANY_DISCLOSURE_LIMIT).await?;
    Ok((company, disclosures))
}

#[component]
pub fn CompanyPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, RouteAccess::Authenticated, use_navigate());

    let params = use_params_map();
    let company_id = move || params.read().get("id").as_deref().and_then(parse_company_id);

    let details = LocalResource::new(move || {
        let id = company_id();
        async move {
            match id {
                Some(id) => Some(load_company(id).await),
                None => None,
            }
        }
    });

    view! {
        <div class="container">
            <Suspense fallback=move || view! { <p class="placeholder">"Loading..."</p> }>
                {move || {
                    details
                        .get()
                        .map(|loaded| match loaded {
                            None => view! { <div class="card placeholder">"Unknown company."</div> }.into_any(),
                            Some(Err(e)) => {
                                view! {
                                    <div class="error">{e.user_message("Failed to load company.")}</div>
                                }
                                    .into_any()
                            }
                            Some(Ok((company, disclosures))) => {
                                view! { <CompanyDetails company=company disclosures=disclosures/> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn CompanyDetails(company: Company, disclosures: Vec<Disclosure>) -> impl IntoView {
    let summary = company.summary();
    let empty = disclosures.is_empty();

    view! {
        <header class="section">
            <h1>{company.name}</h1>
            <p class="card__meta">{summary}</p>
        </header>
        <section class="section">
            <h2>"Recent disclosures"</h2>
            {if empty {
                view! { <div class="card placeholder">"No disclosures yet."</div> }.into_any()
            } else {
                view! {
                    <div class="card-list">
                        {disclosures
                            .into_iter()
                            .map(|disclosure| view! { <DisclosureCard disclosure=disclosure/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
