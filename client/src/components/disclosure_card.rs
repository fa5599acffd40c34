//! Card rendering a single disclosure filing.
//!
//! Shared by the dashboard feed and the company page.

#[cfg(test)]
#[path = "disclosure_card_test.rs"]
mod disclosure_card_test;

use leptos::prelude::*;

use crate::net::types::Disclosure;

/// Calendar date part of an ISO 8601 timestamp (`YYYY-MM-DD`).
///
/// Values that do not start with a date are shown unchanged.
pub fn format_report_date(raw: &str) -> String {
    let date = raw.split(['T', ' ']).next().unwrap_or(raw);
    let bytes = date.as_bytes();
    let looks_like_date = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes.iter().enumerate().all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if looks_like_date { date.to_owned() } else { raw.to_owned() }
}

#[component]
pub fn DisclosureCard(disclosure: Disclosure) -> impl IntoView {
    let date = format_report_date(&disclosure.report_date);

    view! {
        <div class="card">
            <h3 class="disclosure__title">{disclosure.title}</h3>
            {disclosure.content.map(|content| view! { <p class="disclosure__content">{content}</p> })}
            <p class="disclosure__date">{date}</p>
            {disclosure
                .url
                .map(|url| {
                    view! {
                        <a class="disclosure__link" href=url target="_blank" rel="noopener noreferrer">
                            "View filing"
                        </a>
                    }
                })}
        </div>
    }
}
