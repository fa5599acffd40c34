//! REST API helpers for the user and disclosure services.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so failures degrade to
//! an inline message. Path construction is split into pure helpers so query
//! encoding can be tested off-browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use url::form_urlencoded;

use super::http::{self, ApiError};
use super::types::{AuthResponse, Company, Disclosure, Interest, InterestRequest, LoginRequest, RegisterRequest};

/// Disclosures shown on a company page.
pub const COMPANY_DISCLOSURE_LIMIT: u32 = 10;
/// Disclosures shown on the dashboard feed.
pub const LATEST_DISCLOSURE_LIMIT: u32 = 20;

const INTERESTS_PATH: &str = "/api/users/interests";

pub(crate) fn search_path(query: &str) -> String {
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .finish();
    format!("/api/companies/search?{encoded}")
}

pub(crate) fn company_path(company_id: i64) -> String {
    format!("/api/companies/{company_id}")
}

pub(crate) fn interest_path(interest_id: i64) -> String {
    format!("{INTERESTS_PATH}/{interest_id}")
}

pub(crate) fn company_disclosures_path(company_id: i64, limit: u32) -> String {
    format!("/api/disclosures/company/{company_id}?limit={limit}")
}

pub(crate) fn latest_disclosures_path(company_ids: Option<&[i64]>, limit: u32) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(ids) = company_ids.filter(|ids| !ids.is_empty()) {
        let joined = ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        query.append_pair("company_ids", &joined);
    }
    query.append_pair("limit", &limit.to_string());
    format!("/api/disclosures/latest?{}", query.finish())
}

// =============================================================================
// AUTH
// =============================================================================

/// Create an account via `POST /api/users/register`.
///
/// # Errors
///
/// Fails when the username or email is taken, or the request fails.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    http::post_json("/api/users/register", request).await
}

/// Exchange credentials for a token via `POST /api/users/login`.
///
/// # Errors
///
/// Fails on bad credentials or when the request fails.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    http::post_json("/api/users/login", request).await
}

// =============================================================================
// COMPANIES
// =============================================================================

/// Search companies by name or ticker code.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn search_companies(query: &str) -> Result<Vec<Company>, ApiError> {
    http::get_json(&search_path(query)).await
}

/// Fetch a single company by disclosure-service id.
///
/// # Errors
///
/// Returns an error if the company is unknown or the request fails.
pub async fn fetch_company(company_id: i64) -> Result<Company, ApiError> {
    http::get_json(&company_path(company_id)).await
}

// =============================================================================
// WATCHLIST
// =============================================================================

/// Add a company to the signed-in user's watchlist.
///
/// # Errors
///
/// Fails when the company is already watched or the request fails.
pub async fn add_interest(request: &InterestRequest) -> Result<Interest, ApiError> {
    http::post_json(INTERESTS_PATH, request).await
}

/// List the signed-in user's watchlist, newest first.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_interests() -> Result<Vec<Interest>, ApiError> {
    http::get_json(INTERESTS_PATH).await
}

/// Remove a watchlist entry by its row id.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_interest(interest_id: i64) -> Result<(), ApiError> {
    http::delete(&interest_path(interest_id)).await
}

// =============================================================================
// DISCLOSURES
// =============================================================================

/// Most recent disclosures for one company.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn company_disclosures(company_id: i64, limit: u32) -> Result<Vec<Disclosure>, ApiError> {
    http::get_json(&company_disclosures_path(company_id, limit)).await
}

/// Most recent disclosures across `company_ids`, or across all companies
/// when no ids are given.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn latest_disclosures(company_ids: Option<&[i64]>, limit: u32) -> Result<Vec<Disclosure>, ApiError> {
    http::get_json(&latest_disclosures_path(company_ids, limit)).await
}
