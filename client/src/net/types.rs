//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! The user service speaks camelCase (`companyRefId`), the disclosure service
//! speaks snake_case (`report_date`). Each type mirrors its owning service so
//! payloads deserialize without adapter code. Optional fields default when
//! absent because legacy rows omit them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials for `POST /api/users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Account details for `POST /api/users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Token grant returned by login and register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent API calls.
    pub token: String,
    /// Canonical username as stored by the user service.
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A listed company as returned by the company search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Disclosure-service company id; referenced by interests as `companyRefId`.
    pub id: i64,
    /// Exchange ticker code (e.g. `"005930"`).
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
}

impl Company {
    /// One-line `code | market | sector` summary, skipping unknown parts.
    pub fn summary(&self) -> String {
        [Some(self.code.as_str()), self.market.as_deref(), self.sector.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// A company saved to the user's watchlist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    /// Watchlist row id, used for deletion.
    pub id: i64,
    /// Disclosure-service company id. `None` for rows saved before the
    /// reference existed; those rows are skipped when fetching disclosures.
    #[serde(default)]
    pub company_ref_id: Option<i64>,
    pub company_code: String,
    pub company_name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for `POST /api/users/interests`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestRequest {
    pub company_ref_id: Option<i64>,
    pub company_code: String,
    pub company_name: String,
}

impl InterestRequest {
    /// Build the add-to-watchlist payload for a search result.
    pub fn for_company(company: &Company) -> Self {
        Self {
            company_ref_id: Some(company.id),
            company_code: company.code.clone(),
            company_name: company.name.clone(),
        }
    }
}

/// A regulatory filing published for a company.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    /// ISO 8601 timestamp of the report (e.g. `"2025-02-20T00:00:00"`).
    pub report_date: String,
    /// Link to the filing on the regulator's site, if known.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub filed_date: Option<String>,
}

/// Error body shapes returned by the backend.
///
/// The user service and the host proxy send `message`; the disclosure
/// service sends `detail`, which is either a string or a validation list.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The human-readable message, preferring `message` over a string `detail`.
    pub fn into_message(self) -> Option<String> {
        let Self { message, detail } = self;
        message.filter(|message| !message.trim().is_empty()).or_else(|| match detail {
            Some(serde_json::Value::String(detail)) => Some(detail),
            _ => None,
        })
    }
}
