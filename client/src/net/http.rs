//! HTTP wrapper shared by every REST call.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! the session token only exists in the browser.
//!
//! Each request gets JSON content headers, a fresh `X-Request-ID` and, when
//! a session is stored, a bearer token. Outcomes are logged against the
//! request id so a failing call can be found in the backend logs. A 401
//! response clears the session and sends the browser back to `/login`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ErrorBody;

pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message to show the user: the server's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// Build-time API origin. Empty means same-origin through the host proxy.
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("")
}

/// Absolute or same-origin URL for an API `path`.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base().trim_end_matches('/'))
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn new_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn success_line(request_id: &str, method: Method, path: &str) -> String {
    format!("[{request_id}] OK {} {path}", method.as_str())
}

pub fn failure_line(request_id: &str, method: Method, path: &str, status: Option<u16>) -> String {
    let status = status.map_or_else(|| "no response".to_owned(), |s| s.to_string());
    format!("[{request_id}] FAILED {} {path} - {status}", method.as_str())
}

pub fn trace_hint(request_id: &str) -> String {
    format!("[{request_id}] search backend logs for request_id={request_id}")
}

/// Pull the user-facing message out of an error response body.
pub fn error_message_from_body(raw: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(raw).ok()?.into_message()
}

/// `GET path` and decode the JSON response.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures, non-success statuses and
/// undecodable bodies.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(Method::Get, path, None).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `POST path` with a JSON `body` and decode the JSON response.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures, non-success statuses and
/// undecodable bodies.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let payload = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    #[cfg(feature = "hydrate")]
    {
        let resp = send(Method::Post, path, Some(payload)).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, payload);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE path`, ignoring any response body.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures and non-success statuses.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Method::Delete, path, None).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send(method: Method, path: &str, body: Option<String>) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::{Request, RequestBuilder};

    let url = endpoint(path);
    let request_id = new_request_id();
    let mut builder: RequestBuilder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Delete => Request::delete(&url),
    };
    builder = builder
        .header("Content-Type", "application/json")
        .header(REQUEST_ID_HEADER, &request_id);
    if let Some(token) = crate::state::session::load_token() {
        builder = builder.header("Authorization", &bearer(&token));
    }

    let request = match body {
        Some(payload) => builder.body(payload),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::error!("{}", failure_line(&request_id, method, path, None));
            return Err(ApiError::Network(e.to_string()));
        }
    };

    if resp.ok() {
        log::info!("{}", success_line(&request_id, method, path));
        return Ok(resp);
    }

    let status = resp.status();
    log::error!("{}", failure_line(&request_id, method, path, Some(status)));
    log::error!("{}", trace_hint(&request_id));
    let message = resp.text().await.ok().and_then(|raw| error_message_from_body(&raw));

    let err = ApiError::Status { status, message };
    if err.is_unauthorized() {
        handle_unauthorized();
    }
    Err(err)
}

/// Drop the stale session and hard-navigate to the login page.
#[cfg(feature = "hydrate")]
fn handle_unauthorized() {
    crate::state::session::clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
