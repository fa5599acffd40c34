use super::*;

// =============================================================
// ApiError
// =============================================================

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 409, message: Some("Username already exists".to_owned()) };
    assert_eq!(err.user_message("Sign-up failed."), "Username already exists");
}

#[test]
fn user_message_falls_back_without_server_message() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.user_message("Login failed."), "Login failed.");
    assert_eq!(ApiError::Network("offline".to_owned()).user_message("Login failed."), "Login failed.");
    assert_eq!(ApiError::Unavailable.user_message("Search failed."), "Search failed.");
}

#[test]
fn is_unauthorized_only_for_401() {
    assert!(ApiError::Status { status: 401, message: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, message: None }.is_unauthorized());
    assert!(!ApiError::Network("x".to_owned()).is_unauthorized());
}

#[test]
fn api_error_display_includes_status() {
    let err = ApiError::Status { status: 404, message: None };
    assert_eq!(err.to_string(), "request failed with status 404");
}

// =============================================================
// Request decoration
// =============================================================

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("jwt.abc"), "Bearer jwt.abc");
}

#[test]
fn request_ids_are_unique_uuids() {
    let a = new_request_id();
    let b = new_request_id();
    assert_ne!(a, b);
    assert!(uuid::Uuid::parse_str(&a).is_ok());
}

#[test]
fn endpoint_is_same_origin_by_default() {
    if api_base().is_empty() {
        assert_eq!(endpoint("/api/users/interests"), "/api/users/interests");
    } else {
        assert!(endpoint("/api/users/interests").ends_with("/api/users/interests"));
    }
}

#[test]
fn method_names_are_uppercase() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

// =============================================================
// Log lines
// =============================================================

#[test]
fn success_line_names_request() {
    assert_eq!(
        success_line("r-1", Method::Get, "/api/users/interests"),
        "[r-1] OK GET /api/users/interests"
    );
}

#[test]
fn failure_line_includes_status_or_no_response() {
    assert_eq!(
        failure_line("r-2", Method::Delete, "/api/users/interests/3", Some(500)),
        "[r-2] FAILED DELETE /api/users/interests/3 - 500"
    );
    assert_eq!(
        failure_line("r-3", Method::Post, "/api/users/login", None),
        "[r-3] FAILED POST /api/users/login - no response"
    );
}

#[test]
fn trace_hint_mentions_request_id() {
    assert!(trace_hint("r-9").contains("request_id=r-9"));
}

// =============================================================
// Error bodies
// =============================================================

#[test]
fn error_message_from_body_reads_message() {
    assert_eq!(
        error_message_from_body(r#"{"message":"Company already in interests"}"#).as_deref(),
        Some("Company already in interests")
    );
}

#[test]
fn error_message_from_body_ignores_non_json() {
    assert_eq!(error_message_from_body("<html>Bad Gateway</html>"), None);
    assert_eq!(error_message_from_body(""), None);
}
