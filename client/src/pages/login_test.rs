use super::*;

#[test]
fn validate_login_trims_username() {
    assert_eq!(
        validate_login("  alice  ", "secret"),
        Ok(LoginRequest { username: "alice".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_keeps_password_verbatim() {
    let request = validate_login("alice", " spaced ").unwrap();
    assert_eq!(request.password, " spaced ");
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login("   ", "secret"), Err("Enter your username and password."));
    assert_eq!(validate_login("alice", ""), Err("Enter your username and password."));
}

#[test]
fn login_failure_falls_back_to_generic_message() {
    let err = crate::net::http::ApiError::Status { status: 500, message: None };
    assert_eq!(err.user_message(LOGIN_FAILED), "Login failed.");
}
