use super::*;

fn alice() -> Session {
    Session { token: "jwt.abc".to_owned(), username: "alice".to_owned() }
}

// =============================================================
// AuthState constructors
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_is_loading_without_session() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn signed_in_exposes_username() {
    let state = AuthState::signed_in(alice());
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.username(), Some("alice"));
}

#[test]
fn signed_out_has_no_username() {
    let state = AuthState::signed_out();
    assert!(!state.loading);
    assert_eq!(state.username(), None);
}

#[test]
fn from_stored_resolves_loading() {
    assert_eq!(AuthState::from_stored(Some(alice())), AuthState::signed_in(alice()));
    assert_eq!(AuthState::from_stored(None), AuthState::signed_out());
}
