use super::*;

#[test]
fn from_parts_requires_token() {
    assert_eq!(Session::from_parts(None, Some("alice".to_owned())), None);
}

#[test]
fn from_parts_rejects_blank_token() {
    assert_eq!(Session::from_parts(Some("   ".to_owned()), Some("alice".to_owned())), None);
}

#[test]
fn from_parts_defaults_missing_username() {
    let session = Session::from_parts(Some("jwt.abc".to_owned()), None).unwrap();
    assert_eq!(session.token, "jwt.abc");
    assert_eq!(session.username, "");
}

#[test]
fn from_parts_keeps_both_values() {
    let session = Session::from_parts(Some("jwt.abc".to_owned()), Some("alice".to_owned())).unwrap();
    assert_eq!(session, Session { token: "jwt.abc".to_owned(), username: "alice".to_owned() });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_is_empty_without_browser_storage() {
    save(&Session { token: "jwt.abc".to_owned(), username: "alice".to_owned() });
    assert_eq!(load(), None);
    assert_eq!(load_token(), None);
    clear();
}
