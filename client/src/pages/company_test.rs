use super::*;

#[test]
fn parse_company_id_accepts_positive_integers() {
    assert_eq!(parse_company_id("1"), Some(1));
    assert_eq!(parse_company_id(" 207940 "), Some(207_940));
}

#[test]
fn parse_company_id_rejects_garbage() {
    assert_eq!(parse_company_id("samsung"), None);
    assert_eq!(parse_company_id(""), None);
    assert_eq!(parse_company_id("1.5"), None);
}

#[test]
fn parse_company_id_rejects_non_positive() {
    assert_eq!(parse_company_id("0"), None);
    assert_eq!(parse_company_id("-3"), None);
}
