use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_company() -> Company {
    Company {
        id: 1,
        code: "005930".to_owned(),
        name: "Samsung Electronics".to_owned(),
        market: Some("KOSPI".to_owned()),
        sector: Some("Electronics".to_owned()),
    }
}

// =============================================================
// User-service payloads (camelCase)
// =============================================================

#[test]
fn interest_deserializes_camel_case_fields() {
    let raw = r#"{
        "id": 7,
        "companyRefId": 1,
        "companyCode": "005930",
        "companyName": "Samsung Electronics",
        "createdAt": "2025-02-20T09:15:00"
    }"#;
    let interest: Interest = serde_json::from_str(raw).unwrap();
    assert_eq!(interest.id, 7);
    assert_eq!(interest.company_ref_id, Some(1));
    assert_eq!(interest.company_code, "005930");
    assert_eq!(interest.company_name, "Samsung Electronics");
    assert_eq!(interest.created_at.as_deref(), Some("2025-02-20T09:15:00"));
}

#[test]
fn interest_tolerates_legacy_rows_without_ref_id() {
    let raw = r#"{"id": 3, "companyRefId": null, "companyCode": "000660", "companyName": "SK hynix"}"#;
    let interest: Interest = serde_json::from_str(raw).unwrap();
    assert_eq!(interest.company_ref_id, None);
    assert_eq!(interest.created_at, None);
}

#[test]
fn interest_request_for_company_serializes_camel_case() {
    let request = InterestRequest::for_company(&make_company());
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({
            "companyRefId": 1,
            "companyCode": "005930",
            "companyName": "Samsung Electronics",
        })
    );
}

#[test]
fn auth_response_email_is_optional() {
    let raw = r#"{"token": "jwt.abc", "username": "alice"}"#;
    let auth: AuthResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(auth.token, "jwt.abc");
    assert_eq!(auth.username, "alice");
    assert_eq!(auth.email, None);
}

// =============================================================
// Disclosure-service payloads (snake_case)
// =============================================================

#[test]
fn company_deserializes_without_market_or_sector() {
    let raw = r#"{"id": 4, "code": "005380", "name": "Hyundai Motor"}"#;
    let company: Company = serde_json::from_str(raw).unwrap();
    assert_eq!(company.market, None);
    assert_eq!(company.sector, None);
}

#[test]
fn disclosure_deserializes_service_response() {
    let raw = r#"{
        "id": 1,
        "company_id": 1,
        "title": "Quarterly report",
        "content": "Q4 2024 quarterly report",
        "report_date": "2025-02-20T00:00:00",
        "url": "https://dart.fss.or.kr/dsaf001/main.do?rcpNo=20250220000123",
        "filed_date": "2025-02-21T10:00:00"
    }"#;
    let disclosure: Disclosure = serde_json::from_str(raw).unwrap();
    assert_eq!(disclosure.company_id, 1);
    assert_eq!(disclosure.report_date, "2025-02-20T00:00:00");
    assert!(disclosure.url.as_deref().is_some_and(|url| url.starts_with("https://dart")));
}

#[test]
fn disclosure_optional_fields_default_to_none() {
    let raw = r#"{"id": 2, "company_id": 3, "title": "Annual report", "report_date": "2025-02-22T00:00:00"}"#;
    let disclosure: Disclosure = serde_json::from_str(raw).unwrap();
    assert_eq!(disclosure.content, None);
    assert_eq!(disclosure.url, None);
    assert_eq!(disclosure.filed_date, None);
}

// =============================================================
// Company summary
// =============================================================

#[test]
fn company_summary_joins_known_parts() {
    assert_eq!(make_company().summary(), "005930 | KOSPI | Electronics");
}

#[test]
fn company_summary_skips_missing_parts() {
    let company = Company { market: None, ..make_company() };
    assert_eq!(company.summary(), "005930 | Electronics");
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_prefers_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message": "Username already exists", "detail": "x"}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Username already exists"));
}

#[test]
fn error_body_falls_back_to_string_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail": "Company not found"}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Company not found"));
}

#[test]
fn error_body_ignores_structured_detail() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"detail": [{"loc": ["query", "q"], "msg": "field required"}]}"#).unwrap();
    assert_eq!(body.into_message(), None);
}

#[test]
fn error_body_blank_message_uses_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"message": "  ", "detail": "Not Found"}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Not Found"));
}
