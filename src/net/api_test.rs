use super::*;

#[test]
fn classify_response_prefers_outcome_body_on_rejection() {
    let outcome = classify_response(401, r#"{"success":false,"error":"Invalid credentials"}"#).unwrap();
    assert_eq!(outcome, AuthOutcome::rejected("Invalid credentials"));
}

#[test]
fn classify_response_accepts_success_body() {
    assert_eq!(classify_response(200, r#"{"success":true}"#).unwrap(), AuthOutcome::ok());
}

#[test]
fn classify_response_reports_status_without_body() {
    assert!(matches!(classify_response(502, "Bad Gateway"), Err(AuthError::Status(502))));
}

#[test]
fn classify_response_reports_decode_error_on_ok_status() {
    assert!(matches!(classify_response(200, "<html>"), Err(AuthError::Decode(_))));
}

#[test]
fn auth_error_messages() {
    assert_eq!(AuthError::Status(500).to_string(), "auth service responded with status 500");
    assert_eq!(AuthError::Network("offline".to_owned()).to_string(), "network error: offline");
}

#[test]
fn http_service_unavailable_off_browser() {
    let service = HttpAuthService::default();
    let request = LoginRequest { email: "a@b.co".to_owned(), password: "Secret123".to_owned(), remember_me: false };
    let result = futures::executor::block_on(service.login(&request));
    assert!(matches!(result, Err(AuthError::Unavailable(_))));
}
