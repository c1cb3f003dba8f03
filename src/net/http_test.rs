use super::*;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================
// URL helpers
// =============================================================

#[test]
fn api_base_is_absolute() {
    assert!(api_base().starts_with("http"));
    assert!(!api_base().ends_with('/'));
}

#[test]
fn upload_url_passes_absolute_urls_through() {
    assert_eq!(
        upload_url("https://cdn.example.com/a.png"),
        "https://cdn.example.com/a.png"
    );
}

#[test]
fn upload_url_joins_relative_paths() {
    let url = upload_url("avatars/7.png");
    assert!(url.ends_with("/avatars/7.png"));
    assert!(url.starts_with("http"));
}

#[test]
fn upload_url_empty_input_is_empty() {
    assert_eq!(upload_url(""), "");
}

// =============================================================
// Form encoding
// =============================================================

#[test]
fn form_urlencode_escapes_reserved_characters() {
    let body = form_urlencode(&[("username", "user@example.com"), ("password", "a&b=c")]);
    assert_eq!(body, "username=user%40example.com&password=a%26b%3Dc");
}

#[test]
fn form_urlencode_uses_plus_for_spaces() {
    assert_eq!(form_urlencode(&[("q", "hello world")]), "q=hello+world");
}

#[test]
fn form_urlencode_percent_encodes_multibyte() {
    assert_eq!(form_urlencode(&[("name", "élève")]), "name=%C3%A9l%C3%A8ve");
}

// =============================================================
// Bearer injection
// =============================================================

#[test]
fn bearer_header_present_while_token_stored() {
    storage::set(TOKEN_KEY, "tok123");
    assert_eq!(bearer_header().as_deref(), Some("Bearer tok123"));
}

#[test]
fn bearer_header_absent_without_token() {
    storage::remove(TOKEN_KEY);
    assert_eq!(bearer_header(), None);
}

// =============================================================
// Error-detail extraction and messages
// =============================================================

#[test]
fn extract_detail_prefers_detail_string() {
    let body = serde_json::json!({"detail": "Incorrect email or password"});
    assert_eq!(
        extract_detail(&body),
        Some("Incorrect email or password".to_owned())
    );
}

#[test]
fn extract_detail_stringifies_structured_detail() {
    let body = serde_json::json!({"detail": [{"loc": ["body", "email"], "msg": "invalid"}]});
    let detail = extract_detail(&body).expect("structured detail");
    assert!(detail.contains("invalid"));
}

#[test]
fn extract_detail_falls_back_to_nested_error_message() {
    let body = serde_json::json!({"error": {"message": "boom"}});
    assert_eq!(extract_detail(&body), Some("boom".to_owned()));
}

#[test]
fn extract_detail_unrecognized_shape_is_none() {
    assert_eq!(extract_detail(&serde_json::json!({"ok": true})), None);
    assert_eq!(extract_detail(&serde_json::json!(null)), None);
}

#[test]
fn message_prefers_server_detail() {
    let err = ApiError::Request {
        status: 409,
        detail: Some("Email already registered".to_owned()),
    };
    assert_eq!(err.message(), "Email already registered");
}

#[test]
fn message_never_empty_for_any_variant() {
    let variants = [
        ApiError::Unauthorized { detail: None },
        ApiError::Forbidden { detail: None },
        ApiError::NotFound { detail: None },
        ApiError::Server { status: 500, detail: None },
        ApiError::Request { status: 422, detail: Some(String::new()) },
        ApiError::Network("refused".to_owned()),
        ApiError::Timeout,
        ApiError::Decode("bad json".to_owned()),
        ApiError::Unavailable,
    ];
    for err in variants {
        assert!(!err.message().is_empty());
    }
}

// =============================================================
// Status classification and the 401 side effect
// =============================================================

#[test]
fn classify_maps_statuses_to_variants() {
    assert!(matches!(
        handle_status("/missions", 403, None),
        ApiError::Forbidden { .. }
    ));
    assert!(matches!(
        handle_status("/missions/9", 404, None),
        ApiError::NotFound { .. }
    ));
    assert!(matches!(
        handle_status("/missions", 503, None),
        ApiError::Server { status: 503, .. }
    ));
    assert!(matches!(
        handle_status("/auth/register", 422, None),
        ApiError::Request { status: 422, .. }
    ));
}

#[test]
fn unauthorized_clears_credentials_and_fires_hook() {
    storage::set(TOKEN_KEY, "abc");
    storage::set(SESSION_KEY, "{}");

    let fired = Rc::new(Cell::new(false));
    let observer = Rc::clone(&fired);
    on_credential_rejected(move || observer.set(true));

    let err = handle_status("/notifications", 401, None);

    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert_eq!(storage::get(TOKEN_KEY), None);
    assert_eq!(storage::get(SESSION_KEY), None);
    assert!(fired.get());
}

#[test]
fn unauthorized_on_login_endpoint_skips_the_hook() {
    storage::set(TOKEN_KEY, "abc");

    let fired = Rc::new(Cell::new(false));
    let observer = Rc::clone(&fired);
    on_credential_rejected(move || observer.set(true));

    let err = handle_status("/auth/login", 401, Some("Incorrect email or password".to_owned()));

    // Credentials are still scrubbed, but no redirect for a failed login.
    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert_eq!(storage::get(TOKEN_KEY), None);
    assert!(!fired.get());
}

#[test]
fn non_401_statuses_do_not_touch_credentials() {
    storage::set(TOKEN_KEY, "abc");
    let _ = handle_status("/missions", 500, None);
    let _ = handle_status("/missions", 403, None);
    assert_eq!(storage::get(TOKEN_KEY), Some("abc".to_owned()));
}
