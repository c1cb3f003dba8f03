use super::*;

// =============================================================
// Key-value round trips (native in-memory backend)
// =============================================================

#[test]
fn set_then_get_round_trips() {
    set("k", "v");
    assert_eq!(get("k"), Some("v".to_owned()));
}

#[test]
fn get_missing_key_is_none() {
    assert_eq!(get("never-written"), None);
}

#[test]
fn set_overwrites_previous_value() {
    set("k", "first");
    set("k", "second");
    assert_eq!(get("k"), Some("second".to_owned()));
}

#[test]
fn remove_deletes_value() {
    set("k", "v");
    remove("k");
    assert_eq!(get("k"), None);
}

#[test]
fn remove_missing_key_is_noop() {
    remove("absent");
    assert_eq!(get("absent"), None);
}
