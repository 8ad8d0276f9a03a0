use crate::*;
use crate::config::{ENV_HOST, ENV_MAX_BODY_BYTES, ENV_PORT, ENV_STATIC_DIR};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::Duration;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// ========== Handle ==========

#[test]
fn test_handle_canonical_form() {
    let h = Handle::generate();
    let s = h.as_str();
    assert_eq!(s.len(), 36);
    let groups: Vec<&str> = s.split('-').collect();
    assert_eq!(groups.iter().map(|g| g.len()).collect::<Vec<_>>(), vec![8, 4, 4, 4, 12]);
    assert!(s.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
    assert_eq!(s, s.to_lowercase());
}

#[test]
fn test_handle_is_v4() {
    let h = Handle::generate();
    assert_eq!(h.as_str().as_bytes()[14], b'4');
}

#[test]
fn test_handle_unique() {
    let handles: HashSet<Handle> = (0..10_000).map(|_| Handle::generate()).collect();
    assert_eq!(handles.len(), 10_000);
}

#[test]
fn test_handle_serializes_as_string() {
    let h = Handle::generate();
    let json = serde_json::to_string(&h).unwrap();
    assert_eq!(json, format!("\"{}\"", h));
}

#[test]
fn test_handle_display_matches_str() {
    let h = Handle::generate();
    assert_eq!(h.to_string(), h.as_str());
    assert_eq!(String::from(h.clone()), h.into_string());
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let config = EditorConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.bind_addr(), "0.0.0.0:8080");
    assert_eq!(config.server.static_dir, PathBuf::from("static"));
    assert_eq!(config.store.retention(), Duration::from_secs(3600));
}

#[test]
fn test_config_overrides() {
    let config = EditorConfig::from_lookup(lookup_from(&[
        (ENV_HOST, "127.0.0.1"),
        (ENV_PORT, "9000"),
        (ENV_MAX_BODY_BYTES, "1024"),
        (ENV_STATIC_DIR, "/srv/editor"),
    ]))
    .unwrap();
    assert_eq!(config.server.bind_addr(), "127.0.0.1:9000");
    assert_eq!(config.server.max_body_bytes, 1024);
    assert_eq!(config.server.static_dir, PathBuf::from("/srv/editor"));
}

#[test]
fn test_config_empty_values_keep_defaults() {
    let config = EditorConfig::from_lookup(lookup_from(&[(ENV_HOST, ""), (ENV_PORT, "  ")])).unwrap();
    assert_eq!(config.server.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn test_config_invalid_port() {
    let err = EditorConfig::from_lookup(lookup_from(&[(ENV_PORT, "eighty")])).unwrap_err();
    assert!(matches!(err, ScError::Config(_)));
    assert!(err.to_string().contains(ENV_PORT));
}

#[test]
fn test_config_port_out_of_range() {
    let err = EditorConfig::from_lookup(lookup_from(&[(ENV_PORT, "70000")])).unwrap_err();
    assert!(matches!(err, ScError::Config(_)));
}

#[test]
fn test_config_invalid_body_limit() {
    let err = EditorConfig::from_lookup(lookup_from(&[(ENV_MAX_BODY_BYTES, "-1")])).unwrap_err();
    assert!(matches!(err, ScError::Config(_)));
}

// ========== Errors ==========

#[test]
fn test_error_client_classification() {
    assert!(ScError::decode("bad").is_client_error());
    assert!(ScError::not_found("abc").is_client_error());
    assert!(!ScError::encode("fault").is_client_error());
    assert!(!ScError::Config("x".into()).is_client_error());
}

#[test]
fn test_error_messages() {
    assert_eq!(ScError::not_found("abc").to_string(), "File not found or expired: abc");
    assert!(ScError::decode("not base64").to_string().contains("not base64"));
}
