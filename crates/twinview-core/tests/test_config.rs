use std::time::Duration;

use twinview_core::config::{GestureConfig, LoadingConfig, ViewerConfig, WindowConfig};
use twinview_core::error::ViewerError;
use twinview_core::load::FailurePolicy;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_gesture_defaults() {
    let g = GestureConfig::default();
    assert_eq!(g.double_click(), Duration::from_millis(300));
    assert_eq!(g.scroll_debounce(), Duration::from_millis(50));
}

#[test]
fn test_loading_defaults() {
    let l = LoadingConfig::default();
    assert_eq!(l.extensions, vec!["jpg", "jpeg", "png", "gif", "bmp", "webp"]);
    assert_eq!(l.failure_policy, FailurePolicy::ClearAndNotify);
}

#[test]
fn test_failure_policy_display() {
    assert_eq!(format!("{}", FailurePolicy::ClearAndNotify), "Clear and notify");
    assert_eq!(format!("{}", FailurePolicy::KeepPrevious), "Keep previous");
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_empty_toml_is_default() {
    let config = ViewerConfig::from_toml_str("").unwrap();
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let config = ViewerConfig::from_toml_str(
        r#"
        [gesture]
        scroll_debounce_ms = 80

        [loading]
        failure_policy = "KeepPrevious"
        "#,
    )
    .unwrap();
    assert_eq!(config.gesture.double_click_ms, 300);
    assert_eq!(config.gesture.scroll_debounce_ms, 80);
    assert_eq!(config.loading.failure_policy, FailurePolicy::KeepPrevious);
    assert_eq!(config.loading.extensions, LoadingConfig::default().extensions);
    assert_eq!(config.windows, WindowConfig::default());
}

#[test]
fn test_toml_roundtrip() {
    let mut config = ViewerConfig::default();
    config.loading.extensions = vec!["png".into(), "webp".into()];
    config.windows.viewer_size = [640.0, 480.0];
    let text = config.to_toml_string().unwrap();
    let back = ViewerConfig::from_toml_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = ViewerConfig::from_toml_str("[gesture]\ndouble_click_ms = \"soon\"").unwrap_err();
    assert!(matches!(err, ViewerError::Config(_)));
}

#[test]
fn test_unknown_policy_rejected() {
    let err = ViewerConfig::from_toml_str("[loading]\nfailure_policy = \"Shrug\"").unwrap_err();
    assert!(matches!(err, ViewerError::Config(_)));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("twinview.toml");
    std::fs::write(&path, "[windows]\ncontrol_size = [400.0, 300.0]\n").unwrap();
    let config = ViewerConfig::load(&path).unwrap();
    assert_eq!(config.windows.control_size, [400.0, 300.0]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ViewerConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ViewerError::Io(_)));
}
