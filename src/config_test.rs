#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_shipped_page() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.lookahead_px, 180.0);
    assert_eq!(cfg.scrolled_threshold_px, 8.0);
    assert_eq!(cfg.reveal_threshold, 0.14);
    assert_eq!(cfg.reveal_bottom_margin_pct, 8.0);
    assert_eq!(cfg.min_message_chars, 10);
    assert_eq!(cfg.theme_storage_key, "theme");
    assert!(!cfg.debug);
}

#[test]
fn from_json_none_or_blank_yields_defaults() {
    assert_eq!(PageConfig::from_json(None), Ok(PageConfig::default()));
    assert_eq!(PageConfig::from_json(Some("   ")), Ok(PageConfig::default()));
}

#[test]
fn from_json_overrides_subset() {
    let cfg = PageConfig::from_json(Some(r#"{ "lookahead_px": 96, "debug": true }"#)).unwrap();
    assert_eq!(cfg.lookahead_px, 96.0);
    assert!(cfg.debug);
    assert_eq!(cfg.scrolled_threshold_px, 8.0);
    assert_eq!(cfg.theme_storage_key, "theme");
}

#[test]
fn from_json_rejects_malformed_json() {
    assert!(matches!(PageConfig::from_json(Some("{ lookahead")), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_unknown_keys() {
    assert!(matches!(PageConfig::from_json(Some(r#"{ "lookahed_px": 10 }"#)), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_threshold_out_of_range() {
    let err = PageConfig::from_json(Some(r#"{ "reveal_threshold": 1.5 }"#)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "reveal_threshold", .. }));
}

#[test]
fn from_json_rejects_negative_lookahead() {
    let err = PageConfig::from_json(Some(r#"{ "lookahead_px": -1 }"#)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "lookahead_px", .. }));
}

#[test]
fn from_json_rejects_blank_storage_key() {
    let err = PageConfig::from_json(Some(r#"{ "theme_storage_key": " " }"#)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "theme_storage_key", .. }));
}

#[test]
fn reveal_root_margin_shrinks_bottom_edge() {
    assert_eq!(PageConfig::default().reveal_root_margin(), "0px 0px -8% 0px");
    let cfg = PageConfig { reveal_bottom_margin_pct: 12.5, ..PageConfig::default() };
    assert_eq!(cfg.reveal_root_margin(), "0px 0px -12.5% 0px");
}

#[test]
fn config_error_display() {
    let err = ConfigError::Invalid { field: "lookahead_px", reason: "bad".to_owned() };
    assert_eq!(err.to_string(), "invalid config value for lookahead_px: bad");
}
