//! Integration-level tests for the ConfigLoader public API.
//!
//! These tests exercise the loader through its public trait interface against
//! real files on disk: missing files, malformed JSON, per-key fallback and the
//! command-line URL override.

use std::fs;

use rstest::rstest;
use serde_json::json;
use stickypages::services::config_loader::{
    parse_document, ConfigLoader, ConfigLoaderTrait, LoadedConfig, DEFAULT_CONFIG_FILE,
};
use stickypages::services::layout::WindowLayout;
use stickypages::types::color::Rgba;
use stickypages::types::config::StickyConfig;
use stickypages::types::errors::ConfigWarning;
use stickypages::types::geometry::{Rect, WindowPosition};
use tempfile::TempDir;

/// Helper: write `content` to `config.json` inside `dir` and load it.
fn load_from(dir: &TempDir, content: &str) -> LoadedConfig {
    let path = dir.path().join("config.json");
    fs::write(&path, content).unwrap();
    ConfigLoader::new(Some(path)).load()
}

#[test]
fn test_missing_file_warns_and_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let loaded = ConfigLoader::new(Some(path.clone())).load();

    assert_eq!(loaded.config, StickyConfig::default());
    assert_eq!(loaded.warnings, vec![ConfigWarning::FileNotFound(path)]);
}

#[test]
fn test_invalid_json_warns_and_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = load_from(&dir, "{ \"width\": 300, ");

    assert_eq!(loaded.config, StickyConfig::default());
    assert_eq!(loaded.warnings.len(), 1);
    assert!(matches!(loaded.warnings[0], ConfigWarning::InvalidJson { .. }));
    assert!(loaded.warnings[0].to_string().starts_with("Invalid JSON in "));
}

#[test]
fn test_top_level_array_is_rejected() {
    let dir = TempDir::new().unwrap();
    let loaded = load_from(&dir, "[1, 2, 3]");

    assert_eq!(loaded.config, StickyConfig::default());
    assert!(matches!(loaded.warnings[0], ConfigWarning::NotAnObject(_)));
}

#[test]
fn test_full_file_is_applied() {
    let dir = TempDir::new().unwrap();
    let content = json!({
        "width": 420,
        "height": 320,
        "xPos": 1200,
        "yPos": 40,
        "webpageUrl": "https://news.ycombinator.com",
        "cornerRadius": 16,
        "borderWidth": 4,
        "borderColor": "rgba(0, 0, 0, 0.6)",
        "windowOpacity": 0.9,
        "shadowBlurRadius": 12,
        "shadowOffsetX": 1,
        "shadowOffsetY": 3,
        "shadowColor": "#00000066",
        "javascriptEnabled": false,
        "alwaysOnTop": true,
        "closeShortcut": "Ctrl+W"
    });
    let loaded = load_from(&dir, &content.to_string());
    let c = &loaded.config;

    assert!(loaded.warnings.is_empty(), "{:?}", loaded.warnings);
    assert_eq!((c.width, c.height), (420, 320));
    assert_eq!(c.position, Some(WindowPosition { x: 1200, y: 40 }));
    assert_eq!(c.webpage_url, "https://news.ycombinator.com");
    assert_eq!(c.corner_radius, 16);
    assert_eq!(c.border_width, 4);
    assert_eq!(c.border_color, Rgba::new(0, 0, 0, 153));
    assert_eq!(c.window_opacity, 0.9);
    assert_eq!(c.shadow.blur_radius, 12);
    assert_eq!((c.shadow.offset_x, c.shadow.offset_y), (1, 3));
    assert_eq!(c.shadow.color, Rgba::new(0, 0, 0, 0x66));
    assert!(!c.javascript_enabled);
    assert!(c.always_on_top);
    assert_eq!(c.close_shortcut.to_string(), "Ctrl+W");
}

#[test]
fn test_unrecognized_keys_are_ignored() {
    let dir = TempDir::new().unwrap();
    let loaded = load_from(&dir, r#"{ "theme": "dark", "width": 640 }"#);

    assert!(loaded.warnings.is_empty());
    assert_eq!(loaded.config.width, 640);
}

/// Every recognized key rejects a wrong-typed or out-of-range value on its
/// own, leaving the rest of the file in effect.
#[rstest]
#[case("width", json!(0))]
#[case("width", json!(-5))]
#[case("width", json!(12.5))]
#[case("height", json!("600"))]
#[case("xPos", json!("left"))]
#[case("yPos", json!(1.5))]
#[case("webpageUrl", json!(42))]
#[case("webpageUrl", json!("ftp://files.example.com"))]
#[case("cornerRadius", json!(-1))]
#[case("borderWidth", json!(true))]
#[case("borderColor", json!("rgba(300, 0, 0, 1)"))]
#[case("windowOpacity", json!(1.5))]
#[case("windowOpacity", json!("opaque"))]
#[case("width", json!(3000000000u64))]
#[case("width", json!(16385))]
#[case("height", json!(4294967296u64))]
#[case("shadowBlurRadius", json!(-3))]
#[case("shadowBlurRadius", json!(4294967295u64))]
#[case("shadowBlurRadius", json!(1025))]
#[case("shadowOffsetX", json!(-2147483648i64))]
#[case("shadowOffsetY", json!(5000))]
#[case("shadowColor", json!(7))]
#[case("javascriptEnabled", json!("yes"))]
#[case("alwaysOnTop", json!(1))]
#[case("closeShortcut", json!("Hyper+Q"))]
fn test_invalid_value_falls_back_to_default(#[case] key: &str, #[case] value: serde_json::Value) {
    let mut doc = serde_json::Map::new();
    doc.insert("height".to_string(), json!(480));
    doc.insert(key.to_string(), value);

    let loaded = parse_document(&serde_json::Value::Object(doc).to_string(), "config.json".as_ref());
    let defaults = StickyConfig::default();

    assert_eq!(loaded.warnings.len(), 1, "{:?}", loaded.warnings);
    match &loaded.warnings[0] {
        ConfigWarning::InvalidValue { key: k, .. } => assert_eq!(k, key),
        other => panic!("unexpected warning: {:?}", other),
    }

    let expected = StickyConfig {
        height: if key == "height" { defaults.height } else { 480 },
        ..defaults
    };
    assert_eq!(loaded.config, expected);
}

#[test]
fn test_largest_accepted_values_lay_out_without_overflow() {
    let content = json!({
        "width": 16384,
        "height": 16384,
        "xPos": -2147483648i64,
        "yPos": 2147483647,
        "shadowBlurRadius": 1024,
        "shadowOffsetX": -1024,
        "shadowOffsetY": 1024
    });
    let loaded = parse_document(&content.to_string(), DEFAULT_CONFIG_FILE.as_ref());
    assert!(loaded.warnings.is_empty(), "{:?}", loaded.warnings);

    let layout = WindowLayout::compute(&loaded.config, None);
    assert_eq!(layout.shadow_margin, 2048);
    assert_eq!(layout.frame.width, 16384 + 4096);
    assert_eq!(layout.frame.x, i32::MIN);
    assert_eq!(layout.card, Rect::new(2048, 2048, 16384, 16384));
    assert!(layout.card.right() > layout.card.x);
}

#[test]
fn test_absent_keys_take_documented_defaults() {
    let loaded = parse_document("{}", DEFAULT_CONFIG_FILE.as_ref());
    let c = loaded.config;

    assert_eq!(c.width, 800);
    assert_eq!(c.height, 600);
    assert_eq!(c.x_pos(), Some(50));
    assert_eq!(c.y_pos(), Some(50));
    assert_eq!(c.webpage_url, "https://www.google.com");
    assert_eq!(c.corner_radius, 10);
    assert_eq!(c.border_width, 8);
    assert_eq!(c.border_color, Rgba::new(255, 255, 255, 128));
    assert_eq!(c.window_opacity, 1.0);
}

#[test]
fn test_url_override_beats_file_and_default() {
    let dir = TempDir::new().unwrap();
    let mut loaded = load_from(&dir, r#"{ "webpageUrl": "https://from-file.example" }"#);
    loaded.apply_url_override(Some("https://from-cli.example/page"));
    assert_eq!(loaded.config.webpage_url, "https://from-cli.example/page");

    let mut defaults = parse_document("{}", DEFAULT_CONFIG_FILE.as_ref());
    defaults.apply_url_override(Some("docs.rs"));
    assert_eq!(defaults.config.webpage_url, "https://docs.rs");

    defaults.apply_url_override(Some("localhost:3000/board"));
    assert_eq!(defaults.config.webpage_url, "https://localhost:3000/board");
    assert!(defaults.warnings.is_empty());
}

#[test]
fn test_url_override_applies_even_when_file_is_broken() {
    let dir = TempDir::new().unwrap();
    let mut loaded = load_from(&dir, "not json");
    loaded.apply_url_override(Some("https://rescued.example"));

    assert_eq!(loaded.config.webpage_url, "https://rescued.example");
    assert_eq!(loaded.warnings.len(), 1);
}

#[test]
fn test_invalid_url_override_keeps_file_url() {
    let dir = TempDir::new().unwrap();
    let mut loaded = load_from(&dir, r#"{ "webpageUrl": "https://from-file.example" }"#);
    loaded.apply_url_override(Some("mailto:someone@example.com"));

    assert_eq!(loaded.config.webpage_url, "https://from-file.example");
    assert!(matches!(
        loaded.warnings.as_slice(),
        [ConfigWarning::InvalidUrlOverride { .. }]
    ));
}

#[test]
fn test_default_path_is_config_json() {
    let loader = ConfigLoader::new(None);
    assert_eq!(loader.get_config_path(), std::path::Path::new("config.json"));
}
