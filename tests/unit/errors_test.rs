use std::path::PathBuf;

use stickypages::types::errors::*;

// === ConfigWarning Tests ===

#[test]
fn config_warning_file_not_found_display() {
    let w = ConfigWarning::FileNotFound(PathBuf::from("config.json"));
    assert_eq!(w.to_string(), "config.json not found. Using defaults.");
}

#[test]
fn config_warning_invalid_json_display() {
    let w = ConfigWarning::InvalidJson {
        path: PathBuf::from("config.json"),
        reason: "EOF while parsing an object at line 1 column 1".to_string(),
    };
    assert_eq!(
        w.to_string(),
        "Invalid JSON in config.json: EOF while parsing an object at line 1 column 1. Using defaults."
    );
}

#[test]
fn config_warning_invalid_value_display() {
    let w = ConfigWarning::InvalidValue {
        key: "width".to_string(),
        reason: "expected a positive integer, found 0".to_string(),
    };
    assert_eq!(
        w.to_string(),
        "Invalid value for \"width\": expected a positive integer, found 0. Using default."
    );
}

#[test]
fn config_warning_url_override_display() {
    let w = ConfigWarning::InvalidUrlOverride {
        url: "ftp://x".to_string(),
        reason: "unsupported scheme 'ftp'".to_string(),
    };
    assert_eq!(w.to_string(), "Ignoring --url \"ftp://x\": unsupported scheme 'ftp'");
}

#[test]
fn config_warning_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(ConfigWarning::NotAnObject(PathBuf::from("c.json")));
    assert!(err.source().is_none());
    assert_eq!(err.to_string(), "c.json must contain a JSON object. Using defaults.");
}

// === ColorError Tests ===

#[test]
fn color_error_display_variants() {
    assert_eq!(
        ColorError::Unrecognized("mauve-ish".to_string()).to_string(),
        "Unrecognized color: mauve-ish"
    );
    assert_eq!(
        ColorError::InvalidChannel("300".to_string()).to_string(),
        "Invalid color channel: 300"
    );
    assert_eq!(
        ColorError::ComponentCount {
            expected: 4,
            found: 2
        }
        .to_string(),
        "Expected 4 components, found 2"
    );
}

// === ShortcutError Tests ===

#[test]
fn shortcut_error_display_variants() {
    assert_eq!(ShortcutError::Empty.to_string(), "Shortcut cannot be empty");
    assert_eq!(
        ShortcutError::UnknownModifier("Hyper".to_string()).to_string(),
        "Unknown modifier: Hyper"
    );
    assert_eq!(ShortcutError::UnknownKey("F99".to_string()).to_string(), "Unknown key: F99");
}
