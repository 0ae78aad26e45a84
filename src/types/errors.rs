use std::path::PathBuf;

use thiserror::Error;

// === ConfigWarning ===

/// Non-fatal problems found while resolving the configuration.
///
/// None of these stop the program: the affected value (or the whole file)
/// falls back to its default and the warning is logged at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigWarning {
    /// The settings file does not exist.
    #[error("{} not found. Using defaults.", .0.display())]
    FileNotFound(PathBuf),
    /// The settings file exists but could not be read.
    #[error("Could not read {}: {reason}. Using defaults.", .path.display())]
    Unreadable { path: PathBuf, reason: String },
    /// The settings file is not valid JSON.
    #[error("Invalid JSON in {}: {reason}. Using defaults.", .path.display())]
    InvalidJson { path: PathBuf, reason: String },
    /// The settings file is valid JSON but its top level is not an object.
    #[error("{} must contain a JSON object. Using defaults.", .0.display())]
    NotAnObject(PathBuf),
    /// A recognized key carries a value of the wrong type or out of range.
    #[error("Invalid value for \"{key}\": {reason}. Using default.")]
    InvalidValue { key: String, reason: String },
    /// The URL given on the command line could not be used.
    #[error("Ignoring --url {url:?}: {reason}")]
    InvalidUrlOverride { url: String, reason: String },
}

// === ColorError ===

/// Errors produced while parsing a colour description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not in any recognized colour syntax.
    #[error("Unrecognized color: {0}")]
    Unrecognized(String),
    /// A channel value could not be parsed or is out of range.
    #[error("Invalid color channel: {0}")]
    InvalidChannel(String),
    /// A functional notation has the wrong number of components.
    #[error("Expected {expected} components, found {found}")]
    ComponentCount { expected: usize, found: usize },
}

// === ShortcutError ===

/// Errors related to keyboard shortcut parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcutError {
    /// The shortcut string is empty.
    #[error("Shortcut cannot be empty")]
    Empty,
    /// A modifier name was not recognized.
    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),
    /// The key name was not recognized.
    #[error("Unknown key: {0}")]
    UnknownKey(String),
}
