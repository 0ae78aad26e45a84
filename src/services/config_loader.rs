// StickyPages Config Loader
// Resolves the window configuration from built-in defaults, the optional
// `config.json` settings file and the command-line URL override.
// Every problem is reported as a warning; loading itself never fails.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use url::Url;

use crate::types::color::Rgba;
use crate::types::config::{
    keys, StickyConfig, DEFAULT_BORDER_WIDTH, DEFAULT_POSITION, MAX_DIMENSION, MAX_SHADOW_EXTENT,
};
use crate::types::errors::{ColorError, ConfigWarning, ShortcutError};
use crate::types::geometry::WindowPosition;
use crate::types::shortcut::Shortcut;

/// Settings file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// URL schemes the sticky window is allowed to load.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "file", "about"];

/// Trait defining the config loader interface.
pub trait ConfigLoaderTrait {
    fn load(&self) -> LoadedConfig;
    fn get_config_path(&self) -> &Path;
}

/// Reads the settings file from disk.
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new ConfigLoader.
    ///
    /// If `path_override` is `Some`, uses that path for the settings file.
    /// Otherwise, uses `config.json` in the working directory.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        Self {
            config_path: path_override.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
        }
    }
}

impl ConfigLoaderTrait for ConfigLoader {
    /// Loads the configuration.
    ///
    /// A missing, unreadable or malformed file yields the defaults plus a
    /// warning describing why the file was not used.
    fn load(&self) -> LoadedConfig {
        let path = self.config_path.as_path();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return LoadedConfig::defaults(ConfigWarning::FileNotFound(path.to_path_buf()));
            }
            Err(e) => {
                return LoadedConfig::defaults(ConfigWarning::Unreadable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };

        parse_document(&content, path)
    }

    fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}

/// The resolved configuration together with everything that fell back to a default.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: StickyConfig,
    pub warnings: Vec<ConfigWarning>,
}

impl LoadedConfig {
    fn defaults(warning: ConfigWarning) -> Self {
        Self {
            config: StickyConfig::default(),
            warnings: vec![warning],
        }
    }

    /// Applies the `--url` flag. It wins over both the file and the default.
    ///
    /// `None` and the empty string mean the flag was not supplied.
    pub fn apply_url_override(&mut self, url: Option<&str>) {
        let Some(raw) = url.filter(|u| !u.is_empty()) else {
            return;
        };
        match normalize_url(raw) {
            Ok(url) => self.config.webpage_url = url,
            Err(reason) => self.warnings.push(ConfigWarning::InvalidUrlOverride {
                url: raw.to_string(),
                reason,
            }),
        }
    }
}

/// Parses the text of a settings file read from `path`.
pub fn parse_document(content: &str, path: &Path) -> LoadedConfig {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => resolve(&map),
        Ok(_) => LoadedConfig::defaults(ConfigWarning::NotAnObject(path.to_path_buf())),
        Err(e) => LoadedConfig::defaults(ConfigWarning::InvalidJson {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

/// Resolves every recognized key of a settings object independently.
pub fn resolve(map: &Map<String, Value>) -> LoadedConfig {
    for key in map.keys().filter(|k| !keys::ALL.contains(&k.as_str())) {
        tracing::debug!(key = %key, "ignoring unrecognized settings key");
    }

    let defaults = StickyConfig::default();
    let mut r = Resolver {
        map,
        warnings: Vec::new(),
    };

    let width = r.value(keys::WIDTH, defaults.width, dimension);
    let height = r.value(keys::HEIGHT, defaults.height, dimension);
    let default_pos = defaults.position.unwrap_or(DEFAULT_POSITION);
    let x_pos = r.value(keys::X_POS, Some(default_pos.x), optional_i32);
    let y_pos = r.value(keys::Y_POS, Some(default_pos.y), optional_i32);
    let position = match (x_pos, y_pos) {
        (Some(x), Some(y)) => Some(WindowPosition { x, y }),
        _ => None,
    };

    let mut border_width = r.value(keys::BORDER_WIDTH, defaults.border_width, non_negative_u32);
    if !border_fits(border_width, width, height) {
        r.warnings.push(ConfigWarning::InvalidValue {
            key: keys::BORDER_WIDTH.to_string(),
            reason: format!(
                "{} leaves no room for content in a {}x{} window",
                border_width, width, height
            ),
        });
        border_width = if border_fits(DEFAULT_BORDER_WIDTH, width, height) {
            DEFAULT_BORDER_WIDTH
        } else {
            0
        };
    }

    let mut shadow = defaults.shadow.clone();
    shadow.blur_radius = r.value(keys::SHADOW_BLUR_RADIUS, shadow.blur_radius, shadow_blur);
    shadow.offset_x = r.value(keys::SHADOW_OFFSET_X, shadow.offset_x, shadow_offset);
    shadow.offset_y = r.value(keys::SHADOW_OFFSET_Y, shadow.offset_y, shadow_offset);
    shadow.color = r.value(keys::SHADOW_COLOR, shadow.color, color);

    let config = StickyConfig {
        width,
        height,
        position,
        webpage_url: r.value(keys::WEBPAGE_URL, defaults.webpage_url, webpage_url),
        corner_radius: r.value(keys::CORNER_RADIUS, defaults.corner_radius, non_negative_u32),
        border_width,
        border_color: r.value(keys::BORDER_COLOR, defaults.border_color, color),
        window_opacity: r.value(keys::WINDOW_OPACITY, defaults.window_opacity, fraction),
        shadow,
        javascript_enabled: r.value(keys::JAVASCRIPT_ENABLED, defaults.javascript_enabled, boolean),
        always_on_top: r.value(keys::ALWAYS_ON_TOP, defaults.always_on_top, boolean),
        close_shortcut: r.value(keys::CLOSE_SHORTCUT, defaults.close_shortcut, shortcut),
    };

    LoadedConfig {
        config,
        warnings: r.warnings,
    }
}

/// Prepares a user-supplied URL for loading.
///
/// A bare host such as `example.com/page` or `localhost:8080` gets an
/// `https://` prefix. Returns the reason when the URL cannot be used.
pub fn normalize_url(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("URL is empty".to_string());
    }

    let candidate = if is_bare_host(trimmed) {
        format!("https://{}", trimmed)
    } else {
        trimmed.to_string()
    };

    let parsed = Url::parse(&candidate).map_err(|e| e.to_string())?;
    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(format!("unsupported scheme '{}'", parsed.scheme()));
    }
    if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(candidate)
}

/// `host[:port][/path]` without a scheme, where the host has a dot or is `localhost`.
fn is_bare_host(s: &str) -> bool {
    if s.contains("://") || s.starts_with("file:") || s.starts_with("about:") {
        return false;
    }
    let authority = s.split(['/', '?', '#']).next().unwrap_or_default();
    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };
    let port_ok = port.map_or(true, |p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));
    let host_ok = !host.is_empty()
        && !host.contains(['@', ' '])
        && (host.contains('.') || host.eq_ignore_ascii_case("localhost"));
    port_ok && host_ok && !s.contains(' ')
}

fn border_fits(border: u32, width: u32, height: u32) -> bool {
    u64::from(border) * 2 < u64::from(width.min(height))
}

struct Resolver<'a> {
    map: &'a Map<String, Value>,
    warnings: Vec<ConfigWarning>,
}

impl Resolver<'_> {
    /// Returns the parsed value for `key`, or `default` when it is absent or rejected.
    fn value<T>(&mut self, key: &str, default: T, parse: fn(&Value) -> Result<T, String>) -> T {
        let Some(raw) = self.map.get(key) else {
            return default;
        };
        match parse(raw) {
            Ok(value) => value,
            Err(reason) => {
                self.warnings.push(ConfigWarning::InvalidValue {
                    key: key.to_string(),
                    reason,
                });
                default
            }
        }
    }
}

fn dimension(v: &Value) -> Result<u32, String> {
    match v.as_u64() {
        Some(n) if (1..=u64::from(MAX_DIMENSION)).contains(&n) => Ok(n as u32),
        _ => Err(format!("expected an integer from 1 to {}, found {}", MAX_DIMENSION, v)),
    }
}

fn non_negative_u32(v: &Value) -> Result<u32, String> {
    v.as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| format!("expected a non-negative integer, found {}", v))
}

fn shadow_blur(v: &Value) -> Result<u32, String> {
    match v.as_u64() {
        Some(n) if n <= u64::from(MAX_SHADOW_EXTENT) => Ok(n as u32),
        _ => Err(format!("expected an integer from 0 to {}, found {}", MAX_SHADOW_EXTENT, v)),
    }
}

fn shadow_offset(v: &Value) -> Result<i32, String> {
    match v.as_i64() {
        Some(n) if n.unsigned_abs() <= u64::from(MAX_SHADOW_EXTENT) => Ok(n as i32),
        _ => Err(format!(
            "expected an integer from -{0} to {0}, found {1}",
            MAX_SHADOW_EXTENT, v
        )),
    }
}

fn integer_i32(v: &Value) -> Result<i32, String> {
    v.as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| format!("expected an integer, found {}", v))
}

fn optional_i32(v: &Value) -> Result<Option<i32>, String> {
    if v.is_null() {
        return Ok(None);
    }
    integer_i32(v).map(Some)
}

fn fraction(v: &Value) -> Result<f64, String> {
    match v.as_f64() {
        Some(n) if (0.0..=1.0).contains(&n) => Ok(n),
        _ => Err(format!("expected a number between 0 and 1, found {}", v)),
    }
}

fn boolean(v: &Value) -> Result<bool, String> {
    v.as_bool()
        .ok_or_else(|| format!("expected true or false, found {}", v))
}

fn color(v: &Value) -> Result<Rgba, String> {
    let s = v
        .as_str()
        .ok_or_else(|| format!("expected a color string, found {}", v))?;
    s.parse().map_err(|e: ColorError| e.to_string())
}

fn shortcut(v: &Value) -> Result<Shortcut, String> {
    let s = v
        .as_str()
        .ok_or_else(|| format!("expected a shortcut string, found {}", v))?;
    s.parse().map_err(|e: ShortcutError| e.to_string())
}

fn webpage_url(v: &Value) -> Result<String, String> {
    let s = v
        .as_str()
        .ok_or_else(|| format!("expected a URL string, found {}", v))?;
    normalize_url(s)
}
