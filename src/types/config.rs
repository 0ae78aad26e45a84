use serde::Serialize;

use super::color::Rgba;
use super::geometry::WindowPosition;
use super::shortcut::Shortcut;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_POSITION: WindowPosition = WindowPosition { x: 50, y: 50 };
pub const DEFAULT_URL: &str = "https://www.google.com";
pub const DEFAULT_CORNER_RADIUS: u32 = 10;
pub const DEFAULT_BORDER_WIDTH: u32 = 8;
pub const DEFAULT_BORDER_COLOR: Rgba = Rgba::new(255, 255, 255, 128);
pub const DEFAULT_WINDOW_OPACITY: f64 = 1.0;
pub const DEFAULT_SHADOW_COLOR: Rgba = Rgba::new(0, 0, 0, 102);

/// Largest accepted `width` / `height`.
pub const MAX_DIMENSION: u32 = 16_384;
/// Largest accepted shadow blur radius and absolute shadow offset.
pub const MAX_SHADOW_EXTENT: u32 = 1_024;

/// Settings-file keys recognized by the loader.
pub mod keys {
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const X_POS: &str = "xPos";
    pub const Y_POS: &str = "yPos";
    pub const WEBPAGE_URL: &str = "webpageUrl";
    pub const CORNER_RADIUS: &str = "cornerRadius";
    pub const BORDER_WIDTH: &str = "borderWidth";
    pub const BORDER_COLOR: &str = "borderColor";
    pub const WINDOW_OPACITY: &str = "windowOpacity";
    pub const SHADOW_BLUR_RADIUS: &str = "shadowBlurRadius";
    pub const SHADOW_OFFSET_X: &str = "shadowOffsetX";
    pub const SHADOW_OFFSET_Y: &str = "shadowOffsetY";
    pub const SHADOW_COLOR: &str = "shadowColor";
    pub const JAVASCRIPT_ENABLED: &str = "javascriptEnabled";
    pub const ALWAYS_ON_TOP: &str = "alwaysOnTop";
    pub const CLOSE_SHORTCUT: &str = "closeShortcut";

    pub const ALL: &[&str] = &[
        WIDTH,
        HEIGHT,
        X_POS,
        Y_POS,
        WEBPAGE_URL,
        CORNER_RADIUS,
        BORDER_WIDTH,
        BORDER_COLOR,
        WINDOW_OPACITY,
        SHADOW_BLUR_RADIUS,
        SHADOW_OFFSET_X,
        SHADOW_OFFSET_Y,
        SHADOW_COLOR,
        JAVASCRIPT_ENABLED,
        ALWAYS_ON_TOP,
        CLOSE_SHORTCUT,
    ];
}

/// Everything needed to build the sticky window.
///
/// Built once from defaults, overridden by the settings file and the
/// command line, then consumed to build the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StickyConfig {
    pub width: u32,
    pub height: u32,
    /// `None` centers the window on the primary screen.
    #[serde(skip)]
    pub position: Option<WindowPosition>,
    pub webpage_url: String,
    pub corner_radius: u32,
    pub border_width: u32,
    pub border_color: Rgba,
    pub window_opacity: f64,
    #[serde(flatten)]
    pub shadow: ShadowConfig,
    pub javascript_enabled: bool,
    pub always_on_top: bool,
    pub close_shortcut: Shortcut,
}

impl StickyConfig {
    /// Horizontal position as written to the settings file.
    pub fn x_pos(&self) -> Option<i32> {
        self.position.map(|p| p.x)
    }

    /// Vertical position as written to the settings file.
    pub fn y_pos(&self) -> Option<i32> {
        self.position.map(|p| p.y)
    }

    /// Serializes the effective configuration using the settings-file keys.
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or(serde_json::Value::Null);
        if let serde_json::Value::Object(map) = &mut value {
            map.insert(keys::X_POS.into(), self.x_pos().into());
            map.insert(keys::Y_POS.into(), self.y_pos().into());
        }
        value
    }
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            position: Some(DEFAULT_POSITION),
            webpage_url: DEFAULT_URL.to_string(),
            corner_radius: DEFAULT_CORNER_RADIUS,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: DEFAULT_BORDER_COLOR,
            window_opacity: DEFAULT_WINDOW_OPACITY,
            shadow: ShadowConfig::default(),
            javascript_enabled: true,
            always_on_top: false,
            close_shortcut: Shortcut::alt_f4(),
        }
    }
}

/// Drop shadow painted around the card. A blur radius of zero disables it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadowConfig {
    #[serde(rename = "shadowBlurRadius")]
    pub blur_radius: u32,
    #[serde(rename = "shadowOffsetX")]
    pub offset_x: i32,
    #[serde(rename = "shadowOffsetY")]
    pub offset_y: i32,
    #[serde(rename = "shadowColor")]
    pub color: Rgba,
}

impl ShadowConfig {
    pub fn is_enabled(&self) -> bool {
        self.blur_radius > 0
    }

    /// Space the shadow needs around the card on every side.
    pub fn margin(&self) -> u32 {
        if !self.is_enabled() {
            return 0;
        }
        self.blur_radius
            .saturating_add(self.offset_x.unsigned_abs().max(self.offset_y.unsigned_abs()))
    }
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            blur_radius: 0,
            offset_x: 0,
            offset_y: 4,
            color: DEFAULT_SHADOW_COLOR,
        }
    }
}
