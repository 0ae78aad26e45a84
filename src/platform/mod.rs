// StickyPages platform abstraction
// Applies the window shape, opacity and frame styling with whatever the
// native toolkit offers on Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use crate::services::layout::WindowLayout;
use crate::services::rounded_mask::RoundedMask;
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::config::StickyConfig;
use crate::types::geometry::Rect;

#[cfg(all(feature = "gui", target_os = "linux"))]
mod linux;

#[cfg(all(feature = "gui", target_os = "macos"))]
mod macos;

#[cfg(all(feature = "gui", target_os = "windows"))]
mod windows;

/// Everything the native layer applies to the window, independent of the toolkit.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDecoration {
    /// Bands of the window shape in window coordinates; `None` leaves the
    /// window rectangular.
    pub shape: Option<Vec<Rect>>,
    /// Bands of the webview's own shape in webview coordinates; `None` when
    /// the content corners are square.
    pub content_shape: Option<Vec<Rect>>,
    pub opacity: f64,
    /// Inset of the webview inside the card.
    pub border_width: u32,
    /// Space between the window edge and the card.
    pub card_margin: u32,
    pub frame_css: String,
    /// Page painting the card where no styled native container exists.
    pub backdrop_html: String,
}

impl WindowDecoration {
    pub fn new(config: &StickyConfig, layout: &WindowLayout) -> Self {
        let content = layout.content_mask;
        let content_shape = (content.effective_radius() > 0).then(|| {
            let bounds = content.bounds();
            RoundedMask::new(bounds.width, bounds.height, content.radius()).region()
        });
        let theme = ThemeEngine::new(config, layout);

        Self {
            shape: layout.window_mask.map(|mask| mask.region()),
            content_shape,
            opacity: config.window_opacity,
            border_width: config.border_width,
            card_margin: layout.shadow_margin,
            frame_css: theme.frame_css(),
            backdrop_html: theme.backdrop_html(),
        }
    }
}

/// Whether this platform clips the native window to the rounded shape.
pub fn supports_native_shape() -> bool {
    cfg!(target_os = "linux")
}

/// Adds platform-only window attributes (tool window, no taskbar entry).
#[cfg(feature = "gui")]
pub fn configure_window(builder: tao::window::WindowBuilder) -> tao::window::WindowBuilder {
    #[cfg(target_os = "linux")]
    {
        linux::configure_window(builder)
    }
    #[cfg(target_os = "macos")]
    {
        macos::configure_window(builder)
    }
    #[cfg(target_os = "windows")]
    {
        windows::configure_window(builder)
    }
}

/// Styles the frame once, before the webview is attached.
#[cfg(feature = "gui")]
pub fn prepare_frame(window: &tao::window::Window, decoration: &WindowDecoration) {
    #[cfg(target_os = "linux")]
    {
        linux::prepare_frame(window, decoration)
    }
    #[cfg(target_os = "macos")]
    {
        macos::prepare_frame(window, decoration)
    }
    #[cfg(target_os = "windows")]
    {
        windows::prepare_frame(window, decoration)
    }
}

/// Clips painting and input to the window shape. Safe to call repeatedly.
#[cfg(feature = "gui")]
pub fn apply_shape(window: &tao::window::Window, decoration: &WindowDecoration) {
    #[cfg(target_os = "linux")]
    {
        linux::apply_shape(window, decoration)
    }
    #[cfg(target_os = "macos")]
    {
        macos::apply_shape(window, decoration)
    }
    #[cfg(target_os = "windows")]
    {
        windows::apply_shape(window, decoration)
    }
}
