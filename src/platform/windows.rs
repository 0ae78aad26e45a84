// StickyPages native window handling for Windows
// The window is a frameless, transparent tool window; a backdrop webview
// paints the card and border, and the page clip script rounds the content.
// Native shape and opacity are not applied here.

use tao::platform::windows::WindowBuilderExtWindows;
use tao::window::{Window, WindowBuilder};

use super::WindowDecoration;

pub fn configure_window(builder: WindowBuilder) -> WindowBuilder {
    builder.with_skip_taskbar(true)
}

pub fn prepare_frame(_window: &Window, decoration: &WindowDecoration) {
    if decoration.opacity < 1.0 {
        tracing::debug!(opacity = decoration.opacity, "window opacity is not supported on Windows");
    }
}

pub fn apply_shape(_window: &Window, decoration: &WindowDecoration) {
    if decoration.shape.is_some() || decoration.content_shape.is_some() {
        tracing::debug!("native shapes are not supported on Windows; corners come from the backdrop and page clip");
    }
}
