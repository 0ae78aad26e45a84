//! StickyPages UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering inside a `tao` window:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView

pub mod sticky_window;
