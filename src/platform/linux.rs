// StickyPages native window handling for Linux (GTK)
// Shape:   gtk_widget_shape_combine_region + input shape, on the window
//          and on the webview widget inside the card
// Opacity: widget opacity
// Border:  container border width + card stylesheet

use gtk::cairo::{RectangleInt, Region};
use gtk::prelude::*;
use tao::platform::unix::{WindowBuilderExtUnix, WindowExtUnix};
use tao::window::{Window, WindowBuilder};

use super::WindowDecoration;
use crate::services::theme_engine::CARD_CLASS;
use crate::types::geometry::Rect;

pub fn configure_window(builder: WindowBuilder) -> WindowBuilder {
    builder.with_skip_taskbar(true)
}

pub fn prepare_frame(window: &Window, decoration: &WindowDecoration) {
    let gtk_window = window.gtk_window();
    gtk_window.set_opacity(decoration.opacity);
    add_stylesheet(gtk_window, &decoration.frame_css);

    match window.default_vbox() {
        Some(vbox) => {
            vbox.set_border_width(decoration.border_width);
            let margin = decoration.card_margin as i32;
            vbox.set_margin_top(margin);
            vbox.set_margin_bottom(margin);
            vbox.set_margin_start(margin);
            vbox.set_margin_end(margin);
            vbox.style_context().add_class(CARD_CLASS);
            add_stylesheet(vbox, &decoration.frame_css);
        }
        None => tracing::warn!("window has no GTK container; border is not drawn"),
    }
}

pub fn apply_shape(window: &Window, decoration: &WindowDecoration) {
    let gtk_window = window.gtk_window();
    let region = decoration.shape.as_deref().map(to_region);
    gtk_window.shape_combine_region(region.as_ref());
    gtk_window.input_shape_combine_region(region.as_ref());
    if let Some(bands) = &decoration.shape {
        tracing::debug!(bands = bands.len(), "applied window shape");
    }

    let Some(vbox) = window.default_vbox() else {
        return;
    };
    let content = decoration.content_shape.as_deref().map(to_region);
    for child in vbox.children().iter().filter(|c| c.has_window() && c.is_realized()) {
        child.shape_combine_region(content.as_ref());
        child.input_shape_combine_region(content.as_ref());
    }
}

fn to_region(bands: &[Rect]) -> Region {
    let rects: Vec<RectangleInt> = bands
        .iter()
        .map(|b| RectangleInt::new(b.x, b.y, b.width as i32, b.height as i32))
        .collect();
    Region::create_rectangles(&rects)
}

fn add_stylesheet(widget: &impl IsA<gtk::Widget>, css: &str) {
    let provider = gtk::CssProvider::new();
    if let Err(e) = provider.load_from_data(css.as_bytes()) {
        tracing::warn!("frame stylesheet rejected: {}", e);
        return;
    }
    widget
        .style_context()
        .add_provider(&provider, gtk::STYLE_PROVIDER_PRIORITY_APPLICATION);
}
