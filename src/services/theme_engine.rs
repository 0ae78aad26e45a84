//! Theme Engine — turns the configured border, radius and shadow into the
//! stylesheet of the native frame and the clip script injected into the page.

use std::collections::HashMap;

use crate::services::layout::WindowLayout;
use crate::types::config::StickyConfig;
use crate::types::geometry::Rect;

/// CSS class given to the native card container.
pub const CARD_CLASS: &str = "sticky-card";

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn css_variables(&self) -> HashMap<String, String>;
    fn frame_css(&self) -> String;
    fn content_clip_script(&self) -> String;
    fn backdrop_html(&self) -> String;
}

/// Appearance derived from one configuration and its layout.
pub struct ThemeEngine {
    border_color: String,
    corner_radius: u32,
    content_radius: u32,
    box_shadow: Option<String>,
    card: Rect,
}

impl ThemeEngine {
    pub fn new(config: &StickyConfig, layout: &WindowLayout) -> Self {
        let shadow = &config.shadow;
        let box_shadow = shadow.is_enabled().then(|| {
            format!(
                "{}px {}px {}px {}",
                shadow.offset_x,
                shadow.offset_y,
                shadow.blur_radius,
                shadow.color.to_css()
            )
        });

        Self {
            border_color: config.border_color.to_css(),
            corner_radius: config.corner_radius,
            content_radius: layout.content_mask.effective_radius(),
            box_shadow,
            card: layout.card,
        }
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn css_variables(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("--border-color".into(), self.border_color.clone());
        vars.insert("--corner-radius".into(), format!("{}px", self.corner_radius));
        vars.insert("--content-radius".into(), format!("{}px", self.content_radius));
        vars.insert(
            "--box-shadow".into(),
            self.box_shadow.clone().unwrap_or_else(|| "none".into()),
        );
        vars
    }

    /// Stylesheet for the native window and its card container.
    ///
    /// The window itself stays transparent; the card paints the border
    /// colour behind the inset webview.
    fn frame_css(&self) -> String {
        let vars = self.css_variables();
        let var = |name: &str| vars.get(name).cloned().unwrap_or_default();

        let mut css = String::new();
        css.push_str("window { background-color: transparent; }\n");
        css.push_str(&format!(".{} {{\n", CARD_CLASS));
        css.push_str(&format!("  background-color: {};\n", var("--border-color")));
        css.push_str(&format!("  border-radius: {};\n", var("--corner-radius")));
        if self.box_shadow.is_some() {
            css.push_str(&format!("  box-shadow: {};\n", var("--box-shadow")));
        }
        css.push_str("}\n");
        css
    }

    /// Initialization script that rounds the page's own corners.
    ///
    /// Only `clip-path` is set; the page keeps its own background. Empty
    /// when the content radius is zero.
    fn content_clip_script(&self) -> String {
        if self.content_radius == 0 {
            return String::new();
        }
        let rule = format!(
            "html{{clip-path:inset(0 round {}px);}}",
            self.content_radius
        );
        format!(
            r#"(function(){{
var apply=function(){{
if(document.getElementById('__sticky_clip'))return;
var s=document.createElement('style');s.id='__sticky_clip';s.textContent={rule};
(document.head||document.documentElement).appendChild(s);
}};
if(document.readyState==='loading'){{document.addEventListener('DOMContentLoaded',apply);}}else{{apply();}}
}})();"#,
            rule = serde_json::Value::String(rule)
        )
    }

    /// Standalone page that paints the card (border colour, radius, shadow)
    /// at its place in the window, for toolkits without a styled container.
    fn backdrop_html(&self) -> String {
        let card = self.card;
        format!(
            "<!DOCTYPE html><html><head><style>\n\
             html, body {{ margin: 0; background: transparent; overflow: hidden; }}\n\
             {css}\
             .{class} {{ position: absolute; left: {x}px; top: {y}px; width: {w}px; height: {h}px; }}\n\
             </style></head><body><div class=\"{class}\"></div></body></html>",
            css = self.frame_css(),
            class = CARD_CLASS,
            x = card.x,
            y = card.y,
            w = card.width,
            h = card.height,
        )
    }
}
