//! Window geometry: where the native window goes, where the card and the
//! webview sit inside it, and which masks clip them.

use crate::services::rounded_mask::RoundedMask;
use crate::types::config::{StickyConfig, DEFAULT_POSITION};
use crate::types::geometry::{Rect, ScreenSize, WindowPosition};

/// Resolved geometry of the sticky window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowLayout {
    /// Native window rectangle in screen coordinates.
    pub frame: Rect,
    /// The visible rounded card, relative to the window.
    pub card: Rect,
    /// The webview rectangle, relative to the window.
    pub content: Rect,
    /// Shape applied to the native window. `None` when a drop shadow needs
    /// to paint outside the card.
    pub window_mask: Option<RoundedMask>,
    /// Shape of the content surface, inset from the card by the border.
    pub content_mask: RoundedMask,
    /// Space reserved around the card for the drop shadow.
    pub shadow_margin: u32,
}

impl WindowLayout {
    pub fn compute(config: &StickyConfig, screen: Option<ScreenSize>) -> Self {
        let origin = card_origin(config, screen);
        let margin = config.shadow.margin();
        let offset = i32::try_from(margin).unwrap_or(i32::MAX);

        let frame = Rect::new(
            origin.x.saturating_sub(offset),
            origin.y.saturating_sub(offset),
            config.width.saturating_add(margin.saturating_mul(2)),
            config.height.saturating_add(margin.saturating_mul(2)),
        );
        let card = Rect::new(offset, offset, config.width, config.height);
        let card_mask = RoundedMask::at(card.x, card.y, card.width, card.height, config.corner_radius);

        Self {
            frame,
            card,
            content: card.inset(config.border_width),
            window_mask: (!config.shadow.is_enabled()).then_some(card_mask),
            content_mask: card_mask.inset(config.border_width),
            shadow_margin: margin,
        }
    }

    /// Content rectangle relative to the card, as laid out inside the frame container.
    pub fn content_in_card(&self) -> Rect {
        Rect::new(
            self.content.x - self.card.x,
            self.content.y - self.card.y,
            self.content.width,
            self.content.height,
        )
    }
}

/// Where the card's top-left corner lands on screen.
///
/// An explicit position wins; otherwise the card is centered on the screen
/// with floor division. Without a known screen the default position is used.
pub fn card_origin(config: &StickyConfig, screen: Option<ScreenSize>) -> WindowPosition {
    if let Some(position) = config.position {
        return position;
    }
    match screen {
        Some(screen) => WindowPosition {
            x: centered(screen.width, config.width),
            y: centered(screen.height, config.height),
        },
        None => {
            tracing::debug!("screen size unknown, using default position");
            DEFAULT_POSITION
        }
    }
}

fn centered(screen: u32, size: u32) -> i32 {
    let free = i64::from(screen) - i64::from(size);
    free.div_euclid(2) as i32
}
