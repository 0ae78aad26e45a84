// StickyPages services
// Services provide core functionality: configuration, geometry, masks, styling.

pub mod config_loader;
pub mod layout;
pub mod rounded_mask;
pub mod theme_engine;
