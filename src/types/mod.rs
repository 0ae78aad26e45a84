// StickyPages shared type definitions
// Each submodule defines types used across the application.

pub mod color;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod shortcut;
