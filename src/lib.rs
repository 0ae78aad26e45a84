//! StickyPages — pin a single webpage to the desktop in a small, frameless,
//! rounded window.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod cli;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
