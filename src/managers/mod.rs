// StickyPages state managers
// Managers handle stateful operations: keyboard shortcuts.

pub mod shortcut_manager;
