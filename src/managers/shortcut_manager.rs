//! Shortcut Manager for StickyPages.
//!
//! Holds the window's close binding and turns it into the keydown listener
//! injected into the page.

use crate::types::shortcut::{Modifiers, Shortcut, ShortcutKey};

/// What a shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutAction {
    /// Close the window and exit.
    Close,
}

impl ShortcutAction {
    /// Name used for the action in IPC messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShortcutAction::Close => "close",
        }
    }

    pub fn from_ipc(message: &str) -> Option<Self> {
        match message.trim() {
            "close" => Some(ShortcutAction::Close),
            _ => None,
        }
    }
}

/// Trait defining shortcut management operations.
pub trait ShortcutManagerTrait {
    fn get_shortcut(&self, action: ShortcutAction) -> &Shortcut;
    fn action_for(&self, modifiers: Modifiers, key: ShortcutKey) -> Option<ShortcutAction>;
    fn keydown_script(&self) -> String;
}

/// Shortcut manager with in-memory bindings.
pub struct ShortcutManager {
    close: Shortcut,
}

impl ShortcutManager {
    pub fn new(close: Shortcut) -> Self {
        Self { close }
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new(Shortcut::alt_f4())
    }
}

impl ShortcutManagerTrait for ShortcutManager {
    fn get_shortcut(&self, action: ShortcutAction) -> &Shortcut {
        match action {
            ShortcutAction::Close => &self.close,
        }
    }

    fn action_for(&self, modifiers: Modifiers, key: ShortcutKey) -> Option<ShortcutAction> {
        self.close
            .matches(modifiers, key)
            .then_some(ShortcutAction::Close)
    }

    /// Page script that posts the bound action's name over IPC on keydown.
    fn keydown_script(&self) -> String {
        let action = ShortcutAction::Close;
        format!(
            "window.addEventListener('keydown',function(e){{\n\
             if({}){{e.preventDefault();window.ipc.postMessage('{}');}}\n\
             }},true);",
            self.get_shortcut(action).to_js_condition(),
            action.as_str()
        )
    }
}
