use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::errors::ShortcutError;

/// Modifier keys held together with a shortcut key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// The non-modifier key of a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutKey {
    /// Function key `F1`..`F24`.
    Function(u8),
    Escape,
    Enter,
    Tab,
    Space,
    Home,
    /// A printable character, stored lowercase.
    Char(char),
}

impl ShortcutKey {
    /// The `KeyboardEvent.key` value a browser reports for this key.
    pub fn dom_key(&self) -> String {
        match self {
            ShortcutKey::Function(n) => format!("F{}", n),
            ShortcutKey::Escape => "Escape".to_string(),
            ShortcutKey::Enter => "Enter".to_string(),
            ShortcutKey::Tab => "Tab".to_string(),
            ShortcutKey::Space => " ".to_string(),
            ShortcutKey::Home => "Home".to_string(),
            ShortcutKey::Char(c) => c.to_string(),
        }
    }
}

impl fmt::Display for ShortcutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutKey::Function(n) => write!(f, "F{}", n),
            ShortcutKey::Escape => f.write_str("Escape"),
            ShortcutKey::Enter => f.write_str("Enter"),
            ShortcutKey::Tab => f.write_str("Tab"),
            ShortcutKey::Space => f.write_str("Space"),
            ShortcutKey::Home => f.write_str("Home"),
            ShortcutKey::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
        }
    }
}

impl FromStr for ShortcutKey {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let key = match lower.as_str() {
            "esc" | "escape" => ShortcutKey::Escape,
            "enter" | "return" => ShortcutKey::Enter,
            "tab" => ShortcutKey::Tab,
            "space" => ShortcutKey::Space,
            "home" => ShortcutKey::Home,
            _ => {
                if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                    if (1..=24).contains(&n) {
                        return Ok(ShortcutKey::Function(n));
                    }
                    return Err(ShortcutError::UnknownKey(s.to_string()));
                }
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_graphic() => ShortcutKey::Char(c),
                    _ => return Err(ShortcutError::UnknownKey(s.to_string())),
                }
            }
        };
        Ok(key)
    }
}

/// A key combination such as `Alt+F4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub modifiers: Modifiers,
    pub key: ShortcutKey,
}

impl Shortcut {
    pub const fn new(modifiers: Modifiers, key: ShortcutKey) -> Self {
        Self { modifiers, key }
    }

    /// The default close shortcut, `Alt+F4`.
    pub const fn alt_f4() -> Self {
        Self::new(
            Modifiers {
                ctrl: false,
                alt: true,
                shift: false,
                meta: false,
            },
            ShortcutKey::Function(4),
        )
    }

    /// True when `key` is pressed with exactly this shortcut's modifiers.
    pub fn matches(&self, modifiers: Modifiers, key: ShortcutKey) -> bool {
        self.modifiers == modifiers && self.key == key
    }

    /// A JavaScript boolean expression over a `KeyboardEvent` named `e`.
    pub fn to_js_condition(&self) -> String {
        let key_test = match self.key {
            ShortcutKey::Char(_) => format!(
                "e.key.toLowerCase()==={}",
                js_string(&self.key.dom_key())
            ),
            _ => format!("e.key==={}", js_string(&self.key.dom_key())),
        };
        format!(
            "{}&&e.ctrlKey==={}&&e.altKey==={}&&e.shiftKey==={}&&e.metaKey==={}",
            key_test, self.modifiers.ctrl, self.modifiers.alt, self.modifiers.shift, self.modifiers.meta
        )
    }
}

/// Quotes `s` as a JavaScript string literal.
fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.modifiers;
        for (held, name) in [(m.ctrl, "Ctrl"), (m.alt, "Alt"), (m.shift, "Shift"), (m.meta, "Meta")] {
            if held {
                write!(f, "{}+", name)?;
            }
        }
        write!(f, "{}", self.key)
    }
}

impl FromStr for Shortcut {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ShortcutError::Empty);
        }

        let parts: Vec<&str> = trimmed.split(['+', '-']).map(str::trim).collect();
        let (key_part, modifier_parts) = match parts.split_last() {
            Some((key, mods)) if !key.is_empty() => (*key, mods),
            _ => return Err(ShortcutError::UnknownKey(trimmed.to_string())),
        };

        let mut modifiers = Modifiers::default();
        for part in modifier_parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "option" | "opt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "meta" | "super" | "cmd" | "command" => modifiers.meta = true,
                _ => return Err(ShortcutError::UnknownModifier(part.to_string())),
            }
        }

        Ok(Shortcut {
            modifiers,
            key: key_part.parse()?,
        })
    }
}

impl Serialize for Shortcut {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
