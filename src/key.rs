//! Type-safe key bindings with help text.
//!
//! A [`Binding`] groups one or more key presses under a single action and
//! carries the short help shown in footers. Bindings are built either
//! directly from `crossterm` key codes or from the familiar string names
//! (`"pgup"`, `"ctrl+c"`, `"shift+tab"`):
//!
//! ```rust
//! use catalog_pager::key::{self, Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
//!     .with_help("→/l", "next page");
//! let quit = key::new_binding(vec![
//!     key::with_keys_str(&["q", "ctrl+c"]),
//!     key::with_help("q", "quit"),
//! ]);
//!
//! struct Keys { next: Binding, quit: Binding }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> { vec![&self.next, &self.quit] }
//!     fn full_help(&self) -> Vec<Vec<&Binding>> { vec![self.short_help()] }
//! }
//!
//! let keys = Keys { next, quit };
//! assert_eq!(key::help_line(&keys, " • "), "→/l next page • q quit");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Parses a key name such as `"left"`, `"pgdown"`, `"ctrl+c"` or `"x"`.
    ///
    /// Returns `None` for names that do not describe a single key.
    pub fn parse(name: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = name;
        loop {
            if let Some(tail) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = tail;
            } else {
                break;
            }
        }

        let code = match rest {
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => {
                // Terminals report shift+tab as BackTab.
                modifiers.remove(KeyModifiers::SHIFT);
                KeyCode::BackTab
            }
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" | "pgdn" => KeyCode::PageDown,
            " " | "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(Self { code, modifiers })
    }

    /// Returns true if this press matches a key message.
    ///
    /// Shift is ignored for character keys because terminals already encode
    /// it in the character itself.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let mut held = msg.modifiers;
        if matches!(msg.key, KeyCode::Char(_) | KeyCode::BackTab) {
            held.remove(KeyModifiers::SHIFT);
        }
        held == self.modifiers
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"←/h"`.
    pub key: String,
    /// Action description, e.g. `"prev page"`.
    pub desc: String,
}

/// A named action triggered by one or more key presses.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys, without help text.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Key presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are left out of help.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the binding is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true if the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Option applied by [`new_binding`].
pub enum BindingOpt {
    /// Adds keys by name. Unknown names are skipped.
    Keys(Vec<String>),
    /// Sets the help text.
    Help(String, String),
}

/// Builds a binding from options, mirroring the functional-options style.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::new(Vec::<KeyPress>::new());
    for opt in opts {
        match opt {
            BindingOpt::Keys(names) => {
                binding
                    .keys
                    .extend(names.iter().filter_map(|n| KeyPress::parse(n)));
            }
            BindingOpt::Help(key, desc) => {
                binding.help = Help { key, desc };
            }
        }
    }
    binding
}

/// Key names option for [`new_binding`].
pub fn with_keys_str(names: &[&str]) -> BindingOpt {
    BindingOpt::Keys(names.iter().map(|n| n.to_string()).collect())
}

/// Help text option for [`new_binding`].
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt::Help(key.to_string(), desc.to_string())
}

/// A set of bindings that can describe itself for help views.
pub trait KeyMap {
    /// Bindings shown in the one-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped in columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders the short help of a key map as a single line.
pub fn help_line<K: KeyMap + ?Sized>(keymap: &K, separator: &str) -> String {
    keymap
        .short_help()
        .into_iter()
        .filter(|b| b.enabled() && !b.help().key.is_empty())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(key: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key, modifiers }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(KeyPress::parse("pgup"), Some(KeyPress::from(KeyCode::PageUp)));
        assert_eq!(
            KeyPress::parse("ctrl+c"),
            Some(KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)))
        );
        assert_eq!(
            KeyPress::parse("shift+tab"),
            Some(KeyPress::from(KeyCode::BackTab))
        );
        assert_eq!(KeyPress::parse("nonsense"), None);
    }

    #[test]
    fn test_binding_matches_modifiers() {
        let quit = new_binding(vec![with_keys_str(&["ctrl+c"]), with_help("ctrl+c", "quit")]);
        assert!(quit.matches(&msg(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!quit.matches(&msg(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let binding = Binding::new(vec![KeyCode::Char('G')]);
        assert!(binding.matches(&msg(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Enter]).with_help("enter", "apply");
        binding.set_enabled(false);
        assert!(!binding.matches(&msg(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
