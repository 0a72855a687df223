//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es with help text. Components
//! expose their bindings through a struct implementing [`KeyMap`], which lets
//! help views list them without knowing the component.
//!
//! ```rust
//! use bubbletea_autocomplete::key::{Binding, KeyPress};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = Binding::new(vec![KeyCode::Down]).with_help("↓", "next item");
//! assert!(next.matches(&KeyPress::from(KeyCode::Down)));
//! assert!(!next.matches(&KeyPress::from((KeyCode::Down, KeyModifiers::SHIFT))));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing it.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press from a code and modifiers.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, modifiers)
    }
}

impl From<&KeyMsg> for KeyPress {
    fn from(msg: &KeyMsg) -> Self {
        Self::new(msg.key, msg.modifiers)
    }
}

/// Help text shown for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↓"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into [`KeyPress`].
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Starts the binding in the disabled state.
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Replaces the keys this binding responds to.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// The keys this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether `key` triggers this binding.
    pub fn matches(&self, key: &KeyPress) -> bool {
        self.enabled() && self.keys.contains(key)
    }
}

/// Reports whether a bubbletea key message triggers `binding`.
pub fn matches_binding(key_msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(&KeyPress::from(key_msg))
}

/// Implemented by component key maps so help views can list their bindings.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_matches_exact_modifiers() {
        let b = Binding::new(vec![(KeyCode::Char('n'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&KeyPress::new(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&KeyPress::from(KeyCode::Char('n'))));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]).with_disabled();
        assert!(!b.enabled());
        assert!(!b.matches(&KeyPress::from(KeyCode::Enter)));

        b.set_enabled(true);
        assert!(b.matches(&KeyPress::from(KeyCode::Enter)));
    }

    #[test]
    fn test_binding_without_keys_is_disabled() {
        let b = Binding::new(Vec::<KeyCode>::new());
        assert!(!b.enabled());
    }

    #[test]
    fn test_matches_binding_from_key_msg() {
        let b = Binding::new(vec![KeyCode::Esc]).with_help("esc", "close");
        let msg = KeyMsg {
            key: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
        };
        assert!(matches_binding(&msg, &b));
        assert_eq!(b.help().key, "esc");
        assert_eq!(b.help().desc, "close");
    }
}
