//! Key bindings for the autocomplete component.

use crate::key::{self, Binding, KeyPress};
use crossterm::event::KeyCode;

/// The keys the autocomplete reacts to while its input has focus.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Open the dropdown, or move the highlight down when already open.
    pub highlight_next: Binding,
    /// Move the highlight up.
    pub highlight_prev: Binding,
    /// Commit the highlighted item.
    pub commit: Binding,
    /// Close the dropdown and clear the highlight.
    pub dismiss: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

/// Down, Up, Enter and Escape.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        highlight_next: Binding::new(vec![KeyCode::Down]).with_help("↓", "next"),
        highlight_prev: Binding::new(vec![KeyCode::Up]).with_help("↑", "previous"),
        commit: Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
        dismiss: Binding::new(vec![KeyCode::Esc]).with_help("esc", "close"),
    }
}

impl KeyMap {
    /// Reports whether any binding in this map reacts to `key`.
    pub fn handles(&self, key: &KeyPress) -> bool {
        [
            &self.highlight_next,
            &self.highlight_prev,
            &self.commit,
            &self.dismiss,
        ]
        .iter()
        .any(|b| b.matches(key))
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.highlight_prev, &self.highlight_next, &self.commit]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.highlight_prev, &self.highlight_next],
            vec![&self.commit, &self.dismiss],
        ]
    }
}
