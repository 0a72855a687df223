#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-autocomplete/")]

//! # bubbletea-autocomplete
//!
//! An autocomplete component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: a text input with a dropdown of matching candidates.
//!
//! ## Overview
//!
//! The component is a headless state machine. Feed it events (typing, arrow
//! keys, pointer hover and press, focus and blur, IME composition) and it
//! decides which items are visible, which is highlighted, whether the
//! dropdown is open, and when a selection is committed. Any rendering surface
//! can drive it; inside a bubbletea-rs program, route messages to
//! `update()` and draw `view()` like any other component.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_autocomplete::prelude::*;
//! use crossterm::event::KeyCode;
//!
//! let mut ac = Autocomplete::new(vec!["Apple", "Banana", "Grape"]);
//! ac.change("ap");
//! assert_eq!(ac.filtered_items(), &["Apple", "Grape"]);
//!
//! ac.key_down(KeyCode::Down); // highlight "Apple"
//! ac.key_down(KeyCode::Down); // highlight "Grape"
//! ac.key_down(KeyCode::Enter);
//! assert_eq!(ac.input_value(), "Grape");
//! assert!(!ac.is_open());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_autocomplete::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     search: Autocomplete<&'static str>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut search = Autocomplete::new(vec!["Apple", "Banana", "Grape"])
//!             .with_placeholder("Search fruit");
//!         search.focus();
//!         (Self { search }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.search.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.search.view()
//!     }
//! }
//! ```

pub mod autocomplete;
pub mod key;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - **Focused**: the component receives keyboard input
/// - **Blurred**: the component ignores keyboard input
///
/// ```rust
/// use bubbletea_autocomplete::prelude::*;
///
/// fn toggle<C: Component>(c: &mut C) {
///     if c.focused() {
///         c.blur();
///     } else {
///         let _ = c.focus();
///     }
/// }
///
/// let mut ac = Autocomplete::new(vec!["a"]);
/// toggle(&mut ac);
/// assert!(Component::focused(&ac));
/// ```
pub trait Component {
    /// Sets the component to focused state. May return a command for the
    /// bubbletea runtime.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use prelude::*;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_autocomplete::prelude::*;
/// ```
pub mod prelude {
    pub use crate::autocomplete::{
        can_select, default_key_map as autocomplete_default_key_map, filter, fuzzy_filter,
        move_highlight, Action, DefaultAction, Direction, Event, EventMsg, InputProps, ItemProps,
        KeyMap as AutocompleteKeyMap, ListProps, Model as Autocomplete, Role,
        Styles as AutocompleteStyles,
    };
    pub use crate::key::{matches_binding, Binding, Help as KeyHelp, KeyMap, KeyPress};
    pub use crate::Component;
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_root_exports_description_types() {
        let mut ac = crate::Autocomplete::new(vec!["Apple", "Banana"]);
        ac.change("an");
        let input: crate::InputProps = ac.input_props();
        let list: crate::ListProps = ac.list_props();
        assert_eq!(input.role, crate::Role::Combobox);
        assert_eq!(list.role, crate::Role::Listbox);
        assert_eq!(ac.item_props(0).role, crate::Role::Option);
    }
}
