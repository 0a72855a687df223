//! Autocomplete component: a text input with a filtered dropdown.
//!
//! The [`Model`] is a headless state machine. It receives events (text
//! changes, key presses, focus and blur, pointer hover and press, IME
//! composition start and end) and keeps track of which candidate items
//! match the input, which one is highlighted, whether the dropdown is open,
//! and when a selection is committed.
//!
//! Three pure functions carry the decisions and are usable on their own:
//!
//! - [`filter`]: case-insensitive substring match, order preserving
//! - [`move_highlight`]: one clamped step up or down the list
//! - [`can_select`]: whether Enter may commit
//!
//! # Rendering
//!
//! Any surface can drive the model through [`Model::handle_event`] and read
//! back [`Model::input_props`], [`Model::list_props`] and
//! [`Model::item_props`]. Inside a bubbletea-rs program, forward messages to
//! [`Model::update`] and draw [`Model::view`].
//!
//! ```rust
//! use bubbletea_autocomplete::autocomplete::{Event, Model};
//! use std::sync::{Arc, Mutex};
//!
//! let picked = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&picked);
//!
//! let mut ac = Model::new(vec!["Apple", "Banana", "Grape"])
//!     .with_on_select(move |item: &&str| sink.lock().unwrap().push(item.to_string()));
//!
//! ac.handle_event(Event::Change("gr".into()));
//! let row = ac.item_props(0);
//! ac.dispatch(row.on_pointer_down);
//!
//! assert_eq!(ac.input_value(), "Grape");
//! assert_eq!(*picked.lock().unwrap(), vec!["Grape".to_string()]);
//! ```

pub mod filter;
pub mod highlight;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod selection;
pub mod types;
pub mod view;


pub use filter::{filter, fuzzy_filter};
pub use highlight::{move_highlight, Direction};
pub use keymap::{default_key_map, KeyMap};
pub use model::Model;
pub use selection::can_select;
pub use types::{
    Action, DefaultAction, Event, EventKind, EventMsg, FilterFunc, InputProps, ItemProps,
    ItemToStringFunc, ListProps, Role, SelectFunc,
};
pub use view::{Styles, HIGHLIGHT_MARKER};
