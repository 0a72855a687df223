//! Core model for the autocomplete component.

use super::filter::filter;
use super::keymap::{default_key_map, KeyMap};
use super::selection::can_select;
use super::types::{
    Action, EventKind, FilterFunc, InputProps, ItemProps, ItemToStringFunc, ListProps, Role,
    SelectFunc,
};
use super::view::Styles;
use std::fmt::Display;

/// Events the input forwards to the model.
const INPUT_HANDLERS: &[EventKind] = &[
    EventKind::Change,
    EventKind::KeyDown,
    EventKind::Blur,
    EventKind::Focus,
    EventKind::CompositionStart,
    EventKind::CompositionEnd,
];

/// The autocomplete component: a text input with a filtered dropdown.
///
/// The model owns the input text, the open state, the highlighted index and
/// the composition flag. Every event is applied synchronously, including
/// recomputing the filtered items, before the call returns.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::Model;
/// use crossterm::event::KeyCode;
///
/// let mut ac = Model::new(vec!["Apple", "Banana", "Grape"]);
/// ac.change("ap");
/// assert!(ac.is_open());
/// assert_eq!(ac.filtered_items(), &["Apple", "Grape"]);
///
/// ac.key_down(KeyCode::Down);
/// ac.key_down(KeyCode::Enter);
/// assert_eq!(ac.input_value(), "Apple");
/// assert!(!ac.is_open());
/// ```
pub struct Model<T> {
    /// Prompt shown before the input text.
    pub prompt: String,
    /// Shown in place of the input text while it is empty.
    pub placeholder: String,
    /// Shown as the only row while the dropdown is open with no matches.
    pub no_matches_text: String,
    /// Maximum display width of each rendered line. 0 means no limit.
    pub width: usize,
    /// Rendering styles.
    pub styles: Styles,
    /// Navigation and commit bindings.
    pub key_map: KeyMap,

    pub(super) items: Vec<T>,
    pub(super) item_to_string: ItemToStringFunc<T>,
    pub(super) on_select: Option<SelectFunc<T>>,
    pub(super) open_on_focus: bool,
    pub(super) filter_fn: Option<FilterFunc<T>>,

    pub(super) input: String,
    pub(super) open: bool,
    pub(super) highlighted: Option<usize>,
    pub(super) composing: bool,
    pub(super) focus: bool,

    /// Derived from `items` and `input`; rebuilt by `refilter`.
    pub(super) filtered: Vec<T>,
}

impl<T: Clone + Display + 'static> Model<T> {
    /// Creates a model whose items are stringified with their `Display` impl.
    pub fn new(items: Vec<T>) -> Self {
        Self::new_with(items, |item: &T| item.to_string())
    }
}

impl<T: Clone + 'static> Model<T> {
    /// Creates a model with an explicit stringifier, for items without a
    /// suitable `Display` impl.
    ///
    /// ```rust
    /// use bubbletea_autocomplete::autocomplete::Model;
    ///
    /// #[derive(Clone)]
    /// struct Fruit { id: u32, label: &'static str }
    ///
    /// let mut ac = Model::new_with(
    ///     vec![Fruit { id: 1, label: "Foo" }, Fruit { id: 2, label: "Bar" }],
    ///     |f: &Fruit| f.label.to_string(),
    /// );
    /// ac.change("ba");
    /// assert_eq!(ac.filtered_items()[0].id, 2);
    /// ```
    pub fn new_with<F>(items: Vec<T>, item_to_string: F) -> Self
    where
        F: Fn(&T) -> String + Send + 'static,
    {
        let mut m = Self {
            prompt: "> ".to_string(),
            placeholder: String::new(),
            no_matches_text: "No matches".to_string(),
            width: 0,
            styles: Styles::default(),
            key_map: default_key_map(),
            items,
            item_to_string: Box::new(item_to_string),
            on_select: None,
            open_on_focus: false,
            filter_fn: None,
            input: String::new(),
            open: false,
            highlighted: None,
            composing: false,
            focus: false,
            filtered: Vec::new(),
        };
        m.refilter();
        m
    }

    /// Sets the selection callback.
    pub fn with_on_select<F>(mut self, on_select: F) -> Self
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.set_on_select(on_select);
        self
    }

    /// Opens the dropdown on focus when there is something to show.
    pub fn with_open_on_focus(mut self, open_on_focus: bool) -> Self {
        self.open_on_focus = open_on_focus;
        self
    }

    /// Replaces the default substring filter.
    pub fn with_filter_fn(mut self, filter_fn: FilterFunc<T>) -> Self {
        self.set_filter_fn(Some(filter_fn));
        self
    }

    /// Sets the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the text shown when nothing matches.
    pub fn with_no_matches_text(mut self, text: impl Into<String>) -> Self {
        self.no_matches_text = text.into();
        self
    }

    /// Sets the maximum line width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the candidate items and recomputes the filtered items.
    ///
    /// The highlighted index is left alone. If it no longer points at a
    /// filtered item, [`highlighted_item`](Self::highlighted_item) reports
    /// none until navigation moves it back into range.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.refilter();
    }

    /// The candidate items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the stringifier and recomputes the filtered items.
    pub fn set_item_to_string<F>(&mut self, item_to_string: F)
    where
        F: Fn(&T) -> String + Send + 'static,
    {
        self.item_to_string = Box::new(item_to_string);
        self.refilter();
    }

    /// Sets the selection callback.
    pub fn set_on_select<F>(&mut self, on_select: F)
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.on_select = Some(Box::new(on_select));
    }

    /// Enables or disables opening on focus.
    pub fn set_open_on_focus(&mut self, open_on_focus: bool) {
        self.open_on_focus = open_on_focus;
    }

    /// Replaces the filter, or restores the default with `None`.
    pub fn set_filter_fn(&mut self, filter_fn: Option<FilterFunc<T>>) {
        self.filter_fn = filter_fn;
        self.refilter();
    }

    /// Returns the widget to its mount state, keeping items and configuration.
    pub fn reset(&mut self) {
        self.input.clear();
        self.open = false;
        self.highlighted = None;
        self.composing = false;
        self.refilter();
    }

    /// Recomputes the filtered items from the current items and input.
    pub(super) fn refilter(&mut self) {
        self.filtered = match &self.filter_fn {
            Some(filter_fn) => filter_fn(self.items.as_slice(), &self.input, &*self.item_to_string),
            None => filter(self.items.as_slice(), &self.input, &*self.item_to_string).into_owned(),
        };
    }

    /// Whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The current input text.
    pub fn input_value(&self) -> &str {
        &self.input
    }

    /// The highlighted index, as last set. May be stale after the filtered
    /// items shrink; use [`highlighted_item`](Self::highlighted_item) to read
    /// the item itself.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// The highlighted item, if the highlighted index is in range.
    pub fn highlighted_item(&self) -> Option<&T> {
        self.highlighted.and_then(|i| self.filtered.get(i))
    }

    /// The items matching the current input.
    pub fn filtered_items(&self) -> &[T] {
        &self.filtered
    }

    /// Whether an IME composition session is active.
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Whether a commit via the keyboard would currently succeed.
    pub fn can_commit(&self) -> bool {
        can_select(self.open, self.highlighted, self.filtered.len())
    }

    /// Stringifies an item with the configured stringifier.
    pub fn item_to_string(&self, item: &T) -> String {
        (self.item_to_string)(item)
    }

    /// Describes the text input.
    pub fn input_props(&self) -> InputProps {
        InputProps {
            value: self.input.clone(),
            role: Role::Combobox,
            expanded: self.open,
            handlers: INPUT_HANDLERS,
        }
    }

    /// Describes the dropdown container.
    pub fn list_props(&self) -> ListProps {
        ListProps {
            role: Role::Listbox,
            on_pointer_down: Action::PreventDefault,
        }
    }

    /// Describes the dropdown row at `index`.
    pub fn item_props(&self, index: usize) -> ItemProps {
        ItemProps {
            role: Role::Option,
            selected: self.highlighted == Some(index),
            on_pointer_enter: Action::Highlight(index),
            on_pointer_down: Action::Commit(index),
        }
    }
}
