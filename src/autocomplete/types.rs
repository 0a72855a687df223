//! Core types for the autocomplete component.

use crate::key::KeyPress;
use bubbletea_rs::Msg;

/// Converts an item into the text used for filtering and for the input
/// value after a commit.
pub type ItemToStringFunc<T> = Box<dyn Fn(&T) -> String + Send>;

/// Called once with the committed item.
pub type SelectFunc<T> = Box<dyn FnMut(&T) + Send>;

/// Replaces the default filter. Receives the candidate items, the input
/// text and the configured stringifier; its result is used as-is.
pub type FilterFunc<T> = Box<dyn Fn(&[T], &str, &dyn Fn(&T) -> String) -> Vec<T> + Send>;

/// An input event delivered by the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The input text changed to this value.
    Change(String),
    /// A key was pressed in the input.
    KeyDown(KeyPress),
    /// The input lost focus.
    Blur,
    /// The input gained focus.
    Focus,
    /// An IME composition session started.
    CompositionStart,
    /// An IME composition session ended.
    CompositionEnd,
    /// The pointer entered the item at this index.
    PointerEnter(usize),
    /// The pointer was pressed on the item at this index, or on the list
    /// container outside any item.
    PointerDown(Option<usize>),
    /// An external control asked to open or close the dropdown.
    SetOpen(bool),
}

impl Event {
    /// The kind of this event, without its payload.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Change(_) => EventKind::Change,
            Event::KeyDown(_) => EventKind::KeyDown,
            Event::Blur => EventKind::Blur,
            Event::Focus => EventKind::Focus,
            Event::CompositionStart => EventKind::CompositionStart,
            Event::CompositionEnd => EventKind::CompositionEnd,
            Event::PointerEnter(_) => EventKind::PointerEnter,
            Event::PointerDown(_) => EventKind::PointerDown,
            Event::SetOpen(_) => EventKind::SetOpen,
        }
    }
}

/// Payload-free mirror of [`Event`], used to describe which handlers an
/// element carries.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Change,
    KeyDown,
    Blur,
    Focus,
    CompositionStart,
    CompositionEnd,
    PointerEnter,
    PointerDown,
    SetOpen,
}

/// Whether the platform's default action for an event should still run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAction {
    /// Let the default action run.
    Allow,
    /// Suppress the default action.
    Prevent,
}

impl DefaultAction {
    /// True for [`DefaultAction::Prevent`].
    pub fn is_prevented(self) -> bool {
        self == DefaultAction::Prevent
    }
}

/// An action identifier the rendering layer binds to a real handler and
/// hands back through `Model::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Highlight the item at this index.
    Highlight(usize),
    /// Commit the item at this index.
    Commit(usize),
    /// Only suppress the default action.
    PreventDefault,
}

/// Accessibility role of a described element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The text input.
    Combobox,
    /// The dropdown container.
    Listbox,
    /// One dropdown row.
    Option,
}

impl Role {
    /// The ARIA role name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Combobox => "combobox",
            Role::Listbox => "listbox",
            Role::Option => "option",
        }
    }
}

/// Description of the text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    /// Current input text.
    pub value: String,
    /// Always [`Role::Combobox`].
    pub role: Role,
    /// Mirrors the open state.
    pub expanded: bool,
    /// Events the input must forward to the model.
    pub handlers: &'static [EventKind],
}

/// Description of the dropdown container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProps {
    /// Always [`Role::Listbox`].
    pub role: Role,
    /// Keeps a pointer press on the list from blurring the input first.
    pub on_pointer_down: Action,
}

/// Description of one dropdown row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemProps {
    /// Always [`Role::Option`].
    pub role: Role,
    /// Whether this row is the highlighted one.
    pub selected: bool,
    /// [`Action::Highlight`] for this row.
    pub on_pointer_enter: Action,
    /// [`Action::Commit`] for this row.
    pub on_pointer_down: Action,
}

/// Wraps an [`Event`] so it can travel through a bubbletea-rs program.
#[derive(Debug, Clone)]
pub struct EventMsg(pub Event);

impl From<EventMsg> for Msg {
    fn from(msg: EventMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        Box::new(EventMsg(event)) as Msg
    }
}
