//! Event handling for the autocomplete model.

use super::highlight::{move_highlight, Direction};
use super::model::Model;
use super::types::{Action, DefaultAction, Event, EventMsg};
use crate::key::KeyPress;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use log::{debug, trace};

impl<T: Clone + 'static> Model<T> {
    /// Applies one event and reports whether its default action should run.
    pub fn handle_event(&mut self, event: Event) -> DefaultAction {
        trace!("autocomplete event: {:?}", event);
        match event {
            Event::Change(value) => {
                self.change(value);
                DefaultAction::Allow
            }
            Event::KeyDown(key) => self.key_down(key),
            Event::Blur => {
                self.blur();
                DefaultAction::Allow
            }
            Event::Focus => {
                self.focus();
                DefaultAction::Allow
            }
            Event::CompositionStart => {
                self.composition_start();
                DefaultAction::Allow
            }
            Event::CompositionEnd => {
                self.composition_end();
                DefaultAction::Allow
            }
            Event::PointerEnter(index) => {
                self.pointer_enter(index);
                DefaultAction::Allow
            }
            Event::PointerDown(index) => self.pointer_down(index),
            Event::SetOpen(open) => {
                self.set_open(open);
                DefaultAction::Allow
            }
        }
    }

    /// Runs an action taken from [`item_props`](Self::item_props) or
    /// [`list_props`](Self::list_props).
    pub fn dispatch(&mut self, action: Action) -> DefaultAction {
        match action {
            Action::Highlight(index) => {
                self.pointer_enter(index);
                DefaultAction::Allow
            }
            Action::Commit(index) => self.pointer_down(Some(index)),
            Action::PreventDefault => self.pointer_down(None),
        }
    }

    /// The input text changed. A non-empty value opens the dropdown; an
    /// empty one closes it and clears the highlight.
    pub fn change(&mut self, value: impl Into<String>) {
        self.input = value.into();
        if self.input.is_empty() {
            self.open = false;
            self.highlighted = None;
        } else {
            self.open = true;
        }
        self.refilter();
    }

    /// Marks the start of an IME composition session.
    pub fn composition_start(&mut self) {
        self.composing = true;
    }

    /// Marks the end of an IME composition session.
    pub fn composition_end(&mut self) {
        self.composing = false;
    }

    /// Handles a key press in the input. Keys are ignored entirely while
    /// composing.
    pub fn key_down(&mut self, key: impl Into<KeyPress>) -> DefaultAction {
        let key = key.into();
        if self.composing {
            trace!("ignoring {:?} during composition", key.code);
            return DefaultAction::Allow;
        }

        if self.key_map.highlight_next.matches(&key) {
            if !self.open {
                self.open = true;
            } else {
                self.step(Direction::Down);
            }
            DefaultAction::Prevent
        } else if self.key_map.highlight_prev.matches(&key) {
            self.step(Direction::Up);
            DefaultAction::Prevent
        } else if self.key_map.commit.matches(&key) {
            match self.highlighted {
                Some(index) if self.can_commit() => {
                    self.commit(index);
                    DefaultAction::Prevent
                }
                _ => DefaultAction::Allow,
            }
        } else if self.key_map.dismiss.matches(&key) {
            self.close();
            DefaultAction::Allow
        } else {
            DefaultAction::Allow
        }
    }

    /// The pointer entered the row at `index`.
    pub fn pointer_enter(&mut self, index: usize) {
        self.highlighted = Some(index);
    }

    /// The pointer was pressed on the row at `index`, or on the list
    /// container when `index` is `None`. Always suppresses the default
    /// action so the input is not blurred before the press lands.
    pub fn pointer_down(&mut self, index: Option<usize>) -> DefaultAction {
        if let Some(index) = index {
            self.commit(index);
        }
        DefaultAction::Prevent
    }

    /// Opens or closes the dropdown without touching the highlight.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Gives the input focus. With `open_on_focus`, opens the dropdown when
    /// the current filtered items are non-empty.
    pub fn focus(&mut self) {
        self.focus = true;
        if self.open_on_focus && !self.filtered.is_empty() {
            self.open = true;
        }
    }

    /// Removes focus, closing the dropdown and clearing the highlight.
    pub fn blur(&mut self) {
        self.focus = false;
        self.close();
    }

    /// Whether the input has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    fn step(&mut self, direction: Direction) {
        self.highlighted = move_highlight(self.highlighted, direction, self.filtered.len());
        trace!("highlight moved {:?} to {:?}", direction, self.highlighted);
    }

    fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Commits the filtered item at `index`. Out-of-range indices are ignored.
    fn commit(&mut self, index: usize) {
        let Some(item) = self.filtered.get(index).cloned() else {
            trace!("commit index {} out of range", index);
            return;
        };

        self.input = self.item_to_string(&item);
        self.close();
        self.refilter();
        debug!("committed item {} as {:?}", index, self.input);

        if let Some(on_select) = self.on_select.as_mut() {
            on_select(&item);
        }
    }

    /// Routes a bubbletea-rs message.
    ///
    /// [`EventMsg`] is always applied. Raw key messages are only handled
    /// while focused: bound keys go to [`key_down`](Self::key_down),
    /// printable characters and backspace edit the input text.
    ///
    /// ```rust
    /// use bubbletea_autocomplete::autocomplete::Model;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut ac = Model::new(vec!["Apple", "Banana"]);
    /// ac.focus();
    /// ac.update(Box::new(KeyMsg { key: KeyCode::Char('b'), modifiers: KeyModifiers::NONE }));
    /// assert_eq!(ac.input_value(), "b");
    /// assert_eq!(ac.filtered_items(), &["Banana"]);
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(EventMsg(event)) = msg.downcast_ref::<EventMsg>() {
            self.handle_event(event.clone());
            return None;
        }

        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let key = KeyPress::from(key_msg);
            if self.key_map.handles(&key) {
                self.key_down(key);
            } else {
                self.handle_text_input(key_msg);
            }
        }

        None
    }

    fn handle_text_input(&mut self, key_msg: &KeyMsg) {
        match key_msg.key {
            KeyCode::Char(ch)
                if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                    && !key_msg.modifiers.contains(KeyModifiers::ALT) =>
            {
                let mut value = self.input.clone();
                value.push(ch);
                self.change(value);
            }
            KeyCode::Backspace if !self.input.is_empty() => {
                let mut value = self.input.clone();
                value.pop();
                self.change(value);
            }
            _ => {}
        }
    }
}

impl<T: Clone + 'static> Component for Model<T> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus();
        None
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
