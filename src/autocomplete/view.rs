//! Terminal rendering for the autocomplete component.

use super::model::Model;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

/// Marker drawn in front of the highlighted row.
pub const HIGHLIGHT_MARKER: &str = "› ";

/// Styles used by [`Model::view`].
#[derive(Debug, Clone)]
pub struct Styles {
    /// The prompt before the input text.
    pub prompt: Style,
    /// The input text.
    pub text: Style,
    /// The placeholder.
    pub placeholder: Style,
    /// A dropdown row that is not highlighted.
    pub item: Style,
    /// The highlighted dropdown row.
    pub highlighted_item: Style,
    /// The line shown when nothing matches.
    pub no_matches: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            prompt: Style::new(),
            text: Style::new(),
            placeholder: Style::new().foreground(Color::from("240")),
            item: Style::new().foreground(Color::from("252")),
            highlighted_item: Style::new().foreground(Color::from("170")).bold(true),
            no_matches: Style::new().foreground(Color::from("240")).italic(true),
        }
    }
}

impl<T: Clone + 'static> Model<T> {
    /// Renders the input line and, while open, one line per filtered item.
    pub fn view(&self) -> String {
        let mut lines = vec![self.input_view()];
        if self.open {
            if self.filtered.is_empty() {
                lines.push(self.styles.no_matches.render(&self.fit(&self.no_matches_text)));
            }
            for (index, item) in self.filtered.iter().enumerate() {
                lines.push(self.item_view(index, item));
            }
        }
        lines.join("\n")
    }

    fn input_view(&self) -> String {
        let prompt = self.styles.prompt.render(&self.prompt);
        if self.input.is_empty() && !self.placeholder.is_empty() {
            return format!("{}{}", prompt, self.styles.placeholder.render(&self.placeholder));
        }
        format!("{}{}", prompt, self.styles.text.render(&self.input))
    }

    fn item_view(&self, index: usize, item: &T) -> String {
        let label = self.item_to_string(item);
        if self.highlighted == Some(index) {
            let line = self.fit(&format!("{}{}", HIGHLIGHT_MARKER, label));
            self.styles.highlighted_item.render(&line)
        } else {
            let line = self.fit(&format!("  {}", label));
            self.styles.item.render(&line)
        }
    }

    /// Truncates `s` to `width` display columns.
    fn fit(&self, s: &str) -> String {
        if self.width == 0 {
            return s.to_string();
        }
        let mut used = 0;
        let mut out = String::new();
        for ch in s.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w > self.width {
                break;
            }
            used += w;
            out.push(ch);
        }
        out
    }
}
