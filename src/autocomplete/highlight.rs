//! Highlight movement within the filtered list.

/// Direction of a single highlight step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the first item.
    Up,
    /// Towards the last item.
    Down,
}

impl Direction {
    /// The signed index offset of one step.
    pub fn delta(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Computes the next highlighted index after one step in `direction`.
///
/// `None` means nothing is highlighted and behaves as index -1, so moving
/// down from `None` lands on the first item. The result is clamped into
/// `0..len`; an empty list always yields `None`.
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::{move_highlight, Direction};
///
/// assert_eq!(move_highlight(None, Direction::Down, 3), Some(0));
/// assert_eq!(move_highlight(Some(2), Direction::Down, 3), Some(2));
/// assert_eq!(move_highlight(Some(0), Direction::Up, 0), None);
/// ```
pub fn move_highlight(current: Option<usize>, direction: Direction, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let next = match (current, direction) {
        (None, _) => 0,
        (Some(i), Direction::Down) => i.saturating_add(1),
        (Some(i), Direction::Up) => i.saturating_sub(1),
    };
    Some(next.min(len - 1))
}
