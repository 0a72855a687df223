//! Commit eligibility.

/// Reports whether a commit is legal: the dropdown is open and the
/// highlighted index points at an existing filtered item.
pub fn can_select(is_open: bool, highlighted: Option<usize>, len: usize) -> bool {
    is_open && highlighted.is_some_and(|i| i < len)
}
