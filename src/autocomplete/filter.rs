//! Candidate filtering.
//!
//! The default filter keeps every item whose stringified form contains the
//! input as a case-insensitive substring. A [`FilterFunc`] can replace it
//! entirely; [`fuzzy_filter`] is a ready-made replacement using the same
//! fuzzy matcher as the list component.

use super::types::FilterFunc;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::borrow::Cow;

/// Returns the items that match `input`, in their original order.
///
/// An empty `input` borrows `items` unchanged. Otherwise both the input and
/// each item's `item_to_string` form are lower-cased and compared by
/// substring.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::filter;
///
/// let items = vec!["Apple", "Banana", "Grape"];
/// let matched = filter(&items, "ap", &|s: &&str| s.to_string());
/// assert_eq!(&*matched, &["Apple", "Grape"]);
/// ```
pub fn filter<'a, T, F>(items: &'a [T], input: &str, item_to_string: &F) -> Cow<'a, [T]>
where
    T: Clone,
    F: Fn(&T) -> String + ?Sized,
{
    if input.is_empty() {
        return Cow::Borrowed(items);
    }

    let needle = input.to_lowercase();
    Cow::Owned(
        items
            .iter()
            .filter(|item| item_to_string(item).to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}

/// A [`FilterFunc`] that fuzzy-matches items with `SkimMatcherV2`.
///
/// Matching items keep their original order rather than being ranked by
/// score. An empty input returns every item.
pub fn fuzzy_filter<T: Clone + 'static>() -> FilterFunc<T> {
    let matcher = SkimMatcherV2::default();
    Box::new(move |items: &[T], input: &str, item_to_string: &dyn Fn(&T) -> String| {
        if input.is_empty() {
            return items.to_vec();
        }
        items
            .iter()
            .filter(|item| matcher.fuzzy_match(&item_to_string(item), input).is_some())
            .cloned()
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(s: &&str) -> String {
        s.to_string()
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Labeled {
        id: u32,
        label: &'static str,
    }

    #[test]
    fn test_empty_input_borrows_items() {
        let items = vec!["Apple", "Banana"];
        let result = filter(&items, "", &display);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(&*result, &items[..]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let items = vec!["Apple", "Banana", "Grape"];
        assert_eq!(&*filter(&items, "ap", &display), &["Apple", "Grape"]);
        assert_eq!(&*filter(&items, "AP", &display), &["Apple", "Grape"]);
    }

    #[test]
    fn test_no_matches() {
        let items = vec!["Apple", "Banana"];
        assert!(filter(&items, "zzz", &display).is_empty());
    }

    #[test]
    fn test_custom_item_to_string() {
        let items = vec![Labeled { id: 1, label: "Foo" }, Labeled { id: 2, label: "Bar" }];
        let result = filter(&items, "ba", &|item: &Labeled| item.label.to_string());
        assert_eq!(&*result, &[Labeled { id: 2, label: "Bar" }]);
    }

    #[test]
    fn test_preserves_original_order() {
        let items = vec!["cab", "abc", "xyz", "bca", "ab"];
        assert_eq!(&*filter(&items, "ab", &display), &["cab", "abc", "ab"]);
    }

    #[test]
    fn test_fuzzy_filter_matches_subsequences() {
        let f = fuzzy_filter::<&str>();
        let items = vec!["Apple", "Banana", "Apricot"];
        let to_string = |s: &&str| s.to_string();
        assert_eq!(f(&items[..], "apt", &to_string), vec!["Apricot"]);
        assert_eq!(f(&items[..], "", &to_string), items);
    }
}
