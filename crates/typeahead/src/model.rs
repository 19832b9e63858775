//! Data sources for the typeahead: the option list and the hint provider.
//!
//! Both sources are opaque to the widget. The option list is an ordered
//! sequence the dropdown navigates over; the hint provider maps the current
//! input to a full completable string. How either one produces its data is
//! the caller's business: a static word list, a search index, a history
//! store.
//!
//! # Example
//!
//! ```
//! use typeahead::model::{OptionListModel, StringListModel, HintProvider, PrefixHint};
//!
//! let options = StringListModel::from(vec!["apple", "apricot", "banana"]);
//! assert_eq!(options.len(), 3);
//! assert_eq!(options.display_value(1).as_deref(), Some("apricot"));
//!
//! let hints = PrefixHint::new(vec!["apple".to_string(), "apricot".to_string()]);
//! assert_eq!(hints.hint("app"), "apple");
//! assert_eq!(hints.hint("xyz"), "");
//! ```

/// Controls how matching handles letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g., "App" won't match "apple").
    CaseSensitive,
    /// Case-insensitive matching (e.g., "App" will match "apple").
    #[default]
    CaseInsensitive,
}

/// Trait for providing the dropdown's ordered options.
///
/// The widget only ever asks for the count and for the display string of a
/// single index; rendering the option rows is the host's concern.
pub trait OptionListModel: Send + Sync {
    /// Get the number of options.
    fn len(&self) -> usize;

    /// Check whether the model has no options.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the display string for the option at `index`.
    ///
    /// Returns `None` if the index is out of range.
    fn display_value(&self, index: usize) -> Option<String>;
}

/// Trait for providing the inline completion hint.
///
/// Given the current input value, return the full string the input could be
/// completed to. Returning an empty string, the input itself, or anything
/// that does not extend the input signals "no hint".
pub trait HintProvider: Send + Sync {
    /// Get the full completable string for the given input value.
    fn hint(&self, value: &str) -> String;
}

impl<F> HintProvider for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn hint(&self, value: &str) -> String {
        self(value)
    }
}

/// A simple option model backed by a static list of strings.
///
/// This is the most common model for simple scenarios where the list of
/// options is known ahead of time.
#[derive(Debug, Clone, Default)]
pub struct StringListModel {
    items: Vec<String>,
}

impl StringListModel {
    /// Create a new string list model with the given items.
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Create an empty string list model.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Get a reference to the items.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Set the items.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
    }

    /// Add an item to the list.
    pub fn add_item(&mut self, item: String) {
        self.items.push(item);
    }

    /// Remove an item from the list by value.
    pub fn remove_item(&mut self, item: &str) {
        self.items.retain(|i| i != item);
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl OptionListModel for StringListModel {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn display_value(&self, index: usize) -> Option<String> {
        self.items.get(index).cloned()
    }
}

impl From<Vec<String>> for StringListModel {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<Vec<&str>> for StringListModel {
    fn from(items: Vec<&str>) -> Self {
        Self::new(items.into_iter().map(String::from).collect())
    }
}

/// A hint provider backed by a static word list.
///
/// Returns the first item the input is a prefix of, or an empty string when
/// nothing matches. Note that on a case-insensitive match the returned item
/// keeps its own spelling, which may not extend the typed value exactly; the
/// widget then treats it as "no hint". This mirrors how a caller-supplied
/// provider is free to return anything and only strict extensions complete.
#[derive(Debug, Clone, Default)]
pub struct PrefixHint {
    items: Vec<String>,
    case_sensitivity: CaseSensitivity,
}

impl PrefixHint {
    /// Create a new prefix hint provider with the given items.
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            case_sensitivity: CaseSensitivity::default(),
        }
    }

    /// Get the case sensitivity setting.
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    /// Set the case sensitivity for matching.
    pub fn set_case_sensitivity(&mut self, sensitivity: CaseSensitivity) {
        self.case_sensitivity = sensitivity;
    }

    /// Set case sensitivity using builder pattern.
    pub fn with_case_sensitivity(mut self, sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = sensitivity;
        self
    }
}

impl HintProvider for PrefixHint {
    fn hint(&self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }

        let matched = match self.case_sensitivity {
            CaseSensitivity::CaseSensitive => {
                self.items.iter().find(|item| item.starts_with(value))
            }
            CaseSensitivity::CaseInsensitive => {
                let value_lower = value.to_lowercase();
                self.items
                    .iter()
                    .find(|item| item.to_lowercase().starts_with(&value_lower))
            }
        };

        matched.cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_list_model_basic() {
        let model = StringListModel::from(vec!["apple", "application", "banana"]);

        assert_eq!(model.len(), 3);
        assert!(!model.is_empty());
        assert_eq!(model.display_value(0).as_deref(), Some("apple"));
        assert_eq!(model.display_value(2).as_deref(), Some("banana"));
        assert_eq!(model.display_value(3), None);
    }

    #[test]
    fn test_string_list_model_empty() {
        let model = StringListModel::empty();
        assert!(model.is_empty());
        assert_eq!(model.display_value(0), None);
    }

    #[test]
    fn test_string_list_model_mutation() {
        let mut model = StringListModel::empty();
        model.add_item("one".to_string());
        model.add_item("two".to_string());
        assert_eq!(model.len(), 2);

        model.remove_item("one");
        assert_eq!(model.items(), &["two".to_string()]);

        model.clear();
        assert!(model.is_empty());
    }

    #[test]
    fn test_prefix_hint_matches_first() {
        let provider = PrefixHint::new(vec![
            "apple".to_string(),
            "application".to_string(),
            "banana".to_string(),
        ]);

        assert_eq!(provider.hint("app"), "apple");
        assert_eq!(provider.hint("appli"), "application");
        assert_eq!(provider.hint("b"), "banana");
        assert_eq!(provider.hint("xyz"), "");
        assert_eq!(provider.hint(""), "");
    }

    #[test]
    fn test_prefix_hint_case_sensitivity() {
        let provider = PrefixHint::new(vec!["Apple".to_string()])
            .with_case_sensitivity(CaseSensitivity::CaseSensitive);
        assert_eq!(provider.hint("app"), "");
        assert_eq!(provider.hint("App"), "Apple");

        let provider = PrefixHint::new(vec!["Apple".to_string()]);
        assert_eq!(provider.hint("app"), "Apple");
    }

    #[test]
    fn test_closure_as_hint_provider() {
        let provider = |value: &str| format!("{value}!");
        assert_eq!(HintProvider::hint(&provider, "hey"), "hey!");
    }
}
