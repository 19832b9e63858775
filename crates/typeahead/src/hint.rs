//! The completability query behind the inline hint.

use crate::model::HintProvider;

/// Ask the provider for a completion of `value` and validate it.
///
/// Returns `Some(full)` only when the provider's result is a strict
/// extension of a non-empty `value`: it starts with `value` as an exact
/// prefix and carries a non-empty remainder. Everything else (empty input,
/// an empty result, the input echoed back, a result that diverges from the
/// typed prefix) means there is nothing to hint.
///
/// This is a pure query; callers store the outcome into their own state.
///
/// # Example
///
/// ```
/// use typeahead::hint::completable_hint;
///
/// let provider = |_: &str| "ezequiel".to_string();
/// assert_eq!(
///     completable_hint("eze", &provider),
///     Some("ezequiel".to_string())
/// );
/// assert_eq!(completable_hint("xyz", &provider), None);
/// assert_eq!(completable_hint("", &provider), None);
/// ```
pub fn completable_hint(value: &str, provider: &dyn HintProvider) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let full = provider.hint(value);
    if full.len() > value.len() && full.starts_with(value) {
        Some(full)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_extension_completes() {
        let provider = |_: &str| "ezequiel".to_string();
        assert_eq!(
            completable_hint("eze", &provider),
            Some("ezequiel".to_string())
        );
    }

    #[test]
    fn test_empty_input_never_completes() {
        let provider = |_: &str| "ezequiel".to_string();
        assert_eq!(completable_hint("", &provider), None);
    }

    #[test]
    fn test_empty_result_does_not_complete() {
        let provider = |_: &str| String::new();
        assert_eq!(completable_hint("eze", &provider), None);
    }

    #[test]
    fn test_echoed_input_does_not_complete() {
        // No remainder to show.
        let provider = |value: &str| value.to_string();
        assert_eq!(completable_hint("eze", &provider), None);
    }

    #[test]
    fn test_diverging_result_does_not_complete() {
        let provider = |_: &str| "unrelated".to_string();
        assert_eq!(completable_hint("eze", &provider), None);
    }

    #[test]
    fn test_shorter_result_does_not_complete() {
        let provider = |_: &str| "ez".to_string();
        assert_eq!(completable_hint("eze", &provider), None);
    }

    #[test]
    fn test_multibyte_prefix() {
        let provider = |_: &str| "شزذيثب".to_string();
        assert_eq!(
            completable_hint("شزذ", &provider),
            Some("شزذيثب".to_string())
        );
        assert_eq!(completable_hint("شب", &provider), None);
    }
}
