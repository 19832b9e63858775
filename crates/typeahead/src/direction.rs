//! Base text direction detection.
//!
//! Hint acceptance via the arrow keys depends on which arrow means "forward"
//! for the text being typed: in right-to-left scripts the caret moves toward
//! the end of the text with the *left* arrow. This module classifies the
//! base direction of the current input using the Unicode Bidirectional
//! Algorithm's first-strong rule.
//!
//! # Example
//!
//! ```
//! use typeahead::direction::{TextDirection, detect_base_direction};
//!
//! // Auto-detect direction from content
//! let ltr_text = "Hello, World!";
//! assert_eq!(detect_base_direction(ltr_text), TextDirection::LeftToRight);
//!
//! let rtl_text = "مرحبا بالعالم";
//! assert_eq!(detect_base_direction(rtl_text), TextDirection::RightToLeft);
//! ```

use unicode_bidi::{BidiClass, bidi_class};

/// Base direction of a run of text.
///
/// The direction decides which arrow key is semantically "forward" and
/// therefore eligible to accept the inline hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    /// Left-to-right direction (default for Latin, Cyrillic, Greek, etc.).
    #[default]
    LeftToRight,
    /// Right-to-left direction (for Arabic, Hebrew, etc.).
    RightToLeft,
    /// Automatically detect direction from text content.
    ///
    /// Uses the first strong directional character to determine the base
    /// direction.
    Auto,
}

impl TextDirection {
    /// Check if this direction is left-to-right.
    pub fn is_ltr(self) -> bool {
        matches!(self, TextDirection::LeftToRight)
    }

    /// Check if this direction is right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, TextDirection::RightToLeft)
    }

    /// Check if this direction is auto-detected.
    pub fn is_auto(self) -> bool {
        matches!(self, TextDirection::Auto)
    }

    /// Resolve auto direction to a concrete direction based on text content.
    ///
    /// If this is `Auto`, detects the direction from the given text.
    /// Otherwise, returns the explicit direction.
    pub fn resolve(self, text: &str) -> TextDirection {
        match self {
            TextDirection::Auto => detect_base_direction(text),
            dir => dir,
        }
    }
}

/// Detect the base direction of text using the Unicode Bidi Algorithm.
///
/// This function implements the first-strong algorithm (P2/P3 of UAX #9):
/// The base direction is determined by the first character with a strong
/// directional type (L, R, or AL).
///
/// # Returns
///
/// - `TextDirection::RightToLeft` if the first strong character is R or AL
/// - `TextDirection::LeftToRight` otherwise (including empty strings)
pub fn detect_base_direction(text: &str) -> TextDirection {
    for c in text.chars() {
        match bidi_class(c) {
            // Strong LTR
            BidiClass::L => return TextDirection::LeftToRight,
            // Strong RTL
            BidiClass::R | BidiClass::AL => return TextDirection::RightToLeft,
            // Continue searching for other classes
            _ => continue,
        }
    }

    // Default to LTR if no strong directional character found
    TextDirection::LeftToRight
}

/// Check if a character is a strong RTL character.
///
/// This includes Arabic Letter (AL) and Right-to-Left (R) bidi classes.
pub fn is_rtl_char(c: char) -> bool {
    matches!(bidi_class(c), BidiClass::R | BidiClass::AL)
}

/// Check if a character is a strong LTR character.
pub fn is_ltr_char(c: char) -> bool {
    matches!(bidi_class(c), BidiClass::L)
}

/// Check if a character has strong directionality.
pub fn is_strong_directional(c: char) -> bool {
    matches!(bidi_class(c), BidiClass::L | BidiClass::R | BidiClass::AL)
}

/// Check if text contains any RTL characters.
pub fn contains_rtl(text: &str) -> bool {
    text.chars().any(is_rtl_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_detection_ltr() {
        assert_eq!(detect_base_direction("Hello"), TextDirection::LeftToRight);
        assert_eq!(
            detect_base_direction("Hello, World!"),
            TextDirection::LeftToRight
        );
        assert_eq!(detect_base_direction("Привет"), TextDirection::LeftToRight); // Russian (Cyrillic)
        assert_eq!(detect_base_direction("Γεια"), TextDirection::LeftToRight); // Greek
        assert_eq!(detect_base_direction("你好"), TextDirection::LeftToRight); // Chinese
    }

    #[test]
    fn direction_detection_rtl() {
        assert_eq!(detect_base_direction("مرحبا"), TextDirection::RightToLeft); // Arabic
        assert_eq!(detect_base_direction("שלום"), TextDirection::RightToLeft); // Hebrew
        assert_eq!(detect_base_direction("سلام"), TextDirection::RightToLeft); // Persian/Arabic
    }

    #[test]
    fn direction_detection_mixed() {
        // First strong character determines base direction
        assert_eq!(
            detect_base_direction("Hello مرحبا"),
            TextDirection::LeftToRight
        );
        assert_eq!(
            detect_base_direction("مرحبا Hello"),
            TextDirection::RightToLeft
        );
        assert_eq!(
            detect_base_direction("123 Hello"),
            TextDirection::LeftToRight
        );
        assert_eq!(
            detect_base_direction("123 مرحبا"),
            TextDirection::RightToLeft
        );
    }

    #[test]
    fn direction_detection_neutral_only() {
        // No strong directional characters - defaults to LTR
        assert_eq!(detect_base_direction("123"), TextDirection::LeftToRight);
        assert_eq!(detect_base_direction("!@#$%"), TextDirection::LeftToRight);
        assert_eq!(detect_base_direction("   "), TextDirection::LeftToRight);
        assert_eq!(detect_base_direction(""), TextDirection::LeftToRight);
    }

    #[test]
    fn direction_resolve() {
        let dir = TextDirection::Auto;
        assert_eq!(dir.resolve("Hello"), TextDirection::LeftToRight);
        assert_eq!(dir.resolve("مرحبا"), TextDirection::RightToLeft);

        let explicit_ltr = TextDirection::LeftToRight;
        assert_eq!(explicit_ltr.resolve("مرحبا"), TextDirection::LeftToRight);

        let explicit_rtl = TextDirection::RightToLeft;
        assert_eq!(explicit_rtl.resolve("Hello"), TextDirection::RightToLeft);
    }

    #[test]
    fn char_classification() {
        assert!(is_ltr_char('a'));
        assert!(!is_rtl_char('a'));
        assert!(is_rtl_char('ش'));
        assert!(is_rtl_char('ש'));
        assert!(is_strong_directional('a'));
        assert!(is_strong_directional('ש'));
        assert!(!is_strong_directional('1'));
        assert!(!is_strong_directional(' '));
    }

    #[test]
    fn contains_rtl_detection() {
        assert!(!contains_rtl("Hello, World!"));
        assert!(!contains_rtl("123"));
        assert!(contains_rtl("مرحبا"));
        assert!(contains_rtl("Hello مرحبا"));
        assert!(contains_rtl("שלום"));
    }
}
