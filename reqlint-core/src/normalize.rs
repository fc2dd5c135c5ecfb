//! Text normalization used for term matching

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-case `text`, decompose it (NFD) and drop every combining mark.
///
/// The result is the comparison form used by the ambiguity, keyword and
/// metric checks: `"Quizás"` and `"QUIZAS"` both become `"quizas"`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Number of whitespace-separated words after trimming
pub fn word_count(text: &str) -> usize {
    text.trim().split_whitespace().count()
}
