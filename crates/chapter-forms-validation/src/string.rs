//! String validation functions

use url::Url;

/// Non-empty check
///
/// Whitespace counts as content; nothing is trimmed.
pub fn is_non_empty(s: &str) -> bool {
    !s.is_empty()
}

/// Absolute URL validation
///
/// Accepts anything the WHATWG URL parser accepts without a base, so every
/// value needs a scheme (`https://example.edu`, `mailto:x@y.org`). Relative
/// references such as `example.edu` are rejected.
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// Whitespace as matched by a JavaScript `\s` class
///
/// Differs from `char::is_whitespace`: U+FEFF separates words, U+0085 does not.
pub fn is_word_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Number of words in a piece of text
///
/// Text is split on runs of separators; leading and trailing runs add nothing.
pub fn word_count(text: &str) -> usize {
    text.split(is_word_separator)
        .filter(|word| !word.is_empty())
        .count()
}

pub fn has_min_words(text: &str, min: usize) -> bool {
    word_count(text) >= min
}

/// Enum/value restriction
pub fn is_one_of<S: AsRef<str>>(value: &str, allowed: &[S]) -> bool {
    allowed.iter().any(|option| option.as_ref() == value)
}
