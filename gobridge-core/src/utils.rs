//! Shared string utilities for naming generated code.

/// Uppercase the first letter of every word (e.g., "hello world" -> "Hello World").
///
/// Words are delimited the way Go's `strings.Title` delimits them: letters,
/// digits and `_` continue a word, anything else starts a new one. The rest of
/// each word is left untouched.
pub fn to_title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_separator = true;
    for c in s.chars() {
        if prev_separator {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        prev_separator = is_word_separator(c);
    }
    result
}

/// Lowercase the whole string, then title-case it (e.g., "HELLO" -> "Hello").
pub fn to_lower_title_case(s: &str) -> String {
    to_title_case(&s.to_lowercase())
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}
