//! Text cleanup utilities for generated sentences
//!
//! Sentence templates are filled with pieces that may be empty (an absent
//! auxiliary, an empty gloss marker), so every rendered sentence goes
//! through the same normalization before it is returned.

/// Collapse every run of whitespace into a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join the non-empty `parts` with spaces and append `terminator`
/// directly after the last word.
pub fn finish_sentence<'a>(parts: impl IntoIterator<Item = &'a str>, terminator: char) -> String {
    let mut sentence = collapse_whitespace(&parts.into_iter().collect::<Vec<_>>().join(" "));
    sentence.push(terminator);
    sentence
}
