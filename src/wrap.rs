//! Character-count text fitting: greedy line wrapping and hard truncation.
//!
//! Both helpers measure text in `char`s rather than rendered glyph widths.  Every block pairs a
//! fixed font and size with a fixed budget, which keeps the approximation stable enough for
//! layout purposes.

use std::borrow::Cow;

/// Suffix appended to text cut by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// Splits `text` into lines of at most `max_chars` characters using greedy word packing.
///
/// Words are separated by any whitespace and joined back with single spaces.  Words are never
/// split: a word longer than `max_chars` occupies a line on its own.  Empty or whitespace-only
/// input produces no lines.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Returns `text` unchanged when it has at most `limit` characters, otherwise its first `limit`
/// characters followed by [`ELLIPSIS`].
pub fn truncate(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => {
            let mut shortened = String::with_capacity(cut + ELLIPSIS.len());
            shortened.push_str(&text[..cut]);
            shortened.push_str(ELLIPSIS);
            Cow::Owned(shortened)
        }
    }
}
