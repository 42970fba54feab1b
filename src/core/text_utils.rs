//! Text manipulation utilities for working with query source lines.

/// Check if a character is considered part of a word.
///
/// The Echo Query Language word class is `\w`: ASCII alphanumerics and
/// underscore. Dotted field paths are words joined by `.`, which is a
/// boundary character.
#[inline]
pub fn is_word_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Find the boundaries of the word at the given position.
///
/// Returns `Some((start, end))` where `start` is the character index of
/// the word start and `end` is the character index after the last word
/// character. A position sitting exactly on a word's end boundary (the
/// first non-word column after it) counts as inside that word, matching
/// editor hover behavior where the caret after the last character still
/// targets the token. Returns `None` if there is no word at the position.
pub fn find_word_boundaries(chars: &[char], position: usize) -> Option<(usize, usize)> {
    let anchor = if position < chars.len() && is_word_character(chars[position]) {
        position
    } else if position > 0 && position <= chars.len() && is_word_character(chars[position - 1]) {
        position - 1
    } else {
        return None;
    };

    let mut start = anchor;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    let mut end = anchor;
    while end < chars.len() && is_word_character(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// Extract the word at the cursor position in a line of text.
///
/// Returns the word and its `(start, end)` character range, or `None`
/// if the cursor is not on (or immediately after) a word.
///
/// # Example
/// ```
/// use echoql::core::text_utils::extract_word_at_cursor;
///
/// let line = "FILTER age > 25";
/// assert_eq!(extract_word_at_cursor(line, 2), Some(("FILTER".to_string(), 0, 6)));
/// assert_eq!(extract_word_at_cursor(line, 6), Some(("FILTER".to_string(), 0, 6)));
/// assert_eq!(extract_word_at_cursor(line, 11), None); // operator
/// ```
pub fn extract_word_at_cursor(line: &str, position: usize) -> Option<(String, usize, usize)> {
    let chars: Vec<char> = line.chars().collect();
    let (start, end) = find_word_boundaries(&chars, position)?;
    Some((chars[start..end].iter().collect(), start, end))
}

/// Find the character index of the first occurrence of `needle` in `line`.
///
/// Plain substring search over characters so the result is a column
/// index, not a byte offset.
pub fn find_substring(line: &str, needle: &str) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    let pattern: Vec<char> = needle.chars().collect();
    if pattern.is_empty() || pattern.len() > chars.len() {
        return None;
    }
    (0..=chars.len() - pattern.len()).find(|&i| chars[i..i + pattern.len()] == pattern[..])
}
