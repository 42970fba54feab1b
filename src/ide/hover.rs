//! Hover information implementation.

use crate::base::{Position, Span};
use crate::core::text_utils::extract_word_at_cursor;
use crate::parser::keywords;

/// Fallback hover content for words that are not keywords.
const GENERIC_HOVER: &str = "Echo Query Language";

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Span of the hovered word (0-indexed).
    pub span: Span,
}

/// Get hover information for a position.
///
/// Locates the word under the cursor (a cursor exactly on a word's end
/// boundary counts as inside it) and returns keyword documentation when
/// the word is one of the 7 keywords, in any case. A word that is found
/// but not recognized yields the generic language hover; no word at all
/// yields `None`. These are distinct cases: whitespace between tokens
/// must not produce the fallback.
pub fn hover(text: &str, position: Position) -> Option<HoverResult> {
    let line = text.lines().nth(position.line as usize)?;
    let (word, start, end) = extract_word_at_cursor(line, position.column as usize)?;

    let contents = match keywords::keyword(&word) {
        Some(info) => format!("```echoql\n{}\n```\n\n{}", info.label, info.documentation),
        None => GENERIC_HOVER.to_string(),
    };

    Some(HoverResult {
        contents,
        span: Span::on_line(position.line, start as u32, end as u32),
    })
}
