//! Range formatting for query documents.
//!
//! Formatting canonicalizes whole lines: the leading statement keyword
//! is upper-cased, punctuation gets a trailing space, whitespace runs
//! collapse, and each line is trimmed. The result is one replacement
//! edit for the requested range, never a set of minimal diffs.

use tokio_util::sync::CancellationToken;

use crate::base::{Position, Span};
use crate::parser::keywords;

/// Formatting options for query documents.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Upper-case a leading keyword token.
    pub uppercase_keywords: bool,
    /// Insert a single space after `,`, `(`, `)`, `{`, `}`.
    pub space_after_punctuation: bool,
    /// Collapse whitespace runs to one space and trim the line.
    pub collapse_whitespace: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            uppercase_keywords: true,
            space_after_punctuation: true,
            collapse_whitespace: true,
        }
    }
}

/// A single text replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    /// The range to replace (0-indexed).
    pub range: Span,
    /// The replacement text.
    pub new_text: String,
}

/// Format the lines covered by `range`, returning one replacement edit.
///
/// The range is normalized to whole lines: the edit runs from column 0
/// of the first covered line to the end of the last one, since
/// replacing a mid-line fragment with reformatted full lines would
/// corrupt the buffer. Returns `None` when the range starts past the
/// last line.
pub fn range_format(text: &str, range: Span, options: &FormatOptions) -> Option<TextEdit> {
    format_range_async(text, range, options, &CancellationToken::new())
}

/// Format a range with cancellation support.
/// Returns `None` if the cancellation token is signalled.
pub fn format_range_async(
    text: &str,
    range: Span,
    options: &FormatOptions,
    cancel: &CancellationToken,
) -> Option<TextEdit> {
    let lines: Vec<&str> = text.lines().collect();
    let start_line = range.start.line as usize;
    if start_line >= lines.len() {
        return None;
    }
    let end_line = (range.end.line as usize).min(lines.len() - 1);

    let mut formatted = Vec::with_capacity(end_line - start_line + 1);
    for line in &lines[start_line..=end_line] {
        if cancel.is_cancelled() {
            return None;
        }
        formatted.push(format_line(line, options));
    }

    let last_width = lines[end_line].chars().count() as u32;
    Some(TextEdit {
        range: Span::new(
            Position::new(start_line as u32, 0),
            Position::new(end_line as u32, last_width),
        ),
        new_text: formatted.join("\n"),
    })
}

/// Apply the canonicalization rules to one line.
///
/// Only the statement keyword (the first whitespace-delimited token) is
/// upper-cased, and only when the whole token matches a keyword, so a
/// leading `indexed` stays untouched.
fn format_line(line: &str, options: &FormatOptions) -> String {
    let mut canonical;
    let mut line = line;

    if options.uppercase_keywords {
        if let Some(first) = line.split_whitespace().next() {
            if keywords::keyword(first).is_some() {
                canonical = String::with_capacity(line.len());
                let start = line.len() - line.trim_start().len();
                canonical.push_str(&line[..start]);
                canonical.push_str(&first.to_ascii_uppercase());
                canonical.push_str(&line[start + first.len()..]);
                line = &canonical;
            }
        }
    }

    let mut spaced = String::with_capacity(line.len() + 8);
    for c in line.chars() {
        spaced.push(c);
        if options.space_after_punctuation && matches!(c, ',' | '(' | ')' | '{' | '}') {
            spaced.push(' ');
        }
    }

    if options.collapse_whitespace {
        spaced.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        spaced
    }
}
