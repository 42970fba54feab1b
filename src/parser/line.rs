//! Line classification.
//!
//! The validator and symbol extractor both walk the document line by
//! line; this module derives a [`LineRecord`] per line. Records are
//! recomputed on every pass and never cached across documents.

use smol_str::SmolStr;

use super::lexer::{Token, tokenize};

/// How a line participates in analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// Trimmed form starts with `//`.
    Comment,
    /// A statement line, classified by its leading keyword.
    Statement,
}

/// Derived per-line data for one pass over a document.
///
/// Blank and comment lines still occupy their line index so positions
/// stay accurate, but carry no tokens.
#[derive(Debug, Clone)]
pub struct LineRecord<'a> {
    /// 0-indexed line number.
    pub index: u32,
    /// The raw line text, without the trailing newline.
    pub raw: &'a str,
    /// The trimmed line text.
    pub trimmed: &'a str,
    /// Column (in characters) where the trimmed text starts.
    pub indent: u32,
    pub kind: LineKind,
    /// First whitespace-delimited token, upper-cased. `None` for blank
    /// and comment lines.
    pub keyword: Option<SmolStr>,
    /// Non-trivia lexical tokens of the raw line, in source order.
    /// Empty for blank and comment lines.
    pub tokens: Vec<Token<'a>>,
}

impl LineRecord<'_> {
    /// Whether the validator should look at this line.
    pub fn is_statement(&self) -> bool {
        self.kind == LineKind::Statement
    }
}

/// Split a document into classified line records.
pub fn classify(text: &str) -> Vec<LineRecord<'_>> {
    text.lines()
        .enumerate()
        .map(|(index, raw)| classify_line(index as u32, raw))
        .collect()
}

fn classify_line(index: u32, raw: &str) -> LineRecord<'_> {
    let trimmed = raw.trim();
    let indent = raw[..raw.len() - raw.trim_start().len()].chars().count() as u32;

    let kind = if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with("//") {
        LineKind::Comment
    } else {
        LineKind::Statement
    };

    let (keyword, tokens) = match kind {
        LineKind::Statement => {
            let first = trimmed
                .split_whitespace()
                .next()
                .map(|w| SmolStr::new(w.to_ascii_uppercase()));
            let tokens = tokenize(raw)
                .into_iter()
                .filter(|t| !t.kind.is_trivia())
                .collect();
            (first, tokens)
        }
        _ => (None, Vec::new()),
    };

    LineRecord {
        index,
        raw,
        trimmed,
        indent,
        kind,
        keyword,
        tokens,
    }
}
