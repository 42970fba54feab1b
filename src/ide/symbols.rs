//! Symbol listing for the document outline.

use std::sync::Arc;

use crate::base::Span;
use crate::core::text_utils::find_substring;
use crate::parser::{TokenKind, classify, keywords};

/// Kind of an extracted symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    /// One of the 7 language keywords.
    Keyword,
    /// A known dotted field path.
    Variable,
}

impl SymbolKind {
    /// Convert to LSP symbol kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            SymbolKind::Keyword => 20,  // Key
            SymbolKind::Variable => 13, // Variable
        }
    }
}

/// A symbol occurrence for the document outline.
#[derive(Clone, Debug)]
pub struct SymbolInfo {
    /// Canonical name: the keyword label or the field path.
    pub name: Arc<str>,
    pub kind: SymbolKind,
    /// Occurrence span (0-indexed).
    pub span: Span,
}

/// Get all keyword and field-path occurrences in a document.
///
/// Every textual occurrence on every line is reported, keywords
/// case-insensitively. The column of each occurrence is looked up as
/// the first match of its exact text from the start of the line, so a
/// token repeating on one line yields entries with identical spans.
/// That lookup is knowingly naive; deduplicating here would change
/// behavior editors already depend on.
pub fn document_symbols(text: &str) -> Vec<SymbolInfo> {
    let mut symbols = Vec::new();

    for record in classify(text) {
        for token in &record.tokens {
            let entry = match token.kind {
                TokenKind::Word => keywords::keyword(token.text)
                    .map(|info| (Arc::from(info.label), SymbolKind::Keyword)),
                TokenKind::FieldPath => keywords::field(token.text)
                    .map(|info| (Arc::from(info.path), SymbolKind::Variable)),
                _ => None,
            };

            if let Some((name, kind)) = entry {
                let Some(col) = find_substring(record.raw, token.text) else {
                    continue;
                };
                let width = token.text.chars().count() as u32;
                symbols.push(SymbolInfo {
                    name,
                    kind,
                    span: Span::on_line(record.index, col as u32, col as u32 + width),
                });
            }
        }
    }

    symbols
}
