//! Completion suggestions implementation.

use std::sync::Arc;

use crate::base::Position;
use crate::parser::keywords::{self, FIELDS, KEYWORDS};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Keyword,
    Field,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Keyword => 14, // Keyword
            CompletionKind::Field => 5,    // Field
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

}

/// Get completion suggestions at a position.
///
/// Always returns the full keyword table followed by the full field
/// table, regardless of cursor context. The result is deliberately not
/// filtered by what the user has typed; the editor filters by prefix.
pub fn completions(_text: &str, _position: Position) -> Vec<CompletionItem> {
    let mut items: Vec<CompletionItem> = KEYWORDS
        .iter()
        .map(|k| CompletionItem::new(k.label, CompletionKind::Keyword).with_detail(k.detail))
        .collect();

    items.extend(
        FIELDS
            .iter()
            .map(|f| CompletionItem::new(f.path, CompletionKind::Field).with_detail("Field path")),
    );

    items
}

/// Enrich a chosen completion item with its full documentation.
///
/// A pure lookup keyed on the item's category; unknown labels pass
/// through unchanged.
pub fn resolve(mut item: CompletionItem) -> CompletionItem {
    match item.kind {
        CompletionKind::Keyword => {
            if let Some(info) = keywords::keyword(&item.label) {
                item.detail = Some(Arc::from(info.detail));
                item.documentation = Some(Arc::from(info.documentation));
            }
        }
        CompletionKind::Field => {
            if let Some(info) = keywords::field(&item.label) {
                item.detail = Some(Arc::from("Field path"));
                item.documentation = Some(Arc::from(info.documentation));
            }
        }
    }
    item
}
