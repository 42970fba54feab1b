//! Document session management.
//!
//! The [`Session`] is the external-facing driver: it owns per-URI
//! document state, schedules debounced validation on open/change, and
//! answers the synchronous requests (completion, hover, symbols,
//! formatting) against the current snapshot. The transport layer that
//! feeds it notifications is an external collaborator.

mod documents;
mod scheduler;

pub use documents::{Document, DocumentStore, SessionError};
pub use scheduler::{DiagnosticsSink, ValidationScheduler};

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::base::{Position, Span};
use crate::ide::{
    CompletionItem, FormatOptions, HoverResult, SymbolInfo, TextEdit, completions,
    document_symbols, hover, range_format,
};

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// How long edits must pause before validation runs.
    pub debounce: Duration,
    /// Options applied to range-formatting requests.
    pub format: FormatOptions,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            format: FormatOptions::default(),
        }
    }
}

/// Owns document state and drives the analysis functions.
pub struct Session {
    store: DocumentStore,
    scheduler: ValidationScheduler,
    sink: DiagnosticsSink,
    options: SessionOptions,
}

impl Session {
    /// Create a session publishing diagnostics through `sink`.
    pub fn new(options: SessionOptions, sink: DiagnosticsSink) -> Self {
        Self {
            store: DocumentStore::new(),
            scheduler: ValidationScheduler::new(options.debounce, Arc::clone(&sink)),
            sink,
            options,
        }
    }

    // ==================== Notifications ====================

    /// A document was opened; validation is scheduled immediately.
    pub fn on_open(&self, uri: &str, language_id: &str, version: i32, text: &str) {
        debug!(uri, version, "document opened");
        let doc = self.store.open(uri, language_id, version, text);
        self.scheduler.schedule(doc.uri, doc.text);
    }

    /// A document's entire text was replaced (whole-document sync).
    pub fn on_change(&self, uri: &str, version: i32, text: &str) -> Result<(), SessionError> {
        let doc = self.store.change(uri, version, text)?;
        self.scheduler.schedule(doc.uri, doc.text);
        Ok(())
    }

    /// A document was closed: cancel pending validation and publish an
    /// explicit empty diagnostic set so no stale markers stay visible.
    pub fn on_close(&self, uri: &str) {
        debug!(uri, "document closed");
        self.store.close(uri);
        self.scheduler.cancel(uri);
        (self.sink)(uri, Vec::new());
    }

    // ==================== Synchronous requests ====================

    /// Completion items for a document position.
    pub fn completions(
        &self,
        uri: &str,
        position: Position,
    ) -> Result<Vec<CompletionItem>, SessionError> {
        let doc = self.store.get(uri)?;
        Ok(completions(&doc.text, position))
    }

    /// Hover content for a document position.
    pub fn hover(&self, uri: &str, position: Position) -> Result<Option<HoverResult>, SessionError> {
        let doc = self.store.get(uri)?;
        Ok(hover(&doc.text, position))
    }

    /// Keyword and field-path occurrences for the document outline.
    pub fn document_symbols(&self, uri: &str) -> Result<Vec<SymbolInfo>, SessionError> {
        let doc = self.store.get(uri)?;
        Ok(document_symbols(&doc.text))
    }

    /// Reformat a range of the document.
    pub fn range_format(&self, uri: &str, range: Span) -> Result<Option<TextEdit>, SessionError> {
        let doc = self.store.get(uri)?;
        Ok(range_format(&doc.text, range, &self.options.format))
    }

    /// Access the document store (mainly for inspection in tests).
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }
}
