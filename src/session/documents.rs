//! Per-URI document state.
//!
//! Documents use whole-document sync: every change notification
//! replaces the full text, held as an `Arc<str>` so analysis always
//! sees an atomically swapped snapshot, never a mid-mutation buffer.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use thiserror::Error;

/// The engine's only failure mode. Callers treat it as an empty
/// result (no items, no symbols, absent hover, no edits), not as a
/// fatal error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no document open for uri '{uri}'")]
    DocumentNotFound { uri: String },
}

impl SessionError {
    pub fn not_found(uri: &str) -> Self {
        Self::DocumentNotFound { uri: uri.to_string() }
    }
}

/// An open document.
#[derive(Debug, Clone)]
pub struct Document {
    pub uri: Arc<str>,
    pub language_id: SmolStr,
    pub version: i32,
    /// Current full text, swapped atomically on each change.
    pub text: Arc<str>,
}

/// Owns the open documents, keyed by URI.
#[derive(Default)]
pub struct DocumentStore {
    docs: RwLock<FxHashMap<Arc<str>, Document>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (or re-open) a document with its initial text.
    pub fn open(&self, uri: &str, language_id: &str, version: i32, text: &str) -> Document {
        let uri: Arc<str> = Arc::from(uri);
        let doc = Document {
            uri: uri.clone(),
            language_id: SmolStr::new(language_id),
            version,
            text: Arc::from(text),
        };
        self.docs.write().insert(uri, doc.clone());
        doc
    }

    /// Replace a document's entire text (whole-document sync).
    pub fn change(&self, uri: &str, version: i32, text: &str) -> Result<Document, SessionError> {
        let mut docs = self.docs.write();
        let doc = docs.get_mut(uri).ok_or_else(|| SessionError::not_found(uri))?;
        doc.version = version;
        doc.text = Arc::from(text);
        Ok(doc.clone())
    }

    /// Remove a document. Returns whether one was open.
    pub fn close(&self, uri: &str) -> bool {
        self.docs.write().remove(uri).is_some()
    }

    /// Get a snapshot of a document.
    pub fn get(&self, uri: &str) -> Result<Document, SessionError> {
        self.docs
            .read()
            .get(uri)
            .cloned()
            .ok_or_else(|| SessionError::not_found(uri))
    }

    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }
}
